use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::fs;
use std::path::PathBuf;

use tsexport_core::config::CONFIG_FILE;
use tsexport_core::TsExportConfig;

/// Write a default configuration file.
#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Directory to create the configuration in.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Project name written to the configuration.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Replace an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        if path.exists() && !self.force {
            bail!(
                "{} already exists. Use --force to replace it.",
                path.display()
            );
        }

        let mut config = TsExportConfig::default();
        if let Some(name) = self.name {
            config.project.name = name;
        }

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, config.to_toml()?)?;

        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempdir().unwrap();
        InitCommand {
            dir: dir.path().to_path_buf(),
            name: Some("shop".to_string()),
            force: false,
        }
        .execute()
        .unwrap();

        let config = TsExportConfig::from_file(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.project.name, "shop");
        assert_eq!(config.export.outdir, "./typescript");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[project]\nname = \"keep\"\n").unwrap();

        let cmd = InitCommand {
            dir: dir.path().to_path_buf(),
            name: None,
            force: false,
        };
        assert!(cmd.execute().is_err());

        let content = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("keep"));
    }

    #[test]
    fn test_init_force_replaces() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[project]\nname = \"old\"\n").unwrap();

        InitCommand {
            dir: dir.path().to_path_buf(),
            name: None,
            force: true,
        }
        .execute()
        .unwrap();

        let config = TsExportConfig::from_file(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.project.name, "backend");
    }
}
