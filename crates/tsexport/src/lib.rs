//! tsexport - backend schema to TypeScript interface exporter.
//!
//! The command-line front end lives here; the translation engine is in
//! `tsexport-codegen` and the shared schema model in `tsexport-core`.

pub mod cli;

#[doc(hidden)]
pub use tsexport_codegen;
#[doc(hidden)]
pub use tsexport_core;

pub use cli::Cli;
