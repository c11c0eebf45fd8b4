pub mod parser;
pub mod typescript;

pub use parser::{parse_document, parse_project};
pub use typescript::{
    Diagnostics, Error, ExportReport, FileWriter, HeuristicInferrer, MemoryWriter, OutputWriter,
    ReturnTypeInferrer, TypeScriptGenerator,
};
