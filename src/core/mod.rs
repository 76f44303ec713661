//! Extraction pipeline.
//!
//! - `parsers`: swc-based source parsing
//! - `syntax`: flattened node model and the walker producing it
//! - `extract`: the key extraction state machine and its records
//! - `file_scanner`: source file discovery
//! - `context`: project-wide extraction across files

pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod syntax;

pub use context::{ExtractionContext, ProjectExtraction};
pub use extract::{ExtractOptions, ExtractionRecord, SourceKind, VariableKnowledge};
