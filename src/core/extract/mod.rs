//! Translation key extraction.
//!
//! `KeyExtractor` consumes the node stream produced by the walker and
//! recognizes two usage shapes:
//!
//! - function-style lookups: `t("key", { name })`
//! - templated elements: `<Trans i18nKey="key" values={{ name }} count={n} />`
//!
//! Each recognized usage becomes an `ExtractionRecord`. Usages whose key is
//! not a static string are skipped; usages whose variables cannot be
//! enumerated are recorded with `VariableKnowledge::Unknown`.

pub mod engine;
pub mod record;
pub mod trans;

pub use engine::{ExtractOptions, KeyExtractor, extract_file, extract_source};
pub use record::{ExtractionRecord, SourceKind, VariableKnowledge};
pub use trans::classify_element;
