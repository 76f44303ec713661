//! Extraction records handed to the downstream checker.
//!
//! Records are emitted in traversal order. Nothing here sorts or
//! de-duplicates: two identical lookups in one file are two records.

use std::fmt;

use serde::Serialize;

/// Which usage shape produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// `t("key", { ... })`
    FunctionCall,
    /// `<Trans i18nKey="key" values={{ ... }} />`
    TemplatedElement,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::FunctionCall => "function-call",
            SourceKind::TemplatedElement => "templated-element",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the interpolation variables of a usage could be enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "names", rename_all = "lowercase")]
pub enum VariableKnowledge {
    /// Variable names in declaration order.
    Known(Vec<String>),
    /// Variables are supplied, but not as a plain object literal.
    Unknown,
}

impl VariableKnowledge {
    pub fn none() -> Self {
        VariableKnowledge::Known(Vec::new())
    }
}

/// One translation lookup found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    pub source: SourceKind,
    /// Literal localization key. Never empty.
    pub i18n_key: String,
    pub variables: VariableKnowledge,
    /// 1-based line of the key literal (calls) or the element (templated elements).
    pub line: usize,
    /// 1-based column, same anchor as `line`.
    pub col: usize,
}

impl ExtractionRecord {
    pub fn new(
        source: SourceKind,
        i18n_key: impl Into<String>,
        variables: VariableKnowledge,
        (line, col): (usize, usize),
    ) -> Self {
        Self {
            source,
            i18n_key: i18n_key.into(),
            variables,
            line,
            col,
        }
    }
}
