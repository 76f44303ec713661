//! Single-pass key extraction over the flattened node stream.
//!
//! The walker offers no parent or sibling links, so a `t("key", ...)` call is
//! recognized from two adjacent nodes: an identifier named `t` followed by a
//! string literal with nothing but `(` between them in the source text. The
//! node after that literal tells us what the second argument looks like.

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use swc_common::{BytePos, SourceMap};

use super::record::{ExtractionRecord, SourceKind, VariableKnowledge};
use super::trans::classify_element;
use crate::core::{
    parsers::jsx::{ParsedSource, parse_jsx_source},
    syntax::{Node, ObjectShape, walk_module},
};

/// Names of the translation function and the templated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub function_name: String,
    pub component_name: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            function_name: "t".to_string(),
            component_name: "Trans".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WalkState {
    Seeking,
    /// A `t("key"` prefix was seen; the next node decides the variables.
    PendingCallArgument { key: String, at: BytePos },
}

/// Stateful visitor fed one node at a time, in traversal order.
pub struct KeyExtractor<'a> {
    source: &'a ParsedSource,
    options: &'a ExtractOptions,
    state: WalkState,
    previous: Option<Node>,
    records: Vec<ExtractionRecord>,
}

impl<'a> KeyExtractor<'a> {
    pub fn new(source: &'a ParsedSource, options: &'a ExtractOptions) -> Self {
        Self {
            source,
            options,
            state: WalkState::Seeking,
            previous: None,
            records: Vec::new(),
        }
    }

    /// Walk the whole module and return the records in traversal order.
    pub fn extract(mut self) -> Vec<ExtractionRecord> {
        let source = self.source;
        walk_module(&source.module, |node| self.visit(node));
        self.records
    }

    /// Advance the state machine by one node.
    pub fn visit(&mut self, node: Node) {
        let state = std::mem::replace(&mut self.state, WalkState::Seeking);

        match state {
            WalkState::Seeking => self.seek(&node),
            WalkState::PendingCallArgument { key, at } => {
                let variables = match &node {
                    Node::ObjectLiteral {
                        shape: ObjectShape::Simple(names),
                        ..
                    } => VariableKnowledge::Known(names.clone()),
                    Node::Numeric(_) => VariableKnowledge::none(),
                    _ => VariableKnowledge::Unknown,
                };
                self.emit(SourceKind::FunctionCall, key, variables, at);
            }
        }

        self.previous = Some(node);
    }

    fn seek(&mut self, node: &Node) {
        match node {
            Node::StringLiteral { span, value } if !value.is_empty() => {
                if self.follows_call_open_paren(span.lo) {
                    self.state = WalkState::PendingCallArgument {
                        key: value.clone(),
                        at: span.lo,
                    };
                }
            }
            Node::Element(element) if element.tag == self.options.component_name => {
                if let Some((key, variables)) = classify_element(element) {
                    self.emit(SourceKind::TemplatedElement, key, variables, element.span.lo);
                }
            }
            _ => {}
        }
    }

    /// The previous node is the translation function identifier and the only
    /// text between it and `literal_start` is an opening parenthesis.
    fn follows_call_open_paren(&self, literal_start: BytePos) -> bool {
        let Some(previous) = &self.previous else {
            return false;
        };
        if !previous.is_identifier_named(&self.options.function_name) {
            return false;
        }
        self.source
            .text_between(previous.span().hi, literal_start)
            .is_some_and(|between| between.trim() == "(")
    }

    fn emit(&mut self, source: SourceKind, key: String, variables: VariableKnowledge, at: BytePos) {
        self.records.push(ExtractionRecord::new(
            source,
            key,
            variables,
            self.source.line_col(at),
        ));
    }
}

/// Extract records from source text. `file_path` selects the syntax and is
/// used for error attribution only.
pub fn extract_source(
    code: String,
    file_path: &str,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionRecord>> {
    let parsed = parse_jsx_source(code, file_path, Arc::new(SourceMap::default()))
        .with_context(|| format!("Failed to parse {}", file_path))?;
    Ok(KeyExtractor::new(&parsed, options).extract())
}

/// Read a UTF-8 file and extract its records.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<ExtractionRecord>> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    extract_source(code, &path.to_string_lossy(), options)
}
