use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::{Module, ModuleItem, Program};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file together with the text it was parsed from.
///
/// The extraction engine needs the raw text to inspect what lies between two
/// adjacent nodes, so the original code is kept alongside the AST.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub code: String,
    /// Position of the first byte of `code` inside `source_map`.
    pub start_pos: BytePos,
}

impl ParsedSource {
    /// Slice of the original text between two absolute positions.
    ///
    /// Returns `None` when the range is inverted or does not fall on
    /// character boundaries.
    pub fn text_between(&self, lo: BytePos, hi: BytePos) -> Option<&str> {
        let start = lo.0.checked_sub(self.start_pos.0)? as usize;
        let end = hi.0.checked_sub(self.start_pos.0)? as usize;
        if start > end {
            return None;
        }
        self.code.get(start..end)
    }

    /// 1-based line and column of an absolute position.
    pub fn line_col(&self, pos: BytePos) -> (usize, usize) {
        line_col(&self.source_map, pos)
    }
}

/// Pick the swc syntax for a file. Plain `.ts` files must not enable TSX,
/// otherwise angle-bracket type assertions fail to parse.
fn syntax_for(file_path: &str) -> Syntax {
    let is_plain_ts = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == "ts" || ext == "mts" || ext == "cts");

    Syntax::Typescript(TsSyntax {
        tsx: !is_plain_ts,
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code into an AST.
///
/// Both fatal errors and errors the parser recovered from are reported as a
/// failure: a file with malformed syntax yields no partial tree.
///
/// Files without import or export declarations are parsed as sloppy-mode
/// scripts, so strict-mode-only restrictions (legacy octal literals, `with`)
/// apply to ES modules alone. Scripts are returned as a `Module` whose items
/// are all statements.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());
        let start_pos = source_file.start_pos;

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let program = parser.parse_program().map_err(|e| {
            let (line, col) = line_col(&source_map, e.span().lo);
            anyhow!("{} ({}:{})", e.kind().msg(), line, col)
        })?;

        if let Some(e) = parser.take_errors().into_iter().next() {
            let (line, col) = line_col(&source_map, e.span().lo);
            return Err(anyhow!("{} ({}:{})", e.kind().msg(), line, col));
        }

        let module = match program {
            Program::Module(module) => module,
            Program::Script(script) => Module {
                span: script.span,
                body: script.body.into_iter().map(ModuleItem::Stmt).collect(),
                shebang: script.shebang,
            },
        };

        Ok(ParsedSource {
            module,
            source_map,
            code,
            start_pos,
        })
    })
}

fn line_col(source_map: &SourceMap, pos: BytePos) -> (usize, usize) {
    let loc = source_map.lookup_char_pos(pos);
    (loc.line, loc.col.0 + 1)
}
