//! Problems reported while extracting a project.

/// A source file that could not be read or parsed.
///
/// The file contributes no records to the extraction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}
