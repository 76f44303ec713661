use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        extract::{ExtractionRecord, extract_file},
        file_scanner::scan_files,
    },
    issues::ParseErrorIssue,
};

/// Records of every successfully parsed file, keyed by path relative to the
/// source root.
pub type AllRecords = BTreeMap<String, Vec<ExtractionRecord>>;

/// Output of a project-wide extraction.
#[derive(Debug, Default)]
pub struct ProjectExtraction {
    /// Files are ordered by path; records keep traversal order within a file.
    pub records: AllRecords,
    /// Files that could not be read or parsed. They contribute no records.
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl ProjectExtraction {
    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

/// Configuration and file list for one extraction run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--source-root`)
/// 2. `.keyscanrc.json`, searched upward from the source root
/// 3. Built-in defaults
pub struct ExtractionContext {
    pub config: Config,
    /// Directory that was scanned; output paths are relative to it.
    pub root_dir: PathBuf,
    pub files: BTreeSet<String>,
}

impl ExtractionContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&search_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .keyscanrc.json found, using default configuration");
        }
        // An explicit --source-root wins over the config's sourceRoot.
        let root_dir = match &common_args.source_root {
            Some(root) => root.clone(),
            None => config_result.source_root(),
        };
        let config = config_result.config;
        let base = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let scan_result = scan_files(
            base,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
        })
    }

    /// Extract every scanned file.
    ///
    /// Files are read, parsed and walked in parallel; each file gets its own
    /// SourceMap and extractor, so no state is shared between them.
    pub fn run(&self) -> ProjectExtraction {
        let options = self.config.extract_options();

        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, extract_file(Path::new(file_path), &options)))
            .collect();

        let mut extraction = ProjectExtraction::default();
        for (file_path, result) in results {
            let display_path = self.display_path(file_path);
            match result {
                Ok(records) => {
                    extraction.records.insert(display_path, records);
                }
                Err(e) => {
                    extraction.parse_errors.push(ParseErrorIssue {
                        file_path: display_path,
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        extraction
    }

    fn display_path(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
