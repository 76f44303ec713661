use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{extract::ExtractOptions, file_scanner::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".keyscanrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignore_test_files: bool,
    #[serde(default = "default_function_name")]
    pub function_name: String,
    #[serde(default = "default_component_name")]
    pub component_name: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/.cache/**"]
        .map(String::from)
        .to_vec()
}

fn default_function_name() -> String {
    "t".to_string()
}

fn default_component_name() -> String {
    "Trans".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            ignore_test_files: false,
            function_name: default_function_name(),
            component_name: default_component_name(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is
    /// invalid, or if the function or component name is blank.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.function_name.trim().is_empty() {
            bail!("'functionName' must not be empty");
        }
        if self.component_name.trim().is_empty() {
            bail!("'componentName' must not be empty");
        }

        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            function_name: self.function_name.clone(),
            component_name: self.component_name.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory holding the config file, when one was found.
    pub config_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Directory to scan according to `sourceRoot`.
    ///
    /// A relative `sourceRoot` is resolved against the directory holding the
    /// config file, or against the working directory when no file was found.
    pub fn source_root(&self) -> PathBuf {
        let source_root = Path::new(&self.config.source_root);
        match &self.config_dir {
            Some(dir) if source_root.is_relative() => dir.join(source_root),
            _ => source_root.to_path_buf(),
        }
    }
}

/// Load the nearest config file above `start_dir`.
///
/// The search starts from the canonical form of `start_dir` so that a
/// relative start such as `.` still walks up through its parents.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let search_dir = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    match find_config_file(&search_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            config_dir: None,
        }),
    }
}
