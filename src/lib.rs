//! keyscan - static extraction of i18n keys and interpolation variables
//!
//! keyscan walks JS/JSX/TS/TSX sources and records every translation lookup,
//! either a `t("key", { ... })` call or a `<Trans i18nKey="key" />` element,
//! together with the interpolation variable names it supplies when those can
//! be enumerated statically. The records feed a checker that compares them
//! against translation bundles.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, node walking, extraction and project scanning
//! - `issues`: Problems reported during a project scan

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
