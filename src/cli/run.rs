use std::{fs, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command, ExtractCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::core::context::ExtractionContext;

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = ExtractionContext::new(&cmd.common)?;
    let extraction = ctx.run();

    match cmd.format {
        OutputFormat::Text => report::print_text(&extraction),
        OutputFormat::Json => report::print_json(&extraction)?,
    }
    report::print_parse_errors(&extraction.parse_errors, cmd.common.verbose);

    if extraction.parse_errors.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
