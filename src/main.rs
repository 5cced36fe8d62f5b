mod cli;
mod console;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::*;
use console::{print_status, ConsoleReporter};
use dotenv::dotenv;
use std::env;
use tidy_tunes::{Level, Mode, RenameEngine};
use tracing::{debug, error, info};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let folder = env::current_dir()
        .context("Could not determine the working directory")?
        .join(&args.folder);
    debug!("Target folder: {}", folder.display());

    if !folder.is_dir() {
        print_status(
            "Error: The specified path does not exist or is not a folder.",
            Level::Error,
        );
        return Ok(());
    }

    let mode = if args.change { Mode::Apply } else { Mode::Report };
    let engine = RenameEngine::new(folder)
        .with_mode(mode)
        .with_ignore_patterns(args.ignore_patterns);
    let reporter = ConsoleReporter::new(mode);

    match engine.run(&reporter) {
        Ok(summary) => {
            info!(
                "{} renames, {} duplicates, {} failures in {}",
                format!("{}", summary.renames.len()).yellow(),
                format!("{}", summary.duplicates.len()).red(),
                format!("{}", summary.failed).red(),
                engine.folder().display(),
            );
        }
        Err(err) => {
            error!("Error: {}", err);
            print_status(&format!("Error: {}", err), Level::Error);
        }
    }

    Ok(())
}
