use std::{error::Error, process::exit};

use clap::Parser;
use tracing::{Level, error};

use unbg::{input::cli::CliArgs, remover};

fn main() {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    let settings = match args.create_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log_error_chain(&err);
            exit(1);
        }
    };

    settings.log();

    match remover::run(&settings) {
        Ok(report) => report.log(),
        Err(err) => {
            log_error_chain(&err);
            exit(1);
        }
    }
}

fn log_error_chain(err: &dyn Error) {
    error!("{}", err);

    let mut source = err.source();
    while let Some(cause) = source {
        error!("  caused by: {}", cause);
        source = cause.source();
    }
}
