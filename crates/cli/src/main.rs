// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! test-results CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use test_results::cli::{Cli, Command};
use test_results::config::{self, Config};
use test_results::discovery;
use test_results::error::ExitCode;

mod cmd_combine;
mod cmd_compile;

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env("TEST_RESULTS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("test-results: {}", e);
            match e.downcast_ref::<test_results::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Compile(args)) => cmd_compile::run(cli, args),
        Some(Command::Combine(args)) => cmd_combine::run(cli, args),
    }
}

/// Load the explicit or discovered config, or fall back to defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}
