// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::collect::CollectOptions;
use crate::output::JsonStyle;

/// Normalizes test framework XML reports into one JSON schema and merges them
#[derive(Parser)]
#[command(name = "test-results")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TEST_RESULTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log everything to stderr
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Default log filter, used when TEST_RESULTS_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "info"
        } else {
            "off"
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Interpret XML reports and write them as one results JSON file
    Compile(CompileArgs),
    /// Merge results JSON files into one
    Combine(CombineArgs),
}

#[derive(clap::Args)]
pub struct CompileArgs {
    /// XML report files
    #[arg(value_name = "XML", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Results file to write
    #[arg(value_name = "OUT")]
    pub output: PathBuf,

    /// Interpreter to use, or "auto" to detect from content [config default: auto]
    #[arg(short = 'p', long, value_name = "NAME")]
    pub parser: Option<String>,

    /// Override the report name
    #[arg(short = 'N', long)]
    pub name: Option<String>,

    /// Prefix every suite name
    #[arg(short = 'S', long, value_name = "PREFIX")]
    pub suite_prefix: Option<String>,

    /// Regroup suites by test file
    #[arg(long)]
    pub group_by_file: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl CompileArgs {
    /// Apply flags on top of configured options.
    pub fn apply(&self, mut options: CollectOptions) -> CollectOptions {
        if let Some(parser) = &self.parser {
            options.parser = parser.clone();
        }
        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if let Some(prefix) = &self.suite_prefix {
            options.suite_prefix = Some(prefix.clone());
        }
        if self.group_by_file {
            options.group_by_file = true;
        }
        options
    }

    pub fn style(&self) -> JsonStyle {
        json_style(self.compact)
    }
}

#[derive(clap::Args)]
pub struct CombineArgs {
    /// Results JSON files, merged in order
    #[arg(value_name = "JSON", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Results file to write
    #[arg(value_name = "OUT")]
    pub output: PathBuf,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl CombineArgs {
    pub fn style(&self) -> JsonStyle {
        json_style(self.compact)
    }
}

fn json_style(compact: bool) -> JsonStyle {
    if compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
