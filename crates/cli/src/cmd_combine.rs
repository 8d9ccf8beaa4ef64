// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Combine command: merge results files.

use test_results::cli::{Cli, CombineArgs};
use test_results::error::ExitCode;
use test_results::model::Collection;
use test_results::output;

pub fn run(_cli: &Cli, args: &CombineArgs) -> anyhow::Result<ExitCode> {
    let mut combined = Collection::new();
    let mut failed = false;

    for path in &args.inputs {
        match output::load_collection(path) {
            Ok(collection) => {
                tracing::debug!(path = %path.display(), reports = collection.reports.len(), "loaded results");
                combined.combine(collection);
            }
            Err(err) => {
                eprintln!("test-results: {}", err);
                failed = true;
            }
        }
    }

    output::save_collection(&args.output, &combined, args.style())?;

    if failed {
        Ok(ExitCode::PartialFailure)
    } else {
        Ok(ExitCode::Success)
    }
}
