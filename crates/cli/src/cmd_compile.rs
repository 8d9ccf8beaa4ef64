// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command: XML reports in, one results file out.

use test_results::cache::FileCache;
use test_results::cli::{Cli, CompileArgs};
use test_results::collect::Collector;
use test_results::error::{Error, ExitCode};
use test_results::output;
use test_results::parsers::AUTO;

pub fn run(cli: &Cli, args: &CompileArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let options = args.apply(config.collect_options());
    let registry = config.registry()?;

    if options.parser != AUTO && !registry.contains(&options.parser) {
        return Err(Error::ParserNotFound {
            name: options.parser,
        }
        .into());
    }

    let mut collector = Collector::new(registry, FileCache::new(config.reader()), options);
    let outcome = collector.collect_all(&args.inputs);

    for (path, err) in &outcome.failures {
        eprintln!("test-results: {}: {}", path.display(), err);
    }

    let degraded: Vec<_> = outcome
        .collection
        .reports
        .iter()
        .filter(|r| r.is_error())
        .collect();
    for report in &degraded {
        eprintln!("test-results: {}: {}", report.name, report.status_message);
    }

    output::save_collection(&args.output, &outcome.collection, args.style())?;

    let summary = outcome.collection.summary();
    tracing::info!(
        inputs = args.inputs.len(),
        reports = outcome.collection.reports.len(),
        tests = summary.total,
        failed = summary.failed,
        "compiled results"
    );

    if outcome.is_success() && degraded.is_empty() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::PartialFailure)
    }
}
