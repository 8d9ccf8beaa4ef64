// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test report normalization library.
//!
//! Reads JUnit-style XML from RSpec, ExUnit, Mocha, PHPUnit, Go and generic
//! producers, normalizes it into one [`Report`] model with deterministic ids,
//! and merges reports from parallel jobs into a single [`Collection`].

pub mod cache;
pub mod cli;
pub mod collect;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod output;
pub mod parsers;
pub mod reader;
pub mod xml;

pub use cache::FileCache;
pub use collect::{CollectOptions, CollectOutcome, Collector};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use model::{Collection, Report, State, Status, Suite, Summary, Test};
pub use parsers::{ParserRegistry, ReportParser};
pub use reader::{FileContent, FileReader};
pub use xml::Element;
