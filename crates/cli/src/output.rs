// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Results JSON files.
//!
//! A results file holds one [`Collection`] (`{"testResults": [...]}`).
//! Output is buffered and written in one go.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Collection;

/// JSON layout of written results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

/// Serialize `collection` in the given style.
pub fn to_json(collection: &Collection, style: JsonStyle) -> serde_json::Result<String> {
    match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(collection),
        JsonStyle::Compact => serde_json::to_string(collection),
    }
}

/// Write `collection` to `writer`, followed by a newline.
pub fn write_collection(
    writer: &mut impl Write,
    collection: &Collection,
    style: JsonStyle,
) -> std::io::Result<()> {
    let json = to_json(collection, style).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

/// Write `collection` to the file at `path`, replacing it.
pub fn save_collection(path: &Path, collection: &Collection, style: JsonStyle) -> Result<()> {
    let json = to_json(collection, style).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, format!("{json}\n")).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), reports = collection.reports.len(), "saved results");
    Ok(())
}

/// Read a results file.
pub fn load_collection(path: &Path) -> Result<Collection> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
