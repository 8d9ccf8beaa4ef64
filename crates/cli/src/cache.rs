// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run cache of report bytes and parsed trees.
//!
//! Applicability probes and the final interpretation all look at the same
//! document. The cache makes sure each path is read once and parsed once
//! for the lifetime of the cache instance.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Error;
use crate::reader::FileReader;
use crate::xml::{self, Element, ParseError};

/// Failure to turn a path into a tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] Error),

    #[error(transparent)]
    Xml(#[from] ParseError),
}

/// Content-keyed cache scoped to one run.
#[derive(Debug, Default)]
pub struct FileCache {
    reader: FileReader,
    bytes: HashMap<PathBuf, Arc<[u8]>>,
    trees: HashMap<PathBuf, Arc<Element>>,
}

impl FileCache {
    pub fn new(reader: FileReader) -> Self {
        Self {
            reader,
            ..Self::default()
        }
    }

    /// Bytes of `path`, read from disk on first access.
    pub fn read(&mut self, path: &Path) -> Result<Arc<[u8]>, Error> {
        if let Some(bytes) = self.bytes.get(path) {
            tracing::trace!(path = %path.display(), "file cache hit");
            return Ok(Arc::clone(bytes));
        }

        let content = self.reader.read(path)?;
        let bytes: Arc<[u8]> = content.bytes.into();
        self.bytes.insert(path.to_path_buf(), Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Seed the cache with in-memory content for `path`.
    ///
    /// Any tree previously parsed for the path is dropped.
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) {
        let path = path.into();
        self.trees.remove(&path);
        self.bytes.insert(path, bytes.into());
    }

    /// Parsed tree of `path`. Only successful parses are memoised.
    pub fn tree(&mut self, path: &Path) -> Result<Arc<Element>, LoadError> {
        if let Some(tree) = self.trees.get(path) {
            return Ok(Arc::clone(tree));
        }

        let bytes = self.read(path)?;
        let tree = Arc::new(xml::parse(&bytes)?);
        tracing::debug!(path = %path.display(), root = %tree.tag, "parsed report tree");

        self.trees.insert(path.to_path_buf(), Arc::clone(&tree));
        Ok(tree)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.bytes.contains_key(path)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
