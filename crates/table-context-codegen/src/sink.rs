// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output registration.
//!
//! The derive macro hands its unit straight back to the compiler. Build
//! scripts register units with a sink instead:
//!
//! ```rust,ignore
//! // build.rs
//! let mut sink = DirectorySink::new(std::env::var("OUT_DIR")?);
//! for (class, result) in generate_all(&decls, &ScalarOracle, &CodegenConfig::default(), &mut sink) {
//!     result.map_err(|err| format!("{class}: {err}"))?;
//! }
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf}
};

use crate::error::GenerateError;

/// Destination of generated source files.
pub trait OutputSink {
    /// Register one generated source file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] when the file cannot be stored.
    fn add_source(&mut self, file_name: &str, source: &str) -> Result<(), GenerateError>;
}

/// Sink keeping every file in memory, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source registered under `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// Registered file names.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Number of registered files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn add_source(&mut self, file_name: &str, source: &str) -> Result<(), GenerateError> {
        self.files.insert(file_name.to_string(), source.to_string());
        Ok(())
    }
}

/// Sink writing each file into a directory, created on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf
}

impl DirectorySink {
    /// Write into `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into()
        }
    }

    /// Target directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirectorySink {
    fn add_source(&mut self, file_name: &str, source: &str) -> Result<(), GenerateError> {
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| GenerateError::Io {
                path,
                source
            }
        };

        fs::create_dir_all(&self.root).map_err(io_error(&self.root))?;
        let path = self.root.join(file_name);
        fs::write(&path, source).map_err(io_error(&path))
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn add_source(&mut self, file_name: &str, source: &str) -> Result<(), GenerateError> {
        (**self).add_source(file_name, source)
    }
}
