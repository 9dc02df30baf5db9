// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation settings.

/// Default runtime crate path used by generated code.
///
/// Used when no `#[table(runtime = "...")]` override is present.
#[must_use]
pub fn default_runtime() -> syn::Path {
    syn::parse_quote!(::table_context)
}

/// Settings shared by every class of a generation pass.
///
/// # Example
///
/// ```rust,ignore
/// let config = CodegenConfig::default().with_runtime(syn::parse_quote!(crate::db));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Path of the crate providing the runtime traits (`DbConnection`,
    /// `ToParameter`, ...). Defaults to the `table_context` facade; point it
    /// at `::table_context_core` when depending on the runtime crate alone.
    pub runtime: syn::Path
}

impl CodegenConfig {
    /// Replace the runtime crate path.
    #[must_use]
    pub fn with_runtime(mut self, runtime: syn::Path) -> Self {
        self.runtime = runtime;
        self
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime()
        }
    }
}
