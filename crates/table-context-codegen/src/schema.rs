// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema model and extraction.
//!
//! # Architecture
//!
//! ```text
//! schema.rs (coordinator)
//! ├── decl.rs     - ClassDecl / PropertyDecl / Annotation input model
//! ├── oracle.rs   - TypeOracle: enum resolution
//! ├── types.rs    - host ↔ relational type tables
//! ├── context.rs  - FieldContext / TableContext output model
//! ├── extract.rs  - ClassDecl → TableContext
//! └── naming.rs   - conversion bridge names
//! ```

mod context;
mod decl;
mod oracle;

pub mod extract;
pub mod naming;
pub mod types;

pub use context::{FieldContext, TableContext, TableUniqueContext, strip_nullable};
pub use decl::{Accessors, Annotation, AnnotationArg, ClassDecl, PropertyDecl};
pub use extract::extract_table;
pub use naming::{ConversionNames, conversion_names};
pub use oracle::{EnumHints, IntWidth, ResolvedType, ScalarOracle, TypeOracle};
pub use types::{Mapping, RelationalType, canonical_host_type, map_host_type};
