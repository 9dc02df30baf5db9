// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement generation.
//!
//! Turns a [`TableContext`] into the seven accessors of the base trait, each
//! paired with its SQL text.
//!
//! # Architecture
//!
//! ```text
//! table.rs (coordinator)
//! ├── context.rs     - precomputed identifiers and SQL fragments
//! ├── statement.rs   - Operation / MethodWithSqlStatement
//! ├── create.rs      - CREATE TABLE [IF NOT EXISTS]
//! ├── query.rs       - INSERT / UPSERT / UPDATE / DELETE / FIND
//! ├── bindings.rs    - parameter binding
//! ├── reader.rs      - row materialization
//! ├── conversion.rs  - conversion bridge declarations
//! └── parameter.rs   - create_parameter helper
//! ```

mod bindings;
mod context;
mod conversion;
mod create;
mod parameter;
mod query;
mod reader;
mod statement;

pub use context::Context;
pub use create::create_table_sql;
pub use reader::getter;
pub use statement::{MethodWithSqlStatement, Operation};

use crate::{error::GenerateError, schema::TableContext};

/// Generate every accessor of `table`, in [`Operation::ALL`] order.
///
/// # Errors
///
/// Propagates identifier, type and conversion naming failures.
pub fn generate_methods(
    table: &TableContext,
    runtime: &syn::Path
) -> Result<Vec<MethodWithSqlStatement>, GenerateError> {
    let ctx = Context::new(table, runtime)?;

    Ok(vec![
        ctx.create_method(false),
        ctx.create_method(true),
        ctx.insert_method()?,
        ctx.upsert_method()?,
        ctx.update_method()?,
        ctx.delete_method()?,
        ctx.find_method()?,
    ])
}
