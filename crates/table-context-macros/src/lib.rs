// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use proc_macro::TokenStream;

/// Derive the `<Struct>TableContextBase` data access trait.
///
/// The trait carries DDL and CRUD accessors for the struct's table:
/// `create_table`, `create_table_if_not_exists`, `insert`, `upsert`,
/// `update`, `delete` and `find`. Implementors supply the connection and,
/// for field types without a native column type, a pair of conversion
/// bridges.
///
/// # Struct Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[table("name")]` | Table name (default: struct name) |
/// | `#[table(runtime = "path")]` | Runtime crate (default: `::table_context`) |
/// | `#[table_unique(a, b)]` | Multi-column UNIQUE constraint |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[primary_key]` | Primary key, exactly one required |
/// | `#[unique]` | UNIQUE column |
/// | `#[column_name("col")]` | Column name (default: field name) |
/// | `#[varchar(n)]` | VARCHAR column, `n` in 0..=255 |
/// | `#[foreign_key("table", "field")]` | REFERENCES clause |
/// | `#[enumeration]`, `#[enumeration(i16)]` | Fieldless enum stored as an integer |
/// | `#[skip]` | Not a column |
///
/// # Example
///
/// ```rust,ignore
/// use table_context::Table;
///
/// #[derive(Default, Table)]
/// #[table("users")]
/// pub struct User {
///     #[primary_key]
///     pub id:    i32,
///     pub name:  String,
///     #[unique]
///     pub email: Option<String>
/// }
/// ```
#[proc_macro_derive(
    Table,
    attributes(
        table,
        table_unique,
        primary_key,
        unique,
        column_name,
        varchar,
        foreign_key,
        enumeration,
        skip
    )
)]
pub fn derive_table(input: TokenStream) -> TokenStream {
    match table_context_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into()
    }
}
