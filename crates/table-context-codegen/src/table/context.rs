// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context for one table.
//!
//! Precomputes the identifiers and SQL fragments shared by every accessor.
//!
//! | Field | Description |
//! |-------|-------------|
//! | `table` | Extracted schema |
//! | `runtime` | Runtime crate path (`::table_context`) |
//! | `dbo` | Mapped struct identifier (`User`) |
//! | `columns_str` | `Id, Name, Email` |
//! | `parameters_str` | `@Id, @Name, @Email` |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type};

use super::statement::Operation;
use crate::{
    error::GenerateError,
    schema::{ConversionNames, FieldContext, TableContext, canonical_host_type, conversion_names}
};

/// Traits generated accessors call methods of.
const RUNTIME_TRAITS: [&str; 5] = [
    "DbConnection",
    "DbCommand",
    "DbDataReader",
    "FromColumn",
    "ToParameter"
];

/// Context for accessor generation.
pub struct Context<'a> {
    /// Extracted schema.
    pub table: &'a TableContext,

    /// Runtime crate path.
    pub runtime: &'a syn::Path,

    /// Mapped struct identifier.
    pub dbo: Ident,

    /// Comma separated column names.
    pub columns_str: String,

    /// Comma separated `@column` parameters.
    pub parameters_str: String
}

impl<'a> Context<'a> {
    /// Create a context.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Emit`] when the class name is not a Rust
    /// identifier.
    pub fn new(table: &'a TableContext, runtime: &'a syn::Path) -> Result<Self, GenerateError> {
        let columns: Vec<&str> = table.fields.iter().map(|f| f.name.as_str()).collect();

        Ok(Self {
            table,
            runtime,
            dbo: parse_ident(&table.dbo_type, &table.dbo_type)?,
            columns_str: columns.join(", "),
            parameters_str: columns
                .iter()
                .map(|c| format!("@{c}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    /// Table name as written in SQL.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table.table_name
    }

    /// Primary key column.
    #[must_use]
    pub fn primary_key(&self) -> &FieldContext {
        &self.table.primary_key
    }

    /// `<pk> = @<pk>`.
    #[must_use]
    pub fn key_predicate(&self) -> String {
        let pk = &self.primary_key().name;
        format!("{pk} = @{pk}")
    }

    /// Bridge names of a convertible field.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoConversionMapping`] when the column type has
    /// no canonical host type.
    pub fn conversion(&self, field: &FieldContext) -> Result<ConversionNames, GenerateError> {
        let host = canonical_host_type(field.relational_type).ok_or(
            GenerateError::NoConversionMapping {
                relational_type: field.relational_type
            }
        )?;
        Ok(conversion_names(&field.property_type, host))
    }

    /// Struct field identifier of a column.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Emit`] for a property name that is not a Rust
    /// identifier.
    pub fn property_ident(&self, field: &FieldContext) -> Result<Ident, GenerateError> {
        parse_ident(&self.table.dbo_type, &field.property_name)
    }

    /// Declared property type without its nullability marker.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Emit`] when the text is not a Rust type.
    pub fn base_type(&self, field: &FieldContext) -> Result<Type, GenerateError> {
        parse_type(&self.table.dbo_type, &field.base_type())
    }

    /// Declared property type.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Emit`] when the text is not a Rust type.
    pub fn property_type(&self, field: &FieldContext) -> Result<Type, GenerateError> {
        parse_type(&self.table.dbo_type, &field.property_type)
    }

    /// Runtime traits every accessor imports (`use Trait as _`).
    #[must_use]
    pub fn imports(&self) -> Vec<syn::Path> {
        let runtime = self.runtime;
        RUNTIME_TRAITS
            .iter()
            .map(|name| {
                let name = format_ident!("{}", name);
                syn::parse_quote!(#runtime::#name)
            })
            .collect()
    }

    /// Statements every accessor starts with: the runtime trait imports, the
    /// trace event and a fresh command carrying the placeholder text.
    #[must_use]
    pub fn prologue(&self, operation: Operation, placeholder: &str) -> TokenStream {
        let runtime = self.runtime;
        let imports = self.imports();
        let table = self.table_name();
        let name = operation.method_name();

        quote! {
            #(
                #[allow(unused_imports)]
                use #imports as _;
            )*

            #runtime::tracing::debug!(table = #table, operation = #name, "executing statement");
            let mut command = self.connection().create_command();
            command.set_command_text(#placeholder);
        }
    }
}

/// Whether the declared type text carries its own `Option`/`?` marker, so
/// values must be wrapped in `Some`.
pub fn is_option(field: &FieldContext) -> bool {
    crate::schema::strip_nullable(&field.property_type).1
}

fn parse_ident(class: &str, text: &str) -> Result<Ident, GenerateError> {
    syn::parse_str::<Ident>(text).map_err(|_| GenerateError::Emit {
        class:  class.to_string(),
        reason: format!("`{text}` is not a Rust identifier")
    })
}

fn parse_type(class: &str, text: &str) -> Result<Type, GenerateError> {
    syn::parse_str::<Type>(text).map_err(|_| GenerateError::Emit {
        class:  class.to_string(),
        reason: format!("`{text}` is not a Rust type")
    })
}
