// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated unit assembly and placeholder substitution.
//!
//! Accessor bodies carry a placeholder string literal instead of their SQL.
//! Emission runs in two phases:
//!
//! 1. the unit's tokens are formatted into source text;
//! 2. every `"<placeholder>"` literal is replaced by a raw string literal
//!    holding the verbatim SQL.
//!
//! Multi-line DDL therefore reaches the output exactly as generated.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use crate::{
    config::CodegenConfig,
    error::GenerateError,
    schema::TableContext,
    table::{Context, MethodWithSqlStatement, generate_methods}
};

/// Everything generated for one class.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Class identifier.
    pub class: String,

    /// Base trait identifier (`UserTableContextBase`).
    pub base_name: Ident,

    /// Runtime traits imported by every accessor.
    pub imports: Vec<syn::Path>,

    /// Accessors with their SQL, in emission order.
    pub statements: Vec<MethodWithSqlStatement>,

    /// Unit tokens, SQL still replaced by placeholders.
    pub tokens: TokenStream
}

impl GeneratedUnit {
    /// Assemble the base trait for `table`.
    ///
    /// # Errors
    ///
    /// Propagates statement generation failures and rejects a visibility that
    /// does not parse.
    pub fn new(
        table: &TableContext,
        visibility: &str,
        config: &CodegenConfig
    ) -> Result<Self, GenerateError> {
        let runtime = &config.runtime;
        let ctx = Context::new(table, runtime)?;
        let statements = generate_methods(table, runtime)?;
        let bridges = ctx.bridges()?;
        let helper = ctx.parameter_helper();
        let vis: syn::Visibility =
            syn::parse_str(visibility).map_err(|err| GenerateError::Emit {
                class:  table.dbo_type.clone(),
                reason: format!("invalid visibility `{visibility}`: {err}")
            })?;

        let base_name = format_ident!("{}TableContextBase", ctx.dbo);
        let methods = statements.iter().map(|s| &s.method);
        let doc = format!(
            "Data access for `{}` rows stored in the `{}` table.\n\n\
             Implement `new` and `connection`{}; every accessor is provided.",
            table.dbo_type,
            table.table_name,
            if bridges.is_empty() {
                ""
            } else {
                " plus the conversion bridges"
            }
        );

        let tokens = quote! {
            #[doc = #doc]
            #[#runtime::async_trait]
            #vis trait #base_name: ::core::marker::Send + ::core::marker::Sync {
                /// Connection the accessors open commands on.
                type Connection: #runtime::DbConnection;

                /// Wrap a connection.
                fn new(connection: Self::Connection) -> Self
                where
                    Self: ::core::marker::Sized;

                /// Connection the accessors open commands on.
                fn connection(&self) -> &Self::Connection;

                #(#bridges)*

                #helper

                #(#methods)*
            }
        };

        Ok(Self {
            class: table.dbo_type.clone(),
            base_name,
            imports: ctx.imports(),
            statements,
            tokens
        })
    }

    /// Output file name (`user_table_context_base.rs`).
    #[must_use]
    pub fn file_name(&self) -> String {
        use convert_case::{Case, Casing};

        format!("{}.rs", self.base_name.to_string().to_case(Case::Snake))
    }

    /// Source text with the SQL substituted.
    #[must_use]
    pub fn render(&self) -> String {
        substitute(&self.tokens.to_string(), &self.statements)
    }

    /// Substituted source parsed back into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Emit`] when the substituted text is not valid
    /// Rust tokens.
    pub fn to_token_stream(&self) -> Result<TokenStream, GenerateError> {
        self.render()
            .parse()
            .map_err(|err: proc_macro2::LexError| GenerateError::Emit {
                class:  self.class.clone(),
                reason: err.to_string()
            })
    }
}

/// Replace every quoted placeholder in `source` by a raw string literal with
/// the statement's SQL.
#[must_use]
pub fn substitute(source: &str, statements: &[MethodWithSqlStatement]) -> String {
    statements.iter().fold(source.to_string(), |text, statement| {
        text.replace(
            &format!("\"{}\"", statement.placeholder),
            &raw_string_literal(&statement.sql)
        )
    })
}

/// Raw string literal with enough `#` to enclose `text`.
fn raw_string_literal(text: &str) -> String {
    let mut hashes = 1;
    while text.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let fence = "#".repeat(hashes);
    format!("r{fence}\"{text}\"{fence}")
}
