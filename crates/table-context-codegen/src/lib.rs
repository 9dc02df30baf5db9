// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Pipeline
//!
//! ```text
//! DeriveInput ──parse──► ClassDecl ──extract_table──► TableContext
//!                                                         │
//!                                               GeneratedUnit::new
//!                                                         │
//!                     tokens with "__SQL_<TAG>_<Class>__" placeholders
//!                                                         │
//!                                      substitute ──► source text / tokens
//! ```
//!
//! # Entry Points
//!
//! | Function | Consumer |
//! |----------|----------|
//! | [`generate`] | `#[derive(Table)]` |
//! | [`generate_into`] | one class, any [`OutputSink`] |
//! | [`generate_all`] | many classes, failures isolated per class |

mod config;
mod error;
mod parse;
mod sink;
mod unit;

pub mod schema;
pub mod table;

pub use config::{CodegenConfig, default_runtime};
pub use error::GenerateError;
pub use parse::ParsedClass;
pub use sink::{DirectorySink, MemorySink, OutputSink};
pub use unit::{GeneratedUnit, substitute};

use proc_macro2::TokenStream;

use crate::schema::{ClassDecl, TypeOracle, extract_table};

/// Expand `#[derive(Table)]`.
///
/// # Errors
///
/// Returns every attribute error found on the input, or the first
/// generation failure, spanned at the struct identifier.
pub fn generate(input: TokenStream) -> darling::Result<TokenStream> {
    let input: syn::DeriveInput = syn::parse2(input)?;
    let parsed = ParsedClass::from_derive_input(&input)?;
    let span = &input.ident;

    let table = extract_table(&parsed.decl, &parsed.hints).map_err(|e| e.into_darling(span))?;
    let unit = GeneratedUnit::new(&table, &parsed.decl.visibility, &parsed.config)
        .map_err(|e| e.into_darling(span))?;
    unit.to_token_stream().map_err(|e| e.into_darling(span))
}

/// Generate the unit of one class and register it with `sink`.
///
/// # Errors
///
/// Propagates extraction, emission and sink failures.
pub fn generate_into(
    decl: &ClassDecl,
    oracle: &dyn TypeOracle,
    config: &CodegenConfig,
    sink: &mut dyn OutputSink
) -> Result<(), GenerateError> {
    let table = extract_table(decl, oracle)?;
    let unit = GeneratedUnit::new(&table, &decl.visibility, config)?;
    unit.to_token_stream()?;
    sink.add_source(&unit.file_name(), &unit.render())
}

/// Generate every class, one result per class in input order.
///
/// A failing class does not stop the others.
pub fn generate_all(
    decls: &[ClassDecl],
    oracle: &dyn TypeOracle,
    config: &CodegenConfig,
    sink: &mut dyn OutputSink
) -> Vec<(String, Result<(), GenerateError>)> {
    decls
        .iter()
        .map(|decl| {
            (
                decl.name.clone(),
                generate_into(decl, oracle, config, &mut *sink)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote::quote;

    use super::*;
    use crate::schema::{
        Annotation, AnnotationArg, PropertyDecl, RelationalType, ScalarOracle, TableContext
    };

    fn user() -> ClassDecl {
        ClassDecl::new("User")
            .with_property(
                PropertyDecl::new("Id", "i32").with_annotation(Annotation::new("PrimaryKey"))
            )
            .with_property(PropertyDecl::new("Name", "String"))
            .with_property(
                PropertyDecl::new("Email", "String").with_annotation(Annotation::new("Unique"))
            )
    }

    fn accounts() -> ClassDecl {
        ClassDecl::new("Account")
            .with_annotation(
                Annotation::new("Table").arg(AnnotationArg::Str("accounts".into()))
            )
            .with_property(
                PropertyDecl::new("Id", "Uuid").with_annotation(Annotation::new("PrimaryKey"))
            )
            .with_property(PropertyDecl::new("Owner", "Uuid"))
            .with_property(PropertyDecl::new("Parent", "Option<Uuid>"))
    }

    fn statements(decl: &ClassDecl) -> (TableContext, GeneratedUnit) {
        let table = extract_table(decl, &ScalarOracle).unwrap();
        let unit = GeneratedUnit::new(&table, "pub", &CodegenConfig::default()).unwrap();
        (table, unit)
    }

    #[test]
    fn user_scenario_sql() {
        let (_, unit) = statements(&user());
        let sql: Vec<&str> = unit.statements.iter().map(|s| s.sql.as_str()).collect();
        assert_eq!(
            sql,
            vec![
                "CREATE TABLE User (\n    Id INTEGER PRIMARY KEY,\n    Name TEXT NOT NULL,\n    Email TEXT UNIQUE NOT NULL\n);",
                "CREATE TABLE IF NOT EXISTS User (\n    Id INTEGER PRIMARY KEY,\n    Name TEXT NOT NULL,\n    Email TEXT UNIQUE NOT NULL\n);",
                "INSERT INTO User (Id, Name, Email) VALUES (@Id, @Name, @Email);",
                "INSERT INTO User (Id, Name, Email) VALUES (@Id, @Name, @Email) ON CONFLICT(Id) DO UPDATE SET Name = excluded.Name, Email = excluded.Email;",
                "UPDATE User SET Name = @Name, Email = @Email WHERE Id = @Id;",
                "DELETE FROM User WHERE Id = @Id;",
                "SELECT * FROM User WHERE Id = @Id;",
            ]
        );
    }

    #[test]
    fn accounts_scenario_bridges() {
        let (table, unit) = statements(&accounts());
        assert_eq!(table.table_name, "accounts");
        assert!(
            table
                .fields
                .iter()
                .all(|f| f.relational_type == RelationalType::Text && f.requires_conversion)
        );

        let rendered = unit.render();
        assert_eq!(rendered.matches("fn uuid_to_string_converter").count(), 1);
        assert_eq!(rendered.matches("fn string_to_uuid_converter").count(), 1);
        assert!(rendered.contains("SELECT * FROM accounts WHERE Id = @Id;"));
    }

    #[test]
    fn generate_expands_derive_input() {
        let tokens = generate(quote! {
            #[table("users")]
            pub struct User {
                #[primary_key]
                id: i32,
                name: String
            }
        })
        .unwrap();
        let item: syn::ItemTrait = syn::parse2(tokens).unwrap();
        assert_eq!(item.ident, "UserTableContextBase");
    }

    #[test]
    fn generate_reports_missing_primary_key() {
        let err = generate(quote! {
            struct Log {
                line: String
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("has no primary key"));
    }

    #[test]
    fn generate_rejects_clashing_bridge_names() {
        let err = generate(quote! {
            struct Site {
                #[primary_key]
                id: i32,
                home: Url,
                mirror: URL
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("is shared by `Url` and `URL`"));
    }

    #[test]
    fn generate_into_registers_one_file() {
        let mut sink = MemorySink::new();
        generate_into(&user(), &ScalarOracle, &CodegenConfig::default(), &mut sink).unwrap();
        let source = sink.get("user_table_context_base.rs").unwrap();
        assert!(source.contains("r#\"DELETE FROM User WHERE Id = @Id;\"#"));
    }

    #[test]
    fn generate_all_isolates_failures() {
        let broken = ClassDecl::new("Broken").with_property(PropertyDecl::new("Value", "i32"));
        let mut sink = MemorySink::new();
        let results = generate_all(
            &[user(), broken, accounts()],
            &ScalarOracle,
            &CodegenConfig::default(),
            &mut sink
        );

        let names: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["User", "Broken", "Account"]);
        assert!(results[0].1.is_ok());
        assert!(matches!(
            results[1].1,
            Err(GenerateError::MissingPrimaryKey { .. })
        ));
        assert!(results[2].1.is_ok());
        assert_eq!(sink.len(), 2);
    }
}
