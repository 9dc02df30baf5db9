// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `CREATE TABLE` generation.
//!
//! ```sql
//! CREATE TABLE User (
//!     Id INTEGER PRIMARY KEY,
//!     Name VARCHAR NOT NULL,
//!     TeamId BIGINT NOT NULL REFERENCES Team(Id),
//!     UNIQUE (Name, TeamId)
//! );
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    context::Context,
    statement::{MethodWithSqlStatement, Operation}
};
use crate::schema::{FieldContext, TableContext};

/// Generate the `CREATE TABLE` statement.
#[must_use]
pub fn create_table_sql(table: &TableContext, if_not_exists: bool) -> String {
    let mut lines: Vec<String> = table.fields.iter().map(column_def).collect();
    lines.extend(
        table
            .table_uniques
            .iter()
            .map(|unique| format!("    UNIQUE ({})", unique.columns.join(", ")))
    );

    format!(
        "CREATE TABLE {}{} (\n{}\n);",
        if if_not_exists { "IF NOT EXISTS " } else { "" },
        table.table_name,
        lines.join(",\n")
    )
}

/// Generate a single column definition.
fn column_def(field: &FieldContext) -> String {
    let mut parts = vec![
        format!("    {}", field.name),
        field.relational_type.sql_name(),
    ];

    if field.is_primary_key {
        parts.push("PRIMARY KEY".to_string());
    }

    if field.is_unique {
        parts.push("UNIQUE".to_string());
    }

    if !field.is_primary_key && !field.is_nullable {
        parts.push("NOT NULL".to_string());
    }

    if let Some((table, column)) = field.references() {
        parts.push(format!("REFERENCES {table}({column})"));
    }

    parts.join(" ")
}

impl Context<'_> {
    /// Generate `create_table` or `create_table_if_not_exists`.
    #[must_use]
    pub fn create_method(&self, if_not_exists: bool) -> MethodWithSqlStatement {
        let operation = if if_not_exists {
            Operation::CreateTableIfNotExists
        } else {
            Operation::CreateTable
        };
        let placeholder = operation.placeholder(&self.table.dbo_type);
        let method: TokenStream = {
            let runtime = self.runtime;
            let name = quote::format_ident!("{}", operation.method_name());
            let prologue = self.prologue(operation, &placeholder);
            let doc = format!("Create the `{}` table.", self.table_name());

            quote! {
                #[doc = #doc]
                async fn #name(&self) -> ::core::result::Result<(), #runtime::DbError> {
                    #prologue
                    command.execute_non_query().await?;
                    ::core::result::Result::Ok(())
                }
            }
        };

        MethodWithSqlStatement {
            operation,
            method,
            sql: create_table_sql(self.table, if_not_exists),
            placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::{
        Annotation, AnnotationArg, ClassDecl, PropertyDecl, ScalarOracle, extract_table
    };

    fn user() -> TableContext {
        let decl = ClassDecl::new("User")
            .with_property(
                PropertyDecl::new("Id", "i32").with_annotation(Annotation::new("PrimaryKey"))
            )
            .with_property(
                PropertyDecl::new("Name", "String").with_annotation(
                    Annotation::new("varchar").arg(AnnotationArg::Int("50".into()))
                )
            )
            .with_property(
                PropertyDecl::new("Email", "String").with_annotation(Annotation::new("Unique"))
            );
        extract_table(&decl, &ScalarOracle).unwrap()
    }

    #[test]
    fn user_create_table() {
        assert_eq!(
            create_table_sql(&user(), false),
            "CREATE TABLE User (\n    Id INTEGER PRIMARY KEY,\n    Name VARCHAR NOT NULL,\n    Email TEXT UNIQUE NOT NULL\n);"
        );
    }

    #[test]
    fn if_not_exists_variant() {
        assert!(create_table_sql(&user(), true).starts_with("CREATE TABLE IF NOT EXISTS User ("));
    }

    #[test]
    fn nullable_references_and_table_uniques() {
        let decl = ClassDecl::new("Member")
            .with_annotation(
                Annotation::new("table_unique")
                    .arg(AnnotationArg::Str("TeamId".into()))
                    .arg(AnnotationArg::NameOf("Nick".into()))
            )
            .with_property(
                PropertyDecl::new("Id", "i64").with_annotation(Annotation::new("primary_key"))
            )
            .with_property(
                PropertyDecl::new("TeamId", "i64").with_annotation(
                    Annotation::new("foreign_key")
                        .arg(AnnotationArg::Str("Team".into()))
                        .arg(AnnotationArg::Str("Id".into()))
                )
            )
            .with_property(PropertyDecl::new("Nick", "Option<String>"))
            .with_property(PropertyDecl::new("Score", "f64"))
            .with_property(
                PropertyDecl::new("Owner", "i64")
                    .with_annotation(Annotation::new("foreign_key").arg(AnnotationArg::Str("User".into())))
            );
        let table = extract_table(&decl, &ScalarOracle).unwrap();

        assert_eq!(
            create_table_sql(&table, false),
            "CREATE TABLE Member (\n    Id BIGINT PRIMARY KEY,\n    TeamId BIGINT NOT NULL REFERENCES Team(Id),\n    Nick TEXT,\n    Score DOUBLE PRECISION NOT NULL,\n    Owner BIGINT NOT NULL,\n    UNIQUE (TeamId, Nick)\n);"
        );
    }
}
