// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row level accessors.
//!
//! | Method | SQL Operation |
//! |--------|---------------|
//! | [`insert`](Context::insert_method) | `INSERT INTO t (..) VALUES (..)` |
//! | [`upsert`](Context::upsert_method) | `INSERT .. ON CONFLICT(pk) DO UPDATE SET ..` |
//! | [`update`](Context::update_method) | `UPDATE t SET .. WHERE pk = @pk` |
//! | [`delete`](Context::delete_method) | `DELETE FROM t WHERE pk = @pk` |
//! | [`find`](Context::find_method) | `SELECT * FROM t WHERE pk = @pk` |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    context::Context,
    statement::{MethodWithSqlStatement, Operation}
};
use crate::error::GenerateError;

impl Context<'_> {
    /// `INSERT INTO t (cols) VALUES (@cols);`
    #[must_use]
    pub fn insert_sql(&self) -> String {
        format!("{};", self.insert_clause())
    }

    fn insert_clause(&self) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table_name(),
            self.columns_str,
            self.parameters_str
        )
    }

    /// `INSERT ... ON CONFLICT(pk) DO UPDATE SET c = excluded.c, ...;`
    ///
    /// A table whose only column is the key gets `DO NOTHING`.
    #[must_use]
    pub fn upsert_sql(&self) -> String {
        let assignments: Vec<String> = self
            .table
            .non_key_fields()
            .map(|f| format!("{0} = excluded.{0}", f.name))
            .collect();
        let action = if assignments.is_empty() {
            "DO NOTHING".to_string()
        } else {
            format!("DO UPDATE SET {}", assignments.join(", "))
        };

        format!(
            "{} ON CONFLICT({}) {};",
            self.insert_clause(),
            self.primary_key().name,
            action
        )
    }

    /// `UPDATE t SET c = @c, ... WHERE pk = @pk;`
    ///
    /// A table whose only column is the key assigns the key to itself.
    #[must_use]
    pub fn update_sql(&self) -> String {
        let mut assignments: Vec<String> = self
            .table
            .non_key_fields()
            .map(|f| format!("{0} = @{0}", f.name))
            .collect();
        if assignments.is_empty() {
            assignments.push(self.key_predicate());
        }

        format!(
            "UPDATE {} SET {} WHERE {};",
            self.table_name(),
            assignments.join(", "),
            self.key_predicate()
        )
    }

    /// `DELETE FROM t WHERE pk = @pk;`
    #[must_use]
    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {};", self.table_name(), self.key_predicate())
    }

    /// `SELECT * FROM t WHERE pk = @pk;`
    #[must_use]
    pub fn find_sql(&self) -> String {
        format!("SELECT * FROM {} WHERE {};", self.table_name(), self.key_predicate())
    }

    /// Generate `insert`, `upsert` or `update`: bind every column of the
    /// borrowed row and execute once.
    ///
    /// # Errors
    ///
    /// Propagates binding failures.
    pub fn write_method(&self, operation: Operation) -> Result<MethodWithSqlStatement, GenerateError> {
        let (sql, verb) = match operation {
            Operation::Upsert => (self.upsert_sql(), "Insert or update"),
            Operation::Update => (self.update_sql(), "Update"),
            _ => (self.insert_sql(), "Insert")
        };
        let runtime = self.runtime;
        let dbo = &self.dbo;
        let name = format_ident!("{}", operation.method_name());
        let placeholder = operation.placeholder(&self.table.dbo_type);
        let prologue = self.prologue(operation, &placeholder);
        let bindings = self.bind_all()?;
        let doc = format!("{verb} one `{}` row.", self.table_name());

        let method = quote! {
            #[doc = #doc]
            async fn #name(&self, dbo: &#dbo) -> ::core::result::Result<(), #runtime::DbError> {
                #prologue
                #(#bindings)*
                command.execute_non_query().await?;
                ::core::result::Result::Ok(())
            }
        };

        Ok(MethodWithSqlStatement {
            operation,
            method,
            sql,
            placeholder
        })
    }

    /// Generate `insert`.
    ///
    /// # Errors
    ///
    /// Propagates binding failures.
    pub fn insert_method(&self) -> Result<MethodWithSqlStatement, GenerateError> {
        self.write_method(Operation::Insert)
    }

    /// Generate `upsert`.
    ///
    /// # Errors
    ///
    /// Propagates binding failures.
    pub fn upsert_method(&self) -> Result<MethodWithSqlStatement, GenerateError> {
        self.write_method(Operation::Upsert)
    }

    /// Generate `update`.
    ///
    /// # Errors
    ///
    /// Propagates binding failures.
    pub fn update_method(&self) -> Result<MethodWithSqlStatement, GenerateError> {
        self.write_method(Operation::Update)
    }

    /// Generate `delete`.
    ///
    /// # Errors
    ///
    /// Propagates binding failures.
    pub fn delete_method(&self) -> Result<MethodWithSqlStatement, GenerateError> {
        let operation = Operation::Delete;
        let runtime = self.runtime;
        let key_type = self.property_type(self.primary_key())?;
        let placeholder = operation.placeholder(&self.table.dbo_type);
        let prologue = self.prologue(operation, &placeholder);
        let binding = self.bind_key()?;
        let doc = format!("Delete the `{}` row with the given key.", self.table_name());

        let method = quote! {
            #[doc = #doc]
            async fn delete(&self, primary_key: #key_type) -> ::core::result::Result<(), #runtime::DbError> {
                #prologue
                #binding
                command.execute_non_query().await?;
                ::core::result::Result::Ok(())
            }
        };

        Ok(MethodWithSqlStatement {
            operation,
            method,
            sql: self.delete_sql(),
            placeholder
        })
    }

    /// Generate `find`.
    ///
    /// # Errors
    ///
    /// Propagates binding and read failures.
    pub fn find_method(&self) -> Result<MethodWithSqlStatement, GenerateError> {
        let operation = Operation::Find;
        let runtime = self.runtime;
        let dbo = &self.dbo;
        let key_type = self.property_type(self.primary_key())?;
        let placeholder = operation.placeholder(&self.table.dbo_type);
        let prologue = self.prologue(operation, &placeholder);
        let binding = self.bind_key()?;
        let initializers = self.read_all()?;
        let rest: TokenStream = if self.table.skipped.is_empty() {
            TokenStream::new()
        } else {
            quote!(..::core::default::Default::default())
        };
        let doc = format!(
            "Find the `{}` row with the given key, `None` when absent.",
            self.table_name()
        );

        let method = quote! {
            #[doc = #doc]
            async fn find(
                &self,
                primary_key: #key_type
            ) -> ::core::result::Result<::core::option::Option<#dbo>, #runtime::DbError> {
                #prologue
                #binding
                let mut reader = command.execute_reader().await?;
                if !reader.read().await? {
                    return ::core::result::Result::Ok(::core::option::Option::None);
                }
                ::core::result::Result::Ok(::core::option::Option::Some(#dbo {
                    #(#initializers,)*
                    #rest
                }))
            }
        };

        Ok(MethodWithSqlStatement {
            operation,
            method,
            sql: self.find_sql(),
            placeholder
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::default_runtime,
        schema::{
            Accessors, Annotation, ClassDecl, PropertyDecl, ScalarOracle, TableContext,
            extract_table
        }
    };

    fn user() -> TableContext {
        let decl = ClassDecl::new("User")
            .with_property(
                PropertyDecl::new("Id", "i32").with_annotation(Annotation::new("PrimaryKey"))
            )
            .with_property(PropertyDecl::new("Name", "String"))
            .with_property(
                PropertyDecl::new("Email", "String").with_annotation(Annotation::new("Unique"))
            );
        extract_table(&decl, &ScalarOracle).unwrap()
    }

    fn key_only() -> TableContext {
        let decl = ClassDecl::new("Tag").with_property(
            PropertyDecl::new("Label", "String").with_annotation(Annotation::new("primary_key"))
        );
        extract_table(&decl, &ScalarOracle).unwrap()
    }

    #[test]
    fn user_statements() {
        let table = user();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();

        assert_eq!(
            ctx.insert_sql(),
            "INSERT INTO User (Id, Name, Email) VALUES (@Id, @Name, @Email);"
        );
        assert_eq!(
            ctx.upsert_sql(),
            "INSERT INTO User (Id, Name, Email) VALUES (@Id, @Name, @Email) ON CONFLICT(Id) DO UPDATE SET Name = excluded.Name, Email = excluded.Email;"
        );
        assert_eq!(
            ctx.update_sql(),
            "UPDATE User SET Name = @Name, Email = @Email WHERE Id = @Id;"
        );
        assert_eq!(ctx.delete_sql(), "DELETE FROM User WHERE Id = @Id;");
        assert_eq!(ctx.find_sql(), "SELECT * FROM User WHERE Id = @Id;");
    }

    #[test]
    fn key_only_table() {
        let table = key_only();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();

        assert_eq!(
            ctx.upsert_sql(),
            "INSERT INTO Tag (Label) VALUES (@Label) ON CONFLICT(Label) DO NOTHING;"
        );
        assert_eq!(
            ctx.update_sql(),
            "UPDATE Tag SET Label = @Label WHERE Label = @Label;"
        );
    }

    #[test]
    fn parameter_and_set_counts() {
        let table = user();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        let n = table.fields.len();

        let insert = ctx.insert_method().unwrap().method.to_string();
        assert_eq!(insert.matches("add_parameter").count(), n);

        let update_sql = ctx.update_sql();
        let set_clause = update_sql
            .split(" WHERE ")
            .next()
            .unwrap();
        assert_eq!(set_clause.matches(" = @").count(), n - 1);
    }

    #[test]
    fn upsert_conflict_target_is_primary_key() {
        let decl = ClassDecl::new("Account")
            .with_property(PropertyDecl::new("Owner", "i64"))
            .with_property(
                PropertyDecl::new("Code", "String").with_annotation(Annotation::new("primary_key"))
            );
        let table = extract_table(&decl, &ScalarOracle).unwrap();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        assert!(ctx.upsert_sql().contains("ON CONFLICT(Code)"));
    }

    #[test]
    fn find_returns_none_when_no_row() {
        let table = user();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        let find = ctx.find_method().unwrap();

        let text = find.method.to_string();
        assert!(text.contains("if ! reader . read () . await ?"));
        assert!(text.contains("Option :: None"));
        assert!(text.contains("primary_key : i32"));
        assert!(!text.contains("Default :: default ()"));
        assert_eq!(find.placeholder, "__SQL_FIND_User__");
    }

    #[test]
    fn find_fills_skipped_properties_with_default() {
        let decl = ClassDecl::new("User")
            .with_property(
                PropertyDecl::new("Id", "i32").with_annotation(Annotation::new("primary_key"))
            )
            .with_property(PropertyDecl::new("Cache", "Vec<String>").with_accessors(Accessors {
                get:  true,
                set:  false,
                init: false
            }));
        let table = extract_table(&decl, &ScalarOracle).unwrap();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        let text = ctx.find_method().unwrap().method.to_string();
        assert!(text.contains(".. :: core :: default :: Default :: default ()"));
    }

    #[test]
    fn accessors_embed_placeholder_not_sql() {
        let table = user();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        let insert = ctx.insert_method().unwrap();
        let text = insert.method.to_string();
        assert!(text.contains("\"__SQL_INSERT_User__\""));
        assert!(!text.contains("INSERT INTO"));
    }
}
