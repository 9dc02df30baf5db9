// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor/SQL pairs.

use proc_macro2::TokenStream;

/// The seven generated accessors, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `CREATE TABLE`.
    CreateTable,
    /// `CREATE TABLE IF NOT EXISTS`.
    CreateTableIfNotExists,
    /// `INSERT`.
    Insert,
    /// `INSERT ... ON CONFLICT DO UPDATE`.
    Upsert,
    /// `UPDATE ... WHERE pk`.
    Update,
    /// `DELETE ... WHERE pk`.
    Delete,
    /// `SELECT * ... WHERE pk`.
    Find
}

impl Operation {
    /// Every operation in emission order.
    pub const ALL: [Self; 7] = [
        Self::CreateTable,
        Self::CreateTableIfNotExists,
        Self::Insert,
        Self::Upsert,
        Self::Update,
        Self::Delete,
        Self::Find
    ];

    /// Accessor method name.
    #[must_use]
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::CreateTable => "create_table",
            Self::CreateTableIfNotExists => "create_table_if_not_exists",
            Self::Insert => "insert",
            Self::Upsert => "upsert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Find => "find"
        }
    }

    /// Placeholder tag (`CREATE_IF_NOT_EXISTS`).
    const fn tag(self) -> &'static str {
        match self {
            Self::CreateTable => "CREATE",
            Self::CreateTableIfNotExists => "CREATE_IF_NOT_EXISTS",
            Self::Insert => "INSERT",
            Self::Upsert => "UPSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Find => "FIND"
        }
    }

    /// Placeholder token embedded in the accessor body until substitution.
    ///
    /// Unique per class and operation: `__SQL_INSERT_User__`.
    #[must_use]
    pub fn placeholder(self, dbo_type: &str) -> String {
        format!("__SQL_{}_{}__", self.tag(), dbo_type)
    }
}

/// One generated accessor paired with its SQL text.
#[derive(Debug, Clone)]
pub struct MethodWithSqlStatement {
    /// Which accessor this is.
    pub operation: Operation,

    /// Accessor tokens, SQL replaced by [`placeholder`](Self::placeholder).
    pub method: TokenStream,

    /// Verbatim SQL text.
    pub sql: String,

    /// Placeholder string literal content.
    pub placeholder: String
}
