// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # table-context
//!
//! One crate for users. Re-exports:
//! - [`Table`] derive macro from `table-context-macros`
//! - All runtime items from `table-context-core` ([`DbConnection`],
//!   [`DbValue`], [`ToParameter`], [`FromColumn`], [`DbError`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use table_context::{DbConnection, Table};
//!
//! #[derive(Table)]
//! #[table("users")]
//! pub struct User {
//!     #[primary_key]
//!     pub id:   i32,
//!     pub name: String
//! }
//!
//! struct Users<C> {
//!     connection: C
//! }
//!
//! impl<C: DbConnection> UserTableContextBase for Users<C> {
//!     type Connection = C;
//!
//!     fn new(connection: C) -> Self {
//!         Self { connection }
//!     }
//!
//!     fn connection(&self) -> &C {
//!         &self.connection
//!     }
//! }
//!
//! let users = Users::new(connection);
//! users.create_table_if_not_exists().await?;
//! users.insert(&User { id: 1, name: "Ann".into() }).await?;
//! let found = users.find(1).await?;
//! ```

pub use table_context_core::*;
pub use table_context_macros::Table;
