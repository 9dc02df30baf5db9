// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime interface for table-context generated accessors.
//!
//! Code produced by `#[derive(Table)]` never talks to a concrete database
//! client. It opens commands through [`DbConnection`], binds [`DbParameter`]s
//! built from [`ToParameter`] values and reads rows back through
//! [`DbDataReader`], narrowing each column with [`FromColumn`]. A driver only
//! has to implement the three connection traits.
//!
//! # Overview
//!
//! - [`DbConnection`] / [`DbCommand`] / [`DbDataReader`]: driver seam
//! - [`DbValue`] / [`DbParameter`]: bound values
//! - [`ToParameter`] / [`FromColumn`]: host ↔ relational value bridging
//! - [`DbError`]: runtime failures
//! - [`types`]: canonical host types referenced by generated signatures
//!
//! # Usage
//!
//! ```rust,ignore
//! use table_context_core::prelude::*;
//!
//! struct Users<C> { connection: C }
//!
//! impl<C: DbConnection> UserTableContextBase for Users<C> {
//!     type Connection = C;
//!
//!     fn new(connection: C) -> Self { Self { connection } }
//!     fn connection(&self) -> &C { &self.connection }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod column;
mod connection;
mod error;
mod value;

pub mod prelude;
pub mod types;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
pub use column::FromColumn;
pub use connection::{DbCommand, DbConnection, DbDataReader};
pub use error::DbError;
/// Re-export tracing for generated code.
pub use tracing;
pub use value::{DbParameter, DbValue, ToParameter};
