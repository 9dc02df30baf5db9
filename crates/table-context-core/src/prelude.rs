// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use table_context_core::prelude::*;
//! ```

pub use crate::{
    DbCommand, DbConnection, DbDataReader, DbError, DbParameter, DbValue, FromColumn, ToParameter,
    async_trait
};
