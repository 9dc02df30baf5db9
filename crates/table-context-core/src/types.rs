// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Canonical host types of the relational type system.
//!
//! Generated conversion bridges name the relational side of a conversion with
//! a canonical host type (`String` for TEXT, `NaiveDate` for DATE, ...). The
//! generator qualifies those names with this module so that they resolve no
//! matter what the user's module imports.
//!
//! | Relational | Canonical type |
//! |------------|----------------|
//! | SMALLINT | `i16` |
//! | INTEGER | `i32` |
//! | BIGINT | `i64` |
//! | REAL | `f32` |
//! | DOUBLE PRECISION | `f64` |
//! | DECIMAL | [`Decimal`] |
//! | CHAR | `char` |
//! | VARCHAR, TEXT | `String` |
//! | DATE | [`NaiveDate`] |
//! | TIME | [`NaiveTime`] |
//! | TIMESTAMP | `DateTime<Utc>` |
//! | BOOLEAN | `bool` |
//! | BLOB | `Vec<u8>` |

pub use core::primitive::{bool, char, f32, f64, i16, i32, i64, u8};
pub use std::{string::String, vec::Vec};

pub use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
pub use rust_decimal::Decimal;
