// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host ↔ relational type tables.
//!
//! # Type Mapping Table
//!
//! | Rust Type | Relational Type | Notes |
//! |-----------|-----------------|-------|
//! | `i8`, `u8`, `i16`, `u16` | `SMALLINT` | Unsigned values wrap into the signed width |
//! | `i32`, `u32` | `INTEGER` | |
//! | `i64`, `u64`, `isize`, `usize` | `BIGINT` | |
//! | `f32` | `REAL` | |
//! | `f64` | `DOUBLE PRECISION` | |
//! | `Decimal` | `DECIMAL` | `rust_decimal` |
//! | `String`, `Box<str>` | `TEXT` | Or `VARCHAR` with `#[varchar(n)]` |
//! | `char` | `CHAR` | |
//! | `bool` | `BOOLEAN` | |
//! | `NaiveDate` | `DATE` | |
//! | `NaiveTime` | `TIME` | |
//! | `DateTime<Utc>`, `DateTime<FixedOffset>`, `NaiveDateTime` | `TIMESTAMP` | |
//! | `Vec<u8>`, `Box<[u8]>` | `BLOB` | |
//! | anything else | `TEXT` | Requires a conversion bridge |
//!
//! Lookups ignore ASCII case and whitespace, so `Vec < u8 >` and `vec<u8>`
//! hit the same entry.

use std::{collections::HashMap, fmt, sync::LazyLock};

/// Relational column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalType {
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Single precision float.
    Real,
    /// Double precision float.
    DoublePrecision,
    /// Exact decimal.
    Decimal,
    /// Single character.
    Char,
    /// Sized text, forced by `#[varchar(n)]`.
    Varchar,
    /// Unbounded text.
    Text,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    Timestamp,
    /// Boolean.
    Boolean,
    /// Binary data.
    Blob
}

impl RelationalType {
    /// Identifier form (`DOUBLE_PRECISION`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Real => "REAL",
            Self::DoublePrecision => "DOUBLE_PRECISION",
            Self::Decimal => "DECIMAL",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Boolean => "BOOLEAN",
            Self::Blob => "BLOB"
        }
    }

    /// Form printed in DDL, underscores replaced by spaces
    /// (`DOUBLE PRECISION`).
    #[must_use]
    pub fn sql_name(self) -> String {
        self.name().replace('_', " ")
    }
}

impl fmt::Display for RelationalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// Column type for the host type.
    pub relational_type: RelationalType,

    /// `true` when the host type missed the table and falls back to TEXT.
    pub requires_conversion: bool
}

static FORWARD: LazyLock<HashMap<&'static str, RelationalType>> = LazyLock::new(|| {
    use RelationalType::*;

    let mut map = HashMap::new();
    for ty in ["i8", "u8", "i16", "u16"] {
        map.insert(ty, SmallInt);
    }
    for ty in ["i32", "u32"] {
        map.insert(ty, Integer);
    }
    for ty in ["i64", "u64", "isize", "usize"] {
        map.insert(ty, BigInt);
    }
    map.insert("f32", Real);
    map.insert("f64", DoublePrecision);
    map.insert("decimal", Decimal);
    map.insert("rust_decimal::decimal", Decimal);
    for ty in [
        "string",
        "std::string::string",
        "alloc::string::string",
        "box<str>"
    ] {
        map.insert(ty, Text);
    }
    map.insert("char", Char);
    map.insert("bool", Boolean);
    map.insert("naivedate", Date);
    map.insert("chrono::naivedate", Date);
    map.insert("naivetime", Time);
    map.insert("chrono::naivetime", Time);
    for ty in [
        "datetime<utc>",
        "datetime<fixedoffset>",
        "datetime<chrono::utc>",
        "datetime<chrono::fixedoffset>",
        "chrono::datetime<utc>",
        "chrono::datetime<fixedoffset>",
        "chrono::datetime<chrono::utc>",
        "chrono::datetime<chrono::fixedoffset>",
        "naivedatetime",
        "chrono::naivedatetime"
    ] {
        map.insert(ty, Timestamp);
    }
    for ty in ["vec<u8>", "std::vec::vec<u8>", "alloc::vec::vec<u8>", "box<[u8]>"] {
        map.insert(ty, Blob);
    }
    map
});

static REVERSE: LazyLock<HashMap<RelationalType, &'static str>> = LazyLock::new(|| {
    use RelationalType::*;

    HashMap::from([
        (SmallInt, "i16"),
        (Integer, "i32"),
        (BigInt, "i64"),
        (Real, "f32"),
        (DoublePrecision, "f64"),
        (Decimal, "Decimal"),
        (Char, "char"),
        (Varchar, "String"),
        (Text, "String"),
        (Date, "NaiveDate"),
        (Time, "NaiveTime"),
        (Timestamp, "DateTime<Utc>"),
        (Boolean, "bool"),
        (Blob, "Vec<u8>")
    ])
});

/// Canonical lookup key: whitespace removed, ASCII lowercase, primitive
/// paths (`core::primitive::u8`) reduced to the primitive name.
#[must_use]
pub fn normalize(type_text: &str) -> String {
    let compact: String = type_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let compact = compact.strip_prefix("::").unwrap_or(&compact);

    compact
        .replace("std::primitive::", "")
        .replace("core::primitive::", "")
}

/// Map a host type to its relational type.
///
/// The text must already have its nullability marker stripped. Unknown
/// types fall back to TEXT with `requires_conversion` set.
#[must_use]
pub fn map_host_type(type_text: &str) -> Mapping {
    match FORWARD.get(normalize(type_text).as_str()) {
        Some(&relational_type) => Mapping {
            relational_type,
            requires_conversion: false
        },
        None => Mapping {
            relational_type:     RelationalType::Text,
            requires_conversion: true
        }
    }
}

/// Canonical host type name of a relational type.
///
/// The name resolves under the runtime crate's `types` module.
#[must_use]
pub fn canonical_host_type(relational_type: RelationalType) -> Option<&'static str> {
    REVERSE.get(&relational_type).copied()
}
