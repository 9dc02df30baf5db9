// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime error type shared by drivers and generated accessors.

use std::fmt::Display;

/// Error returned by every generated accessor.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The underlying driver failed to prepare or execute a command.
    #[error("driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A column value could not be narrowed into the property type.
    #[error("cannot convert column value: {reason}")]
    Conversion {
        /// Human readable cause.
        reason: String
    },

    /// A stored discriminant does not name a variant of the enum.
    #[error("invalid discriminant {value} for enum `{ty}`")]
    InvalidEnum {
        /// Enum type as written on the property.
        ty: &'static str,

        /// Stored numeric value.
        value: i64
    },

    /// The column holds a value of another relational type.
    #[error("column {ordinal} does not hold {expected} (found {found})")]
    TypeMismatch {
        /// Zero-based column ordinal.
        ordinal: usize,

        /// Requested relational type.
        expected: &'static str,

        /// Kind of the stored value.
        found: &'static str
    },

    /// The row has fewer columns than requested.
    #[error("column ordinal {ordinal} is out of range")]
    OrdinalOutOfRange {
        /// Zero-based column ordinal.
        ordinal: usize
    }
}

impl DbError {
    /// Wrap a driver error.
    pub fn driver(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Driver(source.into())
    }

    /// Build a conversion error from any displayable cause.
    pub fn conversion(reason: impl Display) -> Self {
        Self::Conversion {
            reason: reason.to_string()
        }
    }

    /// Build an invalid enum discriminant error.
    pub fn invalid_enum(ty: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidEnum {
            ty,
            value: value.into()
        }
    }
}
