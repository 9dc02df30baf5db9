// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Driver seam used by generated accessors.
//!
//! Every generated accessor follows the same shape:
//!
//! ```rust,ignore
//! let mut command = self.connection().create_command();
//! command.set_command_text(SQL);
//! let parameter = self.create_parameter(&*command, "@Id", id.to_parameter());
//! command.add_parameter(parameter);
//! command.execute_non_query().await?;
//! ```
//!
//! The command (and any reader borrowed from it) is owned by the accessor's
//! scope, so it is released on success, on an empty result and on every `?`
//! exit.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::{DbError, DbParameter, DbValue};

/// An open database connection.
pub trait DbConnection: Send + Sync {
    /// Create a fresh command bound to this connection.
    fn create_command(&self) -> Box<dyn DbCommand + '_>;
}

/// A single SQL command with its parameters.
#[async_trait]
pub trait DbCommand: Send {
    /// Current command text.
    fn command_text(&self) -> &str;

    /// Replace the command text.
    fn set_command_text(&mut self, text: &str);

    /// Create an unbound parameter for this command.
    fn create_parameter(&self) -> DbParameter {
        DbParameter::default()
    }

    /// Attach a parameter.
    fn add_parameter(&mut self, parameter: DbParameter);

    /// Parameters attached so far, in binding order.
    fn parameters(&self) -> &[DbParameter];

    /// Execute without reading rows, returning the affected row count.
    async fn execute_non_query(&mut self) -> Result<u64, DbError>;

    /// Execute and open a forward-only reader over the result rows.
    async fn execute_reader<'a>(&'a mut self) -> Result<Box<dyn DbDataReader + 'a>, DbError>;
}

/// Forward-only reader over a command's result rows.
///
/// Drivers implement [`read`](Self::read) and [`value`](Self::value); the
/// typed getters are provided and accept any stored value of a compatible
/// relational family (an `INTEGER` column can be read with `get_i64`).
#[async_trait]
pub trait DbDataReader: Send {
    /// Advance to the next row. Returns `false` when no row is left.
    async fn read(&mut self) -> Result<bool, DbError>;

    /// Raw value of a column in the current row.
    fn value(&self, ordinal: usize) -> Result<DbValue, DbError>;

    /// Per-column null indicator.
    fn is_null(&self, ordinal: usize) -> Result<bool, DbError> {
        Ok(self.value(ordinal)?.is_null())
    }

    /// Read a `SMALLINT`.
    fn get_i16(&self, ordinal: usize) -> Result<i16, DbError> {
        let wide = read_integer(self.value(ordinal)?, ordinal, "SMALLINT")?;
        i16::try_from(wide).map_err(DbError::conversion)
    }

    /// Read an `INTEGER`.
    fn get_i32(&self, ordinal: usize) -> Result<i32, DbError> {
        let wide = read_integer(self.value(ordinal)?, ordinal, "INTEGER")?;
        i32::try_from(wide).map_err(DbError::conversion)
    }

    /// Read a `BIGINT`.
    fn get_i64(&self, ordinal: usize) -> Result<i64, DbError> {
        read_integer(self.value(ordinal)?, ordinal, "BIGINT")
    }

    /// Read a `REAL`.
    fn get_f32(&self, ordinal: usize) -> Result<f32, DbError> {
        match self.value(ordinal)? {
            DbValue::Real(v) => Ok(v),
            DbValue::Double(v) => Ok(v as f32),
            other => Err(mismatch(ordinal, "REAL", &other))
        }
    }

    /// Read a `DOUBLE PRECISION`.
    fn get_f64(&self, ordinal: usize) -> Result<f64, DbError> {
        match self.value(ordinal)? {
            DbValue::Double(v) => Ok(v),
            DbValue::Real(v) => Ok(f64::from(v)),
            other => Err(mismatch(ordinal, "DOUBLE PRECISION", &other))
        }
    }

    /// Read a `DECIMAL`.
    fn get_decimal(&self, ordinal: usize) -> Result<Decimal, DbError> {
        match self.value(ordinal)? {
            DbValue::Decimal(v) => Ok(v),
            DbValue::Text(v) => v.parse().map_err(DbError::conversion),
            other => Err(mismatch(ordinal, "DECIMAL", &other))
        }
    }

    /// Read a `CHAR`.
    fn get_char(&self, ordinal: usize) -> Result<char, DbError> {
        match self.value(ordinal)? {
            DbValue::Char(v) => Ok(v),
            DbValue::Text(v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(DbError::conversion(format!(
                        "expected a single character, found {v:?}"
                    )))
                }
            }
            other => Err(mismatch(ordinal, "CHAR", &other))
        }
    }

    /// Read a `VARCHAR` or `TEXT`.
    fn get_string(&self, ordinal: usize) -> Result<String, DbError> {
        match self.value(ordinal)? {
            DbValue::Text(v) => Ok(v),
            DbValue::Char(v) => Ok(v.to_string()),
            other => Err(mismatch(ordinal, "TEXT", &other))
        }
    }

    /// Read a `DATE`, `TIME` or `TIMESTAMP` as a naive date-time.
    ///
    /// Dates read at midnight, times on 1970-01-01, offset-aware timestamps in
    /// UTC.
    fn get_datetime(&self, ordinal: usize) -> Result<NaiveDateTime, DbError> {
        match self.value(ordinal)? {
            DbValue::Timestamp(v) => Ok(v),
            DbValue::TimestampTz(v) => Ok(v.naive_utc()),
            DbValue::Date(v) => Ok(v.and_time(NaiveTime::default())),
            DbValue::Time(v) => Ok(NaiveDate::default().and_time(v)),
            other => Err(mismatch(ordinal, "TIMESTAMP", &other))
        }
    }

    /// Read a `BOOLEAN`.
    fn get_bool(&self, ordinal: usize) -> Result<bool, DbError> {
        match self.value(ordinal)? {
            DbValue::Boolean(v) => Ok(v),
            DbValue::SmallInt(v) => Ok(v != 0),
            DbValue::Integer(v) => Ok(v != 0),
            DbValue::BigInt(v) => Ok(v != 0),
            other => Err(mismatch(ordinal, "BOOLEAN", &other))
        }
    }

    /// Read a `BLOB`.
    fn get_bytes(&self, ordinal: usize) -> Result<Vec<u8>, DbError> {
        match self.value(ordinal)? {
            DbValue::Blob(v) => Ok(v),
            other => Err(mismatch(ordinal, "BLOB", &other))
        }
    }
}

fn read_integer(value: DbValue, ordinal: usize, expected: &'static str) -> Result<i64, DbError> {
    match value {
        DbValue::SmallInt(v) => Ok(i64::from(v)),
        DbValue::Integer(v) => Ok(i64::from(v)),
        DbValue::BigInt(v) => Ok(v),
        other => Err(mismatch(ordinal, expected, &other))
    }
}

fn mismatch(ordinal: usize, expected: &'static str, found: &DbValue) -> DbError {
    DbError::TypeMismatch {
        ordinal,
        expected,
        found: found.kind()
    }
}
