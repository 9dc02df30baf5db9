// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Narrowing of relational column reads into property types.
//!
//! A generated `find` reads every column with the accessor of its relational
//! type (`get_i32`, `get_datetime`, ...) and then narrows the result into the
//! declared property type with [`FromColumn`]. Identity narrowing is free;
//! the remaining impls undo the collapses made by
//! [`ToParameter`](crate::ToParameter).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::DbError;

/// Fallible conversion from a relational read type `T`.
pub trait FromColumn<T>: Sized {
    /// Narrow a column value.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Conversion`] when the value does not fit.
    fn from_column(value: T) -> Result<Self, DbError>;
}

impl<T> FromColumn<T> for T {
    fn from_column(value: T) -> Result<Self, DbError> {
        Ok(value)
    }
}

// Unsigned values were bound with a wrapping cast.
macro_rules! impl_from_column_wrapping {
    ($($ty:ty => $source:ty),* $(,)?) => {
        $(
            impl FromColumn<$source> for $ty {
                fn from_column(value: $source) -> Result<Self, DbError> {
                    Ok(value as $ty)
                }
            }
        )*
    };
}

impl_from_column_wrapping! {
    u16 => i16,
    u32 => i32,
    u64 => i64,
    usize => i64,
}

macro_rules! impl_from_column_checked {
    ($($ty:ty => $source:ty),* $(,)?) => {
        $(
            impl FromColumn<$source> for $ty {
                fn from_column(value: $source) -> Result<Self, DbError> {
                    <$ty>::try_from(value).map_err(DbError::conversion)
                }
            }
        )*
    };
}

impl_from_column_checked! {
    i8 => i16,
    u8 => i16,
    isize => i64,
}

// Values stored in a VARCHAR column forced by a size annotation.
macro_rules! impl_from_column_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromColumn<String> for $ty {
                fn from_column(value: String) -> Result<Self, DbError> {
                    value.trim().parse::<$ty>().map_err(DbError::conversion)
                }
            }
        )*
    };
}

impl_from_column_parse!(
    i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64, bool, char, Decimal
);

impl FromColumn<String> for Box<str> {
    fn from_column(value: String) -> Result<Self, DbError> {
        Ok(value.into_boxed_str())
    }
}

impl FromColumn<Vec<u8>> for Box<[u8]> {
    fn from_column(value: Vec<u8>) -> Result<Self, DbError> {
        Ok(value.into_boxed_slice())
    }
}

impl FromColumn<NaiveDateTime> for NaiveDate {
    fn from_column(value: NaiveDateTime) -> Result<Self, DbError> {
        Ok(value.date())
    }
}

impl FromColumn<NaiveDateTime> for NaiveTime {
    fn from_column(value: NaiveDateTime) -> Result<Self, DbError> {
        Ok(value.time())
    }
}

impl FromColumn<DateTime<Utc>> for DateTime<FixedOffset> {
    fn from_column(value: DateTime<Utc>) -> Result<Self, DbError> {
        Ok(value.fixed_offset())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn identity_is_free() {
        assert_eq!(i32::from_column(5_i32).unwrap(), 5);
        assert_eq!(String::from_column("x".to_string()).unwrap(), "x");
    }

    #[test]
    fn unsigned_round_trips_wrapping_cast() {
        let stored = u32::MAX as i32;
        assert_eq!(u32::from_column(stored).unwrap(), u32::MAX);
        assert_eq!(u16::from_column(-1_i16).unwrap(), u16::MAX);
    }

    #[test]
    fn byte_out_of_range_fails() {
        assert_eq!(u8::from_column(200_i16).unwrap(), 200);
        assert!(u8::from_column(300_i16).is_err());
        assert!(i8::from_column(-129_i16).is_err());
    }

    #[test]
    fn temporal_narrowing() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let time = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
        let stamp = date.and_time(time);
        assert_eq!(NaiveDate::from_column(stamp).unwrap(), date);
        assert_eq!(NaiveTime::from_column(stamp).unwrap(), time);

        let utc = Utc.from_utc_datetime(&stamp);
        let fixed = DateTime::<FixedOffset>::from_column(utc).unwrap();
        assert_eq!(fixed, utc);
    }

    #[test]
    fn varchar_numbers_parse() {
        assert_eq!(i32::from_column(" 42 ".to_string()).unwrap(), 42);
        assert!(i32::from_column("forty".to_string()).is_err());
    }
}
