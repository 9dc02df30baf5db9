// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bound parameter values.
//!
//! [`DbValue`] has one variant per relational type. Host values reach it
//! through [`ToParameter`], which collapses unsigned integers into the signed
//! relational width of the same size (bit-preserving) and maps `None` to
//! [`DbValue::Null`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

/// A single relational value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DbValue {
    /// SQL `NULL`.
    #[default]
    Null,
    /// `SMALLINT`.
    SmallInt(i16),
    /// `INTEGER`.
    Integer(i32),
    /// `BIGINT`.
    BigInt(i64),
    /// `REAL`.
    Real(f32),
    /// `DOUBLE PRECISION`.
    Double(f64),
    /// `DECIMAL`.
    Decimal(Decimal),
    /// `CHAR`.
    Char(char),
    /// `VARCHAR` / `TEXT`.
    Text(String),
    /// `DATE`.
    Date(NaiveDate),
    /// `TIME`.
    Time(NaiveTime),
    /// `TIMESTAMP` without offset.
    Timestamp(NaiveDateTime),
    /// `TIMESTAMP` normalised to UTC.
    TimestampTz(DateTime<Utc>),
    /// `BOOLEAN`.
    Boolean(bool),
    /// `BLOB`.
    Blob(Vec<u8>)
}

impl DbValue {
    /// Check for SQL `NULL`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the stored kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::SmallInt(_) => "SMALLINT",
            Self::Integer(_) => "INTEGER",
            Self::BigInt(_) => "BIGINT",
            Self::Real(_) => "REAL",
            Self::Double(_) => "DOUBLE PRECISION",
            Self::Decimal(_) => "DECIMAL",
            Self::Char(_) => "CHAR",
            Self::Text(_) => "TEXT",
            Self::Date(_) => "DATE",
            Self::Time(_) => "TIME",
            Self::Timestamp(_) | Self::TimestampTz(_) => "TIMESTAMP",
            Self::Boolean(_) => "BOOLEAN",
            Self::Blob(_) => "BLOB"
        }
    }
}

/// A named command parameter.
///
/// Names carry the `@` prefix used in the generated SQL (`@Id`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DbParameter {
    /// Parameter name including the `@` prefix.
    pub name: String,

    /// Bound value.
    pub value: DbValue
}

impl DbParameter {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, value: DbValue) -> Self {
        Self {
            name: name.into(),
            value
        }
    }

    /// Set the parameter name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the bound value.
    pub fn set_value(&mut self, value: DbValue) {
        self.value = value;
    }
}

/// Conversion of a host value into a bound [`DbValue`].
///
/// Takes `&self` so generated accessors bind straight from a borrowed row.
pub trait ToParameter {
    /// Produce the value to bind.
    fn to_parameter(&self) -> DbValue;
}

macro_rules! impl_to_parameter_cast {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl ToParameter for $ty {
                fn to_parameter(&self) -> DbValue {
                    DbValue::$variant(*self as $target)
                }
            }
        )*
    };
}

impl_to_parameter_cast! {
    i8 => SmallInt as i16,
    u8 => SmallInt as i16,
    i16 => SmallInt as i16,
    u16 => SmallInt as i16,
    i32 => Integer as i32,
    u32 => Integer as i32,
    i64 => BigInt as i64,
    u64 => BigInt as i64,
    isize => BigInt as i64,
    usize => BigInt as i64,
    f32 => Real as f32,
    f64 => Double as f64,
}

macro_rules! impl_to_parameter_copy {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToParameter for $ty {
                fn to_parameter(&self) -> DbValue {
                    DbValue::$variant(*self)
                }
            }
        )*
    };
}

impl_to_parameter_copy! {
    bool => Boolean,
    char => Char,
    Decimal => Decimal,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
}

impl ToParameter for str {
    fn to_parameter(&self) -> DbValue {
        DbValue::Text(self.to_owned())
    }
}

impl ToParameter for String {
    fn to_parameter(&self) -> DbValue {
        DbValue::Text(self.clone())
    }
}

impl ToParameter for [u8] {
    fn to_parameter(&self) -> DbValue {
        DbValue::Blob(self.to_vec())
    }
}

impl ToParameter for Vec<u8> {
    fn to_parameter(&self) -> DbValue {
        DbValue::Blob(self.clone())
    }
}

impl<Tz: TimeZone> ToParameter for DateTime<Tz> {
    fn to_parameter(&self) -> DbValue {
        DbValue::TimestampTz(self.with_timezone(&Utc))
    }
}

impl ToParameter for DbValue {
    fn to_parameter(&self) -> DbValue {
        self.clone()
    }
}

impl<T: ToParameter> ToParameter for Option<T> {
    fn to_parameter(&self) -> DbValue {
        self.as_ref()
            .map_or(DbValue::Null, ToParameter::to_parameter)
    }
}

impl<T: ToParameter + ?Sized> ToParameter for &T {
    fn to_parameter(&self) -> DbValue {
        (**self).to_parameter()
    }
}

impl<T: ToParameter + ?Sized> ToParameter for Box<T> {
    fn to_parameter(&self) -> DbValue {
        (**self).to_parameter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_collapses_into_signed_width() {
        assert_eq!(u16::MAX.to_parameter(), DbValue::SmallInt(-1));
        assert_eq!(u32::MAX.to_parameter(), DbValue::Integer(-1));
        assert_eq!(7_u64.to_parameter(), DbValue::BigInt(7));
    }

    #[test]
    fn option_none_is_null() {
        let value: Option<String> = None;
        assert!(value.to_parameter().is_null());
        assert_eq!(
            Some("a".to_string()).to_parameter(),
            DbValue::Text("a".into())
        );
    }

    #[test]
    fn boxed_and_borrowed_values() {
        let text: Box<str> = "boxed".into();
        assert_eq!(text.to_parameter(), DbValue::Text("boxed".into()));
        let bytes: Box<[u8]> = vec![1, 2].into_boxed_slice();
        assert_eq!(bytes.to_parameter(), DbValue::Blob(vec![1, 2]));
        assert_eq!((&5_i32).to_parameter(), DbValue::Integer(5));
    }

    #[test]
    fn offset_timestamps_normalise_to_utc() {
        let offset = chrono::FixedOffset::east_opt(3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        let DbValue::TimestampTz(utc) = local.to_parameter() else {
            panic!("expected timestamp");
        };
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parameter_setters() {
        let mut parameter = DbParameter::default();
        parameter.set_name("@Id");
        parameter.set_value(DbValue::Integer(1));
        assert_eq!(parameter, DbParameter::new("@Id", DbValue::Integer(1)));
    }
}
