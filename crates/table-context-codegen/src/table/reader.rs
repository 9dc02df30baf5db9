// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row materialization for `find`.
//!
//! Each column is read with the getter of its relational type and then
//! narrowed into the property type:
//!
//! | Relational | Getter |
//! |------------|--------|
//! | SMALLINT / INTEGER / BIGINT | `get_i16` / `get_i32` / `get_i64` |
//! | REAL / DOUBLE PRECISION | `get_f32` / `get_f64` |
//! | DECIMAL | `get_decimal` |
//! | CHAR | `get_char` |
//! | VARCHAR / TEXT | `get_string` |
//! | DATE / TIME / TIMESTAMP | `get_datetime` |
//! | BOOLEAN | `get_bool` |
//! | BLOB | `get_bytes` |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    bindings::enum_repr,
    context::{Context, is_option}
};
use crate::{
    error::GenerateError,
    schema::{FieldContext, RelationalType, types::normalize}
};

/// Getter name of a relational type.
pub fn getter(relational_type: RelationalType) -> &'static str {
    match relational_type {
        RelationalType::SmallInt => "get_i16",
        RelationalType::Integer => "get_i32",
        RelationalType::BigInt => "get_i64",
        RelationalType::Real => "get_f32",
        RelationalType::DoublePrecision => "get_f64",
        RelationalType::Decimal => "get_decimal",
        RelationalType::Char => "get_char",
        RelationalType::Varchar | RelationalType::Text => "get_string",
        RelationalType::Date | RelationalType::Time | RelationalType::Timestamp => "get_datetime",
        RelationalType::Boolean => "get_bool",
        RelationalType::Blob => "get_bytes"
    }
}

impl Context<'_> {
    /// `field: <expr>` initializers for every column, in SELECT order.
    ///
    /// # Errors
    ///
    /// Propagates identifier, type and conversion naming failures.
    pub fn read_all(&self) -> Result<Vec<TokenStream>, GenerateError> {
        self.table
            .fields
            .iter()
            .enumerate()
            .map(|(ordinal, field)| {
                let ident = self.property_ident(field)?;
                let value = self.read(field, ordinal)?;
                Ok(quote!(#ident: #value))
            })
            .collect()
    }

    /// Expression reading one column, null guard included.
    fn read(&self, field: &FieldContext, ordinal: usize) -> Result<TokenStream, GenerateError> {
        let value = self.read_value(field, ordinal)?;

        if !field.is_nullable {
            return Ok(value);
        }

        let value = if is_option(field) {
            quote!(::core::option::Option::Some(#value))
        } else {
            value
        };
        Ok(quote! {
            if reader.is_null(#ordinal)? {
                ::core::default::Default::default()
            } else {
                #value
            }
        })
    }

    /// Expression reading a non-null column value.
    fn read_value(&self, field: &FieldContext, ordinal: usize) -> Result<TokenStream, GenerateError> {
        let runtime = self.runtime;
        let getter = format_ident!("{}", getter(field.relational_type));
        let raw = quote!(reader.#getter(#ordinal)?);

        if field.is_enum {
            let ty = self.base_type(field)?;
            let repr = enum_repr(field.enum_width);
            let name = field.base_type();
            return Ok(quote! {{
                let value: #repr = #raw;
                <#ty as ::core::convert::TryFrom<#repr>>::try_from(value)
                    .map_err(|_| #runtime::DbError::invalid_enum(#name, value))?
            }});
        }

        if field.requires_conversion {
            let from = self.conversion(field)?.from_ident();
            return Ok(quote!(self.#from(#raw)));
        }

        let ty = self.base_type(field)?;
        let raw = if field.relational_type == RelationalType::Timestamp && is_offset_aware(field) {
            quote!(#raw.and_utc())
        } else {
            raw
        };
        Ok(quote!(<#ty as #runtime::FromColumn<_>>::from_column(#raw)?))
    }
}

/// Whether a TIMESTAMP property carries an offset (`DateTime<Tz>`).
fn is_offset_aware(field: &FieldContext) -> bool {
    let base = normalize(&field.base_type());
    base.starts_with("datetime<") || base.starts_with("chrono::datetime<")
}
