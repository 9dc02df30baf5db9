// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversion bridge declarations.
//!
//! For every distinct property type without a native column representation
//! the base trait requires one pair of methods the implementor supplies:
//!
//! ```rust,ignore
//! fn uuid_to_string_converter(&self, value: &Uuid) -> ::table_context::types::String;
//! fn string_to_uuid_converter(&self, value: ::table_context::types::String) -> Uuid;
//! ```

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::context::Context;
use crate::{
    error::GenerateError,
    schema::{FieldContext, RelationalType, canonical_host_type}
};

impl Context<'_> {
    /// Required bridge methods, one pair per distinct convertible type.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoConversionMapping`] for a column type with
    /// no canonical host type, [`GenerateError::ConversionNameClash`] when two
    /// distinct types fold into the same method name.
    pub fn bridges(&self) -> Result<Vec<TokenStream>, GenerateError> {
        let fields = self.table.conversion_fields();
        let mut claimed: HashMap<String, String> = HashMap::new();

        for field in &fields {
            let names = self.conversion(field)?;
            for ident in [names.to_ident(), names.from_ident()] {
                let name = ident.to_string();
                let property = field.base_type();
                if let Some(first) = claimed.get(&name) {
                    return Err(GenerateError::ConversionNameClash {
                        class: self.table.dbo_type.clone(),
                        name,
                        first: first.clone(),
                        second: property
                    });
                }
                claimed.insert(name, property);
            }
        }

        fields.into_iter().map(|field| self.bridge(field)).collect()
    }

    fn bridge(&self, field: &FieldContext) -> Result<TokenStream, GenerateError> {
        let names = self.conversion(field)?;
        let to = names.to_ident();
        let from = names.from_ident();
        let property = self.base_type(field)?;
        let host = self.host_type(field.relational_type)?;
        let to_doc = format!("Convert a `{}` into its column value.", field.base_type());
        let from_doc = format!("Convert a column value back into a `{}`.", field.base_type());

        Ok(quote! {
            #[doc = #to_doc]
            fn #to(&self, value: &#property) -> #host;

            #[doc = #from_doc]
            fn #from(&self, value: #host) -> #property;
        })
    }

    /// Canonical host type of a column type, qualified with the runtime
    /// crate's `types` module.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoConversionMapping`] when the table has no
    /// entry, [`GenerateError::Emit`] if the qualified text does not parse.
    pub fn host_type(&self, relational_type: RelationalType) -> Result<syn::Type, GenerateError> {
        let name = canonical_host_type(relational_type).ok_or(
            GenerateError::NoConversionMapping {
                relational_type
            }
        )?;
        let module = format!("{}::types::", self.runtime.to_token_stream());

        let mut qualified = String::new();
        let mut word = String::new();
        for c in name.chars().chain(std::iter::once(' ')) {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                continue;
            }
            if !word.is_empty() {
                qualified.push_str(&module);
                qualified.push_str(&word);
                word.clear();
            }
            if c != ' ' {
                qualified.push(c);
            }
        }

        syn::parse_str(&qualified).map_err(|err| GenerateError::Emit {
            class:  self.table.dbo_type.clone(),
            reason: format!("`{qualified}`: {err}")
        })
    }
}
