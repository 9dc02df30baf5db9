// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation errors.
//!
//! Every error is scoped to one class: [`generate_all`](crate::generate_all)
//! reports it for the failing class and keeps going with the rest.

use std::path::PathBuf;

use crate::schema::RelationalType;

/// Error produced while generating the access layer for one class.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No property carries a primary key annotation.
    #[error("class `{class}` has no primary key; mark one property with #[primary_key]")]
    MissingPrimaryKey {
        /// Class identifier.
        class: String
    },

    /// More than one property carries a primary key annotation.
    #[error("class `{class}` declares more than one primary key: {}", columns.join(", "))]
    MultiplePrimaryKeys {
        /// Class identifier.
        class: String,

        /// Columns marked as primary key, in declaration order.
        columns: Vec<String>
    },

    /// A varchar size annotation is not an integer in `0..=255`.
    #[error("invalid varchar length `{value}` on `{property}`: expected an integer in 0..=255")]
    InvalidVarcharLength {
        /// Property identifier.
        property: String,

        /// Argument text as written.
        value: String
    },

    /// A relational type has no canonical host type.
    #[error("no conversion mapping for type {relational_type}")]
    NoConversionMapping {
        /// The unmapped relational type.
        relational_type: RelationalType
    },

    /// Two distinct property types fold into the same bridge method name.
    #[error("conversion bridge `{name}` of `{class}` is shared by `{first}` and `{second}`")]
    ConversionNameClash {
        /// Class identifier.
        class: String,

        /// Clashing method name.
        name: String,

        /// Property type that claimed the name first.
        first: String,

        /// Property type that clashes with it.
        second: String
    },

    /// The substituted unit is not valid Rust.
    #[error("generated source for `{class}` does not parse: {reason}")]
    Emit {
        /// Class identifier.
        class: String,

        /// Parser message.
        reason: String
    },

    /// A sink failed to store a generated file.
    #[error("cannot write `{}`", path.display())]
    Io {
        /// Target path.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error
    }
}

impl GenerateError {
    /// Convert into a darling error spanned at `span`.
    ///
    /// Used by the derive macro so that every failure surfaces as a compile
    /// error on the annotated struct.
    pub fn into_darling(self, span: &impl quote::ToTokens) -> darling::Error {
        darling::Error::custom(self.to_string()).with_span(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_keys_lists_columns() {
        let err = GenerateError::MultiplePrimaryKeys {
            class:   "User".into(),
            columns: vec!["Id".into(), "Email".into()]
        };
        assert_eq!(
            err.to_string(),
            "class `User` declares more than one primary key: Id, Email"
        );
    }

    #[test]
    fn no_conversion_mapping_message() {
        let err = GenerateError::NoConversionMapping {
            relational_type: RelationalType::Text
        };
        assert_eq!(err.to_string(), "no conversion mapping for type TEXT");
    }

    #[test]
    fn name_clash_names_both_types() {
        let err = GenerateError::ConversionNameClash {
            class:  "Site".into(),
            name:   "url_to_string_converter".into(),
            first:  "Url".into(),
            second: "URL".into()
        };
        assert_eq!(
            err.to_string(),
            "conversion bridge `url_to_string_converter` of `Site` is shared by `Url` and `URL`"
        );
    }

    #[test]
    fn into_darling_keeps_message() {
        let ident: syn::Ident = syn::parse_quote!(User);
        let err = GenerateError::MissingPrimaryKey {
            class: "User".into()
        }
        .into_darling(&ident);
        assert!(err.to_string().contains("has no primary key"));
    }
}
