// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter binding.
//!
//! Every bound column produces:
//!
//! ```rust,ignore
//! let parameter = self.create_parameter(&*command, "@Email", ToParameter::to_parameter(&dbo.email));
//! command.add_parameter(parameter);
//! ```
//!
//! The value expression depends on the column:
//!
//! | Column | Value |
//! |--------|-------|
//! | native | `&dbo.field` |
//! | enum | `Clone::clone(&dbo.field) as i32` |
//! | conversion | `self.uuid_to_string_converter(&dbo.field)` |
//!
//! Nullable enum and conversion columns map through `Option::as_ref`.

use proc_macro2::TokenStream;
use quote::quote;

use super::context::{Context, is_option};
use crate::{
    error::GenerateError,
    schema::{FieldContext, IntWidth, canonical_host_type}
};

impl Context<'_> {
    /// Bind every column of `dbo` in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates identifier and conversion naming failures.
    pub fn bind_all(&self) -> Result<Vec<TokenStream>, GenerateError> {
        let mut bindings = Vec::with_capacity(self.table.fields.len());
        for field in &self.table.fields {
            if canonical_host_type(field.relational_type).is_none() {
                continue;
            }
            let ident = self.property_ident(field)?;
            bindings.push(self.bind(field, &quote!(dbo.#ident))?);
        }
        Ok(bindings)
    }

    /// Bind the primary key from the accessor argument `primary_key`.
    ///
    /// # Errors
    ///
    /// Propagates conversion naming failures.
    pub fn bind_key(&self) -> Result<TokenStream, GenerateError> {
        self.bind(self.primary_key(), &quote!(primary_key))
    }

    /// Bind one column read from the place expression `source`.
    fn bind(&self, field: &FieldContext, source: &TokenStream) -> Result<TokenStream, GenerateError> {
        let runtime = self.runtime;
        let parameter = format!("@{}", field.name);
        let value = self.value(field, source)?;

        Ok(quote! {
            let parameter = self.create_parameter(
                &*command,
                #parameter,
                #runtime::ToParameter::to_parameter(&#value)
            );
            command.add_parameter(parameter);
        })
    }

    fn value(&self, field: &FieldContext, source: &TokenStream) -> Result<TokenStream, GenerateError> {
        let optional = is_option(field);

        if field.is_enum {
            let repr = enum_repr(field.enum_width);
            return Ok(if optional {
                quote!(#source.as_ref().map(|value| ::core::clone::Clone::clone(value) as #repr))
            } else {
                quote!((::core::clone::Clone::clone(&#source) as #repr))
            });
        }

        if field.requires_conversion {
            let to = self.conversion(field)?.to_ident();
            return Ok(if optional {
                quote!(#source.as_ref().map(|value| self.#to(value)))
            } else {
                quote!(self.#to(&#source))
            });
        }

        Ok(quote!(#source))
    }
}

/// Integer type an enum discriminant is stored as.
pub fn enum_repr(width: Option<IntWidth>) -> TokenStream {
    match width {
        Some(IntWidth::W8 | IntWidth::W16) => quote!(i16),
        Some(IntWidth::W64) => quote!(i64),
        Some(IntWidth::W32) | None => quote!(i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::default_runtime,
        schema::{Annotation, ClassDecl, EnumHints, PropertyDecl, extract_table}
    };

    fn render(decl: ClassDecl, hints: &EnumHints) -> Vec<String> {
        let table = extract_table(&decl, hints).unwrap();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        ctx.bind_all()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn decl() -> ClassDecl {
        ClassDecl::new("Account")
            .with_property(
                PropertyDecl::new("id", "Uuid").with_annotation(Annotation::new("primary_key"))
            )
            .with_property(PropertyDecl::new("owner", "Option<Uuid>"))
            .with_property(PropertyDecl::new("status", "Status"))
            .with_property(PropertyDecl::new("email", "String"))
    }

    #[test]
    fn one_binding_per_column() {
        let hints = EnumHints::new().with_enum("Status", None);
        let bindings = render(decl(), &hints);
        assert_eq!(bindings.len(), 4);
        assert!(bindings[0].contains("\"@id\""));
        assert!(bindings[0].contains("self . uuid_to_string_converter (& dbo . id)"));
        assert!(bindings[1].contains("dbo . owner . as_ref () . map"));
        assert!(bindings[2].contains("as i32"));
        assert!(bindings[3].contains("to_parameter (& dbo . email)"));
    }

    #[test]
    fn key_binds_from_argument() {
        let table = extract_table(&decl(), &EnumHints::new()).unwrap();
        let runtime = default_runtime();
        let ctx = Context::new(&table, &runtime).unwrap();
        let key = ctx.bind_key().unwrap().to_string();
        assert!(key.contains("uuid_to_string_converter (& primary_key)"));
    }

    #[test]
    fn enum_widths() {
        assert_eq!(enum_repr(Some(IntWidth::W8)).to_string(), "i16");
        assert_eq!(enum_repr(Some(IntWidth::W64)).to_string(), "i64");
        assert_eq!(enum_repr(None).to_string(), "i32");
    }
}
