// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive front end.
//!
//! Lowers a `#[derive(Table)]` input into the [`ClassDecl`] the extractor
//! consumes, together with the enum hints and the generation settings found
//! on the struct.
//!
//! # Supported Attributes
//!
//! | Attribute | Level | Description |
//! |-----------|-------|-------------|
//! | `table("name")` / `table(name = "..")` | struct | Table name |
//! | `table(runtime = "path")` | struct | Runtime crate path |
//! | `table_unique(a, "b", nameof(c))` | struct | Multi-column UNIQUE |
//! | `primary_key` | field | Primary key |
//! | `unique` | field | Column UNIQUE |
//! | `column_name("col")` | field | Column name |
//! | `varchar(n)` | field | VARCHAR |
//! | `foreign_key("table", "field")` | field | REFERENCES |
//! | `enumeration` / `enumeration(i16)` | field | Field type is a fieldless enum |
//! | `skip` | field | Not a column |
//!
//! Arguments lower uniformly: `name = value` is a named argument, string and
//! integer literals keep their value, a bare identifier or `nameof(x)` is a
//! name-of reference, anything else is kept as expression text.

use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use quote::ToTokens;
use syn::{
    Attribute, DeriveInput, Expr, Generics, Ident, Lit, Meta, Token, Type, Visibility,
    punctuated::Punctuated
};

use crate::{
    config::CodegenConfig,
    schema::{
        Accessors, Annotation, AnnotationArg, ClassDecl, EnumHints, IntWidth, PropertyDecl,
        strip_nullable
    }
};

/// Struct level view darling parses.
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named), forward_attrs(table, table_unique))]
struct TableAttrs {
    ident:    Ident,
    vis:      Visibility,
    generics: Generics,
    attrs:    Vec<Attribute>,
    data:     Data<Ignored, FieldAttrs>
}

/// Field level view darling parses.
#[derive(Debug, FromField)]
#[darling(forward_attrs(
    primary_key,
    unique,
    column_name,
    varchar,
    foreign_key,
    enumeration,
    skip
))]
struct FieldAttrs {
    ident: Option<Ident>,
    ty:    Type,
    attrs: Vec<Attribute>
}

/// Everything the derive front end extracts from one struct.
#[derive(Debug, Clone)]
pub struct ParsedClass {
    /// Lowered declaration.
    pub decl: ClassDecl,

    /// Field types marked `#[enumeration]`.
    pub hints: EnumHints,

    /// Settings, runtime path possibly overridden on the struct.
    pub config: CodegenConfig
}

impl ParsedClass {
    /// Parse a derive input.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a struct with named fields
    /// - Generic structs
    /// - Malformed attribute arguments
    /// - A `runtime` override that is not a path
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = TableAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(
                darling::Error::custom("#[derive(Table)] does not support generic structs")
                    .with_span(&attrs.generics)
            );
        }

        let fields = match attrs.data {
            Data::Struct(fields) => fields.fields,
            Data::Enum(_) => {
                return Err(darling::Error::custom("Table can only be derived for structs")
                    .with_span(&attrs.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let mut decl = ClassDecl::new(attrs.ident.to_string())
            .with_visibility(attrs.vis.to_token_stream().to_string());
        let mut hints = EnumHints::new();

        for attr in &attrs.attrs {
            if let Some(annotation) = errors.handle(lower_attribute(attr)) {
                decl = decl.with_annotation(annotation);
            }
        }

        for field in fields {
            if let Some(property) = errors.handle(lower_field(field, &mut hints)) {
                decl = decl.with_property(property);
            }
        }

        let config = match decl
            .annotations_named("table")
            .find_map(|a| a.named("runtime"))
        {
            Some(runtime) => errors
                .handle(
                    syn::parse_str::<syn::Path>(runtime.as_text()).map_err(|err| {
                        darling::Error::custom(format!("invalid runtime path: {err}"))
                            .with_span(&attrs.ident)
                    })
                )
                .map(|path| CodegenConfig::default().with_runtime(path))
                .unwrap_or_default(),
            None => CodegenConfig::default()
        };

        errors.finish()?;

        Ok(Self {
            decl,
            hints,
            config
        })
    }
}

fn lower_field(field: FieldAttrs, hints: &mut EnumHints) -> darling::Result<PropertyDecl> {
    let ident = field
        .ident
        .ok_or_else(|| darling::Error::custom("expected a named field"))?;
    let declared_type = type_text(&field.ty);
    let (base_type, optional) = strip_nullable(&declared_type);
    let mut property = PropertyDecl::new(ident.to_string(), declared_type.clone());
    if optional {
        property = property.nullable();
    }

    for attr in &field.attrs {
        let annotation = lower_attribute(attr)?;

        if annotation.is("skip") {
            property = property.with_accessors(Accessors {
                get:  true,
                set:  false,
                init: false
            });
        } else if annotation.is("enumeration") {
            let width = annotation
                .named_or_positional("repr", 0)
                .and_then(|arg| IntWidth::from_type_name(arg.as_text()));
            hints.insert(&base_type, width);
        }

        property = property.with_annotation(annotation);
    }

    Ok(property)
}

/// Type text without whitespace (`Option<String>`).
fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn lower_attribute(attr: &Attribute) -> darling::Result<Annotation> {
    let name = attr.path().to_token_stream().to_string().replace(' ', "");
    let mut annotation = Annotation::new(name);

    match &attr.meta {
        Meta::Path(_) => {}
        Meta::NameValue(meta) => {
            annotation = annotation.arg(lower_arg(&meta.value));
        }
        Meta::List(_) => {
            let args =
                attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;
            for arg in &args {
                annotation = match arg {
                    Expr::Assign(assign) => match path_name(&assign.left) {
                        Some(name) => annotation.named_arg(name, lower_arg(&assign.right)),
                        None => {
                            return Err(darling::Error::custom(
                                "expected `name = value` with a plain name"
                            )
                            .with_span(&assign.left));
                        }
                    },
                    other => annotation.arg(lower_arg(other))
                };
            }
        }
    }

    Ok(annotation)
}

fn lower_arg(expr: &Expr) -> AnnotationArg {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => AnnotationArg::Str(s.value()),
            Lit::Int(i) => AnnotationArg::Int(i.base10_digits().to_string()),
            other => AnnotationArg::Expr(other.to_token_stream().to_string())
        },
        Expr::Path(_) => match path_name(expr) {
            Some(name) => AnnotationArg::NameOf(name),
            None => AnnotationArg::Expr(expr.to_token_stream().to_string())
        },
        Expr::Call(call) if path_name(&call.func).as_deref() == Some("nameof") => {
            match call.args.first().and_then(path_name) {
                Some(name) if call.args.len() == 1 => AnnotationArg::NameOf(name),
                _ => AnnotationArg::Expr(expr.to_token_stream().to_string())
            }
        }
        other => AnnotationArg::Expr(other.to_token_stream().to_string())
    }
}

/// Single identifier of a path expression, raw prefix dropped.
fn path_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => path.path.get_ident().map(|ident| {
            let name = ident.to_string();
            name.strip_prefix("r#").map_or(name.clone(), str::to_string)
        }),
        _ => None
    }
}
