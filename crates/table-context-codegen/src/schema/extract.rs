// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema extraction.
//!
//! Walks a [`ClassDecl`] and builds the [`TableContext`] the statement
//! generator works from.
//!
//! # Recognised Annotations
//!
//! | Annotation | Level | Effect |
//! |------------|-------|--------|
//! | `table(name)` / `table(name = ..)` | class | Table name |
//! | `table_unique(a, b, ..)` | class | `UNIQUE (a, b, ..)` |
//! | `primary_key` | property | Primary key column |
//! | `unique` / `column_unique` | property | Column level UNIQUE |
//! | `column_name(name)` / `column_name(name = ..)` | property | Column name |
//! | `varchar(n)` / `varchar(length = n)` | property | `VARCHAR`, `n` in 0..=255 |
//! | `foreign_key(table, field)` | property | `REFERENCES table(field)` |
//!
//! Names compare format-insensitively, see
//! [`Annotation::is`](super::Annotation::is).

use super::{
    context::{FieldContext, TableContext, TableUniqueContext, strip_nullable},
    decl::{AnnotationArg, ClassDecl, PropertyDecl},
    oracle::{IntWidth, ResolvedType, TypeOracle},
    types::{RelationalType, map_host_type}
};
use crate::error::GenerateError;

/// Build the schema of one class.
///
/// # Errors
///
/// - [`GenerateError::MissingPrimaryKey`] when no column is a primary key
/// - [`GenerateError::MultiplePrimaryKeys`] when more than one is
/// - [`GenerateError::InvalidVarcharLength`] for a size outside 0..=255
pub fn extract_table(
    decl: &ClassDecl,
    oracle: &dyn TypeOracle
) -> Result<TableContext, GenerateError> {
    let fields = decl
        .properties
        .iter()
        .filter(|p| p.accessors.is_column())
        .map(|p| extract_field(p, oracle))
        .collect::<Result<Vec<_>, _>>()?;

    let mut keys = fields.iter().filter(|f| f.is_primary_key);
    let primary_key = match (keys.next(), keys.next()) {
        (Some(key), None) => key.clone(),
        (None, _) => {
            return Err(GenerateError::MissingPrimaryKey {
                class: decl.name.clone()
            });
        }
        (Some(_), Some(_)) => {
            return Err(GenerateError::MultiplePrimaryKeys {
                class:   decl.name.clone(),
                columns: fields
                    .iter()
                    .filter(|f| f.is_primary_key)
                    .map(|f| f.name.clone())
                    .collect()
            });
        }
    };

    Ok(TableContext {
        table_name: table_name(decl),
        dbo_type: decl.name.clone(),
        primary_key,
        fields,
        table_uniques: table_uniques(decl),
        skipped: decl
            .properties
            .iter()
            .filter(|p| !p.accessors.is_column())
            .map(|p| p.name.clone())
            .collect()
    })
}

fn table_name(decl: &ClassDecl) -> String {
    decl.annotations_named("table")
        .find_map(|a| a.named_or_positional("name", 0))
        .map_or_else(|| decl.name.clone(), |arg| arg.as_text().to_string())
}

fn table_uniques(decl: &ClassDecl) -> Vec<TableUniqueContext> {
    decl.annotations_named("table_unique")
        .map(|a| TableUniqueContext {
            columns: a
                .positional
                .iter()
                .map(|arg| arg.as_text().to_string())
                .collect()
        })
        .filter(|u| !u.columns.is_empty())
        .collect()
}

fn extract_field(
    property: &PropertyDecl,
    oracle: &dyn TypeOracle
) -> Result<FieldContext, GenerateError> {
    let mut name = column_name(&property.name);
    let mut is_unique = false;
    let mut is_primary_key = false;
    let mut is_foreign_key = false;
    let mut reference_table = None;
    let mut reference_field = None;
    let mut varchar_length = None;

    for annotation in &property.annotations {
        if annotation.is("column_name") {
            if let Some(arg) = annotation.named_or_positional("name", 0) {
                name = arg.as_text().to_string();
            }
        } else if annotation.is("unique") || annotation.is("column_unique") {
            is_unique = true;
        } else if annotation.is("primary_key") {
            is_primary_key = true;
        } else if annotation.is("varchar") {
            if let Some(arg) = annotation.named_or_positional("length", 0) {
                varchar_length = Some(parse_varchar_length(&property.name, arg)?);
            }
        } else if annotation.is("foreign_key") {
            is_foreign_key = true;
            let table = annotation.named_or_positional("table", 0);
            let field = annotation.named_or_positional("field", 1);
            if let (Some(table), Some(field)) = (table, field) {
                reference_table = Some(table.as_text().to_string());
                reference_field = Some(field.as_text().to_string());
            }
        }
    }

    let (base_type, marked_nullable) = strip_nullable(&property.declared_type);
    let resolved = oracle.resolve(&base_type);
    let is_nullable =
        property.nullable || marked_nullable || matches!(resolved, ResolvedType::Nullable(_));

    let (relational_type, is_enum, enum_width, requires_conversion) = match resolved.enum_width() {
        Some(width) => (enum_relational_type(width), true, width, false),
        None => {
            let mapping = map_host_type(&base_type);
            let relational_type = if varchar_length.is_some() {
                RelationalType::Varchar
            } else {
                mapping.relational_type
            };
            (relational_type, false, None, mapping.requires_conversion)
        }
    };

    Ok(FieldContext {
        name,
        property_name: property.name.clone(),
        property_type: property.declared_type.clone(),
        relational_type,
        is_unique,
        is_primary_key,
        is_foreign_key,
        is_nullable,
        is_enum,
        enum_width,
        requires_conversion,
        reference_table,
        reference_field,
        varchar_length
    })
}

/// Column name of a property: the identifier without a raw `r#` prefix.
fn column_name(property_name: &str) -> String {
    property_name
        .strip_prefix("r#")
        .unwrap_or(property_name)
        .to_string()
}

fn parse_varchar_length(property: &str, arg: &AnnotationArg) -> Result<u8, GenerateError> {
    let text = arg.as_text();
    let length = match arg {
        AnnotationArg::Int(_) | AnnotationArg::Str(_) => text.trim().parse::<u8>().ok(),
        AnnotationArg::NameOf(_) | AnnotationArg::Expr(_) => None
    };
    length.ok_or_else(|| GenerateError::InvalidVarcharLength {
        property: property.to_string(),
        value:    text.to_string()
    })
}

/// Column type of an enum discriminant.
pub(crate) fn enum_relational_type(width: Option<IntWidth>) -> RelationalType {
    match width {
        Some(IntWidth::W8 | IntWidth::W16) => RelationalType::SmallInt,
        Some(IntWidth::W64) => RelationalType::BigInt,
        Some(IntWidth::W32) | None => RelationalType::Integer
    }
}
