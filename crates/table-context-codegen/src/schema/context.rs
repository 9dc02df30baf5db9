// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema model handed to the statement generator.

use super::{oracle::IntWidth, types::RelationalType};

/// One relational column derived from one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    /// Column name.
    pub name: String,

    /// Property identifier as declared.
    pub property_name: String,

    /// Declared type text, nullability marker included.
    pub property_type: String,

    /// Column type.
    pub relational_type: RelationalType,

    /// Column level UNIQUE.
    pub is_unique: bool,

    /// Primary key column.
    pub is_primary_key: bool,

    /// Foreign key annotation present.
    pub is_foreign_key: bool,

    /// Nullable column.
    pub is_nullable: bool,

    /// Stored as an enum discriminant.
    pub is_enum: bool,

    /// Width of the enum discriminant, `None` when unknown.
    pub enum_width: Option<IntWidth>,

    /// Needs a conversion bridge on both directions.
    pub requires_conversion: bool,

    /// Referenced table, only for well-formed foreign keys.
    pub reference_table: Option<String>,

    /// Referenced column, only for well-formed foreign keys.
    pub reference_field: Option<String>,

    /// Explicit varchar size.
    pub varchar_length: Option<u8>
}

impl FieldContext {
    /// Declared type without its nullability marker.
    #[must_use]
    pub fn base_type(&self) -> String {
        strip_nullable(&self.property_type).0
    }

    /// Whether a `REFERENCES` clause is emitted.
    #[must_use]
    pub fn references(&self) -> Option<(&str, &str)> {
        match (&self.reference_table, &self.reference_field) {
            (Some(table), Some(field)) if self.is_foreign_key => Some((table, field)),
            _ => None
        }
    }
}

/// A table level `UNIQUE (a, b)` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableUniqueContext {
    /// Column names in annotation order.
    pub columns: Vec<String>
}

/// Schema of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContext {
    /// Table name.
    pub table_name: String,

    /// Class identifier of the mapped struct.
    pub dbo_type: String,

    /// Primary key column, also present in `fields`.
    pub primary_key: FieldContext,

    /// Columns in declaration order.
    pub fields: Vec<FieldContext>,

    /// Table level unique constraints.
    pub table_uniques: Vec<TableUniqueContext>,

    /// Properties that are not columns (no write accessor).
    pub skipped: Vec<String>
}

impl TableContext {
    /// Columns other than the primary key, in order.
    pub fn non_key_fields(&self) -> impl Iterator<Item = &FieldContext> {
        self.fields.iter().filter(|f| !f.is_primary_key)
    }

    /// Columns needing a conversion bridge, first occurrence per distinct
    /// property type. Types are compared exactly, nullability aside.
    #[must_use]
    pub fn conversion_fields(&self) -> Vec<&FieldContext> {
        let mut seen: Vec<String> = Vec::new();
        let mut fields = Vec::new();
        for field in self.fields.iter().filter(|f| f.requires_conversion) {
            let key = field.base_type();
            if !seen.contains(&key) {
                seen.push(key);
                fields.push(field);
            }
        }
        fields
    }
}

/// Split a declared type into its non-nullable form and a nullability flag.
///
/// Recognises `Option<T>` (bare, `std::option::`, `core::option::`) and a
/// trailing `?`. Whitespace is removed from the result.
#[must_use]
pub fn strip_nullable(type_text: &str) -> (String, bool) {
    let compact: String = type_text.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(inner) = compact.strip_suffix('?') {
        return (inner.to_string(), true);
    }

    let unrooted = compact.strip_prefix("::").unwrap_or(&compact);
    for prefix in ["Option<", "std::option::Option<", "core::option::Option<"] {
        if let Some(inner) = unrooted
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return (inner.to_string(), true);
        }
    }

    (compact, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_option_and_marker() {
        assert_eq!(strip_nullable("Option<String>"), ("String".into(), true));
        assert_eq!(
            strip_nullable("std::option::Option< Vec<u8> >"),
            ("Vec<u8>".into(), true)
        );
        assert_eq!(strip_nullable("Guid?"), ("Guid".into(), true));
        assert_eq!(strip_nullable("i32"), ("i32".into(), false));
    }

    #[test]
    fn options_of_generics_keep_inner_brackets() {
        assert_eq!(
            strip_nullable("Option<DateTime<Utc>>"),
            ("DateTime<Utc>".into(), true)
        );
        assert_eq!(
            strip_nullable("OptionalThing<u8>"),
            ("OptionalThing<u8>".into(), false)
        );
    }
}
