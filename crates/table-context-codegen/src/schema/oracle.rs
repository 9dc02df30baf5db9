// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type resolution for property types.
//!
//! A derive macro only sees tokens, so it cannot tell an enum from a struct
//! named in a field type. The extractor asks a [`TypeOracle`] instead: the
//! derive front end answers from `#[enumeration]` hints, a build script can
//! answer from whatever it parsed.

use std::collections::HashMap;

use super::types::normalize;

/// Integer width backing an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// `i8` / `u8`.
    W8,
    /// `i16` / `u16`.
    W16,
    /// `i32` / `u32`.
    W32,
    /// `i64` / `u64`.
    W64
}

impl IntWidth {
    /// Width of a primitive integer type name, if it is one.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "i8" | "u8" => Some(Self::W8),
            "i16" | "u16" => Some(Self::W16),
            "i32" | "u32" => Some(Self::W32),
            "i64" | "u64" | "isize" | "usize" => Some(Self::W64),
            _ => None
        }
    }
}

/// What a property type turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// Anything that is not an enum.
    Scalar,
    /// A fieldless enum stored as an integer.
    Enum {
        /// Underlying width, `None` when unknown.
        width: Option<IntWidth>
    },
    /// A nullable wrapper around another resolved type.
    Nullable(Box<ResolvedType>)
}

impl ResolvedType {
    /// Enum width, looking through nullable wrappers.
    ///
    /// `Some(None)` is an enum with an unknown width.
    #[must_use]
    pub fn enum_width(&self) -> Option<Option<IntWidth>> {
        match self {
            Self::Scalar => None,
            Self::Enum {
                width
            } => Some(*width),
            Self::Nullable(inner) => inner.enum_width()
        }
    }
}

/// Semantic type lookup used by the extractor.
pub trait TypeOracle {
    /// Resolve a declared type, nullability marker already stripped.
    fn resolve(&self, type_text: &str) -> ResolvedType;
}

/// Oracle that knows no enums.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarOracle;

impl TypeOracle for ScalarOracle {
    fn resolve(&self, _type_text: &str) -> ResolvedType {
        ResolvedType::Scalar
    }
}

/// Oracle backed by explicit enum declarations.
#[derive(Debug, Clone, Default)]
pub struct EnumHints {
    enums: HashMap<String, Option<IntWidth>>
}

impl EnumHints {
    /// Create an empty hint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `type_text` as an enum with the given width.
    pub fn insert(&mut self, type_text: &str, width: Option<IntWidth>) {
        self.enums.insert(normalize(type_text), width);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_enum(mut self, type_text: &str, width: Option<IntWidth>) -> Self {
        self.insert(type_text, width);
        self
    }

    /// Whether no enum was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

impl TypeOracle for EnumHints {
    fn resolve(&self, type_text: &str) -> ResolvedType {
        match self.enums.get(&normalize(type_text)) {
            Some(&width) => ResolvedType::Enum {
                width
            },
            None => ResolvedType::Scalar
        }
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn resolve(&self, type_text: &str) -> ResolvedType {
        (**self).resolve(type_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_resolve_case_insensitively() {
        let hints = EnumHints::new().with_enum("Status", Some(IntWidth::W16));
        assert_eq!(
            hints.resolve("status"),
            ResolvedType::Enum {
                width: Some(IntWidth::W16)
            }
        );
        assert_eq!(hints.resolve("String"), ResolvedType::Scalar);
    }

    #[test]
    fn nullable_enum_width() {
        let ty = ResolvedType::Nullable(Box::new(ResolvedType::Enum {
            width: None
        }));
        assert_eq!(ty.enum_width(), Some(None));
        assert_eq!(ResolvedType::Scalar.enum_width(), None);
    }

    #[test]
    fn width_from_primitive_names() {
        assert_eq!(IntWidth::from_type_name("u8"), Some(IntWidth::W8));
        assert_eq!(IntWidth::from_type_name("i64"), Some(IntWidth::W64));
        assert_eq!(IntWidth::from_type_name("f32"), None);
    }
}
