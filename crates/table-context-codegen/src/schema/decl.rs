// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsed class declarations.
//!
//! The extractor never looks at syntax trees. Front ends (the derive macro,
//! a build script reading another declaration format) lower what they parsed
//! into these plain values first.
//!
//! ```rust,ignore
//! let decl = ClassDecl::new("User")
//!     .with_property(
//!         PropertyDecl::new("id", "i32")
//!             .with_annotation(Annotation::new("primary_key"))
//!     )
//!     .with_property(PropertyDecl::new("email", "Option<String>"));
//! ```

use convert_case::{Case, Casing};

/// One class to generate an access layer for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class identifier.
    pub name: String,

    /// Visibility given to generated items (`pub`, `pub(crate)`, empty for
    /// private).
    pub visibility: String,

    /// Class level annotations in declaration order.
    pub annotations: Vec<Annotation>,

    /// Properties in declaration order.
    pub properties: Vec<PropertyDecl>
}

impl ClassDecl {
    /// Create a class with no annotations or properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            visibility:  "pub".to_string(),
            annotations: Vec::new(),
            properties:  Vec::new()
        }
    }

    /// Override the visibility of generated items.
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Append a class annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    /// Annotations matching `name` (see [`Annotation::is`]).
    pub fn annotations_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Annotation> {
        self.annotations.iter().filter(move |a| a.is(name))
    }
}

/// Accessor kinds declared on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessors {
    /// Readable.
    pub get: bool,

    /// Writable after construction.
    pub set: bool,

    /// Writable during construction only.
    pub init: bool
}

impl Accessors {
    /// Readable and writable, the shape of every public Rust field.
    pub const READ_WRITE: Self = Self {
        get:  true,
        set:  true,
        init: false
    };

    /// Whether the property can both be read and written.
    #[must_use]
    pub const fn is_column(self) -> bool {
        self.get && (self.set || self.init)
    }
}

impl Default for Accessors {
    fn default() -> Self {
        Self::READ_WRITE
    }
}

/// One declared property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Property identifier, possibly a raw identifier (`r#type`).
    pub name: String,

    /// Declared type text.
    pub declared_type: String,

    /// Nullability reported by the front end.
    pub nullable: bool,

    /// Declared accessors.
    pub accessors: Accessors,

    /// Property annotations in declaration order.
    pub annotations: Vec<Annotation>
}

impl PropertyDecl {
    /// Create a read/write property with no annotations.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            declared_type: declared_type.into(),
            nullable:      false,
            accessors:     Accessors::default(),
            annotations:   Vec::new()
        }
    }

    /// Append an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Override the accessor kinds.
    #[must_use]
    pub fn with_accessors(mut self, accessors: Accessors) -> Self {
        self.accessors = accessors;
        self
    }

    /// Mark as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// First annotation matching `name`.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.is(name))
    }

    /// Whether any annotation matches `name`.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }
}

/// An annotation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArg {
    /// String literal.
    Str(String),
    /// Integer literal, kept as written.
    Int(String),
    /// Name-of-property reference: `nameof(x)` or a bare identifier `x`.
    NameOf(String),
    /// Any other expression, stringified.
    Expr(String)
}

impl AnnotationArg {
    /// Text the argument stands for.
    ///
    /// String literals and name-of references resolve to the same string.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Str(s) | Self::Int(s) | Self::NameOf(s) | Self::Expr(s) => s
        }
    }
}

/// A class or property annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written.
    pub name: String,

    /// Positional arguments.
    pub positional: Vec<AnnotationArg>,

    /// Named arguments (`name = value`).
    pub named: Vec<(String, AnnotationArg)>
}

impl Annotation {
    /// Create an annotation without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            positional: Vec::new(),
            named:      Vec::new()
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, arg: AnnotationArg) -> Self {
        self.positional.push(arg);
        self
    }

    /// Append a named argument.
    #[must_use]
    pub fn named_arg(mut self, name: impl Into<String>, arg: AnnotationArg) -> Self {
        self.named.push((name.into(), arg));
        self
    }

    /// Format-insensitive name comparison.
    ///
    /// `PrimaryKey`, `PrimaryKeyAttribute` and `primary_key` all match
    /// `primary_key`.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        canonical_name(&self.name) == canonical_name(name)
    }

    /// Named argument lookup, format-insensitive like [`is`](Self::is).
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&AnnotationArg> {
        let wanted = canonical_name(name);
        self.named
            .iter()
            .find(|(n, _)| canonical_name(n) == wanted)
            .map(|(_, arg)| arg)
    }

    /// Named argument `name`, else the positional argument at `index`.
    #[must_use]
    pub fn named_or_positional(&self, name: &str, index: usize) -> Option<&AnnotationArg> {
        self.named(name).or_else(|| self.positional.get(index))
    }
}

fn canonical_name(name: &str) -> String {
    let last = name.rsplit("::").next().unwrap_or(name);
    let snake = last.to_case(Case::Snake);
    match snake.strip_suffix("_attribute") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => snake
    }
}
