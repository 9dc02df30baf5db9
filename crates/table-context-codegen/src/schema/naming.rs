// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversion bridge naming.
//!
//! A property type without a native column representation travels through a
//! pair of bridges named after both sides:
//!
//! | Property type | Column host type | To | From |
//! |---------------|------------------|----|------|
//! | `Uuid` | `String` | `UuidToStringConverter` | `StringToUuidConverter` |
//! | `Option<Uuid>` | `String` | `UuidToStringConverter` | `StringToUuidConverter` |
//! | `Vec<Tag>` | `String` | `VecOfTagToStringConverter` | `StringToVecOfTagConverter` |
//! | `Point[]` | `String` | `PointArrayToStringConverter` | `StringToPointArrayConverter` |
//!
//! The Rust method identifiers are the snake case forms
//! (`uuid_to_string_converter`).

use convert_case::{Case, Casing};
use quote::format_ident;
use syn::Ident;

use super::context::strip_nullable;

/// Names of one bridge pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionNames {
    /// Property → column (`UuidToStringConverter`).
    pub to: String,

    /// Column → property (`StringToUuidConverter`).
    pub from: String
}

impl ConversionNames {
    /// Method identifier of the property → column bridge.
    #[must_use]
    pub fn to_ident(&self) -> Ident {
        format_ident!("{}", self.to.to_case(Case::Snake))
    }

    /// Method identifier of the column → property bridge.
    #[must_use]
    pub fn from_ident(&self) -> Ident {
        format_ident!("{}", self.from.to_case(Case::Snake))
    }
}

/// Name the bridge pair between `property_type` and `relational_host_type`.
#[must_use]
pub fn conversion_names(property_type: &str, relational_host_type: &str) -> ConversionNames {
    let a = sanitize(property_type);
    let b = sanitize(relational_host_type);
    ConversionNames {
        to:   format!("{a}To{b}Converter"),
        from: format!("{b}To{a}Converter")
    }
}

/// Type text folded into one UpperCamel segment.
///
/// Generic and path punctuation is spelled out (`<` as `Of`, `,` as `And`,
/// `::` as `Path`, `&` as `Ref`, `(` as `Tuple`) so that `Vec<Tag>` and
/// `VecTag` stay apart.
fn sanitize(type_text: &str) -> String {
    let (base, _) = strip_nullable(type_text);
    let base = base.replace("[]", "Array").replace("::", ":");

    let mut out = String::new();
    let mut segment = String::new();
    for c in base.chars() {
        if c.is_alphanumeric() {
            segment.push(c);
            continue;
        }
        out.push_str(&capitalize(&segment));
        segment.clear();
        out.push_str(match c {
            '<' => "Of",
            ',' => "And",
            ':' => "Path",
            '&' => "Ref",
            '(' => "Tuple",
            _ => ""
        });
    }
    out.push_str(&capitalize(&segment));
    out
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
