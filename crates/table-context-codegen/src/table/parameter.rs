// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `create_parameter` helper every accessor binds through.

use proc_macro2::TokenStream;
use quote::quote;

use super::context::Context;

impl Context<'_> {
    /// Provided trait method building a named parameter from a command.
    ///
    /// `None` values reach it already mapped to `DbValue::Null` by
    /// `ToParameter`.
    #[must_use]
    pub fn parameter_helper(&self) -> TokenStream {
        let runtime = self.runtime;

        quote! {
            /// Create a parameter on `command` carrying `name` and `value`.
            fn create_parameter(
                &self,
                command: &dyn #runtime::DbCommand,
                name: &str,
                value: #runtime::DbValue
            ) -> #runtime::DbParameter {
                let mut parameter = command.create_parameter();
                parameter.set_name(name);
                parameter.set_value(value);
                parameter
            }
        }
    }
}
