// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod db {
    pub use table_context::*;
}

use uuid::Uuid;

#[derive(table_context::Table)]
#[table(name = "sessions", runtime = "crate::db")]
pub struct Session {
    #[primary_key]
    pub id:    Uuid,
    pub owner: Uuid,
    pub label: Option<Vec<String>>
}

pub struct Sessions<C>(C);

impl<C: db::DbConnection> SessionTableContextBase for Sessions<C> {
    type Connection = C;

    fn new(connection: C) -> Self {
        Self(connection)
    }

    fn connection(&self) -> &C {
        &self.0
    }

    fn uuid_to_string_converter(&self, value: &Uuid) -> String {
        value.to_string()
    }

    fn string_to_uuid_converter(&self, value: String) -> Uuid {
        value.parse().unwrap_or_default()
    }

    fn vec_of_string_to_string_converter(&self, value: &Vec<String>) -> String {
        value.join(",")
    }

    fn string_to_vec_of_string_converter(&self, value: String) -> Vec<String> {
        value.split(',').map(str::to_string).collect()
    }
}

fn main() {}
