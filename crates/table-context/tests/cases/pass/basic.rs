// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use table_context::{DbConnection, Table};

#[derive(Debug, Clone, Table)]
pub struct User {
    #[primary_key]
    pub id:    i32,
    pub name:  String,
    #[unique]
    pub email: String
}

pub struct Users<C> {
    connection: C
}

impl<C: DbConnection> UserTableContextBase for Users<C> {
    type Connection = C;

    fn new(connection: C) -> Self {
        Self {
            connection
        }
    }

    fn connection(&self) -> &C {
        &self.connection
    }
}

async fn roundtrip<T: UserTableContextBase>(
    users: &T,
    user: &User
) -> Result<Option<User>, table_context::DbError> {
    users.create_table_if_not_exists().await?;
    users.upsert(user).await?;
    users.find(user.id).await
}

struct NoConnection;

impl DbConnection for NoConnection {
    fn create_command(&self) -> Box<dyn table_context::DbCommand + '_> {
        unimplemented!()
    }
}

fn main() {
    let _ = roundtrip::<Users<NoConnection>>;
}
