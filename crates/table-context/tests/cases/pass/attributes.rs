// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use table_context::Table;

#[derive(Debug, Clone, Copy, Default)]
pub enum Role {
    #[default]
    Member,
    Admin
}

impl TryFrom<i32> for Role {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Member),
            1 => Ok(Self::Admin),
            _ => Err(())
        }
    }
}

#[derive(Debug, Clone, Default, Table)]
#[table("memberships")]
#[table_unique(team_id, nameof(r#type))]
pub(crate) struct Membership {
    #[primary_key]
    #[column_name("membership_id")]
    pub id:      i64,
    #[foreign_key("teams", "id")]
    pub team_id: i64,
    #[varchar(32)]
    pub nick:    Option<String>,
    pub r#type:  u8,
    #[enumeration]
    pub role:    Role,
    pub joined:  NaiveDate,
    pub score:   Option<f64>,
    #[skip]
    pub dirty:   bool
}

fn main() {
    fn assert_trait<T: MembershipTableContextBase>() {}
    let _ = assert_trait::<Memberships>;
}

struct Memberships(NoConnection);

struct NoConnection;

impl table_context::DbConnection for NoConnection {
    fn create_command(&self) -> Box<dyn table_context::DbCommand + '_> {
        unimplemented!()
    }
}

impl MembershipTableContextBase for Memberships {
    type Connection = NoConnection;

    fn new(connection: NoConnection) -> Self {
        Self(connection)
    }

    fn connection(&self) -> &NoConnection {
        &self.0
    }
}
