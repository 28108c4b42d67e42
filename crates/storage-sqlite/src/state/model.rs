//! Database models for the state tables.

use diesel::prelude::*;

/// One row of the local key-value store.
#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::local_state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LocalStateDB {
    pub key: String,
    pub value: String,
}

/// The single server-side snapshot document.
#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::cloud_state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CloudStateDB {
    pub id: String,
    pub state: String,
    pub updated_at: Option<String>,
}
