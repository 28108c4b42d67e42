//! Database model for the settings document.

use diesel::prelude::*;

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::settings_app)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingsDB {
    pub id: String,
    pub data: String,
    pub updated_at: String,
}
