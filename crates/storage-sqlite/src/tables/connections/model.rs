//! Database model for connection counts.

use diesel::prelude::*;
use lifeplan_core::connections::ConnectionLog;

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::connections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConnectionLogDB {
    pub date: String,
    pub count: i64,
    pub updated_at: Option<String>,
}

impl ConnectionLogDB {
    pub fn from_log(date: &str, log: ConnectionLog) -> Self {
        ConnectionLogDB {
            date: date.to_string(),
            count: log.count,
            updated_at: log.updated_at,
        }
    }

    pub fn into_log(self) -> ConnectionLog {
        ConnectionLog {
            count: self.count,
            updated_at: self.updated_at,
        }
    }
}
