//! Database models for ideas.

use diesel::prelude::*;
use lifeplan_core::ideas::Idea;

// treat_none_as_null so clearing the brand link persists as NULL instead
// of being skipped by the changeset.
#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::ideas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct IdeaDB {
    pub id: String,
    pub text: String,
    pub category: String,
    pub linked_brand: Option<String>,
    pub created_at: String,
}

impl From<IdeaDB> for Idea {
    fn from(db: IdeaDB) -> Self {
        Idea {
            id: db.id,
            text: db.text,
            category: db.category,
            linked_brand: db.linked_brand,
            created_at: db.created_at,
        }
    }
}

impl From<Idea> for IdeaDB {
    fn from(idea: Idea) -> Self {
        IdeaDB {
            id: idea.id,
            text: idea.text,
            category: idea.category,
            linked_brand: idea.linked_brand,
            created_at: idea.created_at,
        }
    }
}
