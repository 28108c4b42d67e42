//! Database models for the brand lifecycle tables.
//!
//! The revenue log and the current-brand document are stored as JSON text;
//! malformed stored JSON reads as the empty value rather than failing the
//! row.

use std::collections::BTreeMap;

use diesel::prelude::*;
use lifeplan_core::brands::{ArchivedBrand, LiveBrand, PipelineBrand};
use rust_decimal::Decimal;

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::brands_pipeline)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PipelineBrandDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub planned_start_date: String,
    pub source_idea: String,
    pub sort_order: i32,
    pub created_at: String,
}

impl From<PipelineBrandDB> for PipelineBrand {
    fn from(db: PipelineBrandDB) -> Self {
        PipelineBrand {
            id: db.id,
            name: db.name,
            description: db.description,
            category: db.category,
            planned_start_date: db.planned_start_date,
            source_idea: db.source_idea,
            sort_order: db.sort_order,
            created_at: db.created_at,
        }
    }
}

impl From<PipelineBrand> for PipelineBrandDB {
    fn from(brand: PipelineBrand) -> Self {
        PipelineBrandDB {
            id: brand.id,
            name: brand.name,
            description: brand.description,
            category: brand.category,
            planned_start_date: brand.planned_start_date,
            source_idea: brand.source_idea,
            sort_order: brand.sort_order,
            created_at: brand.created_at,
        }
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::brands_current)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrentBrandDB {
    pub id: String,
    pub data: String,
    pub updated_at: String,
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::brands_live)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct LiveBrandDB {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub revenue_log: String,
    pub status: String,
    pub phase: Option<i32>,
    pub source: Option<String>,
    pub created_at: String,
}

impl From<LiveBrandDB> for LiveBrand {
    fn from(db: LiveBrandDB) -> Self {
        let revenue_log: BTreeMap<String, Decimal> =
            serde_json::from_str(&db.revenue_log).unwrap_or_default();
        LiveBrand {
            id: db.id,
            name: db.name,
            start_date: db.start_date,
            revenue_log,
            status: db.status,
            phase: db.phase,
            source: db.source,
            created_at: db.created_at,
        }
    }
}

impl From<LiveBrand> for LiveBrandDB {
    fn from(brand: LiveBrand) -> Self {
        LiveBrandDB {
            id: brand.id,
            name: brand.name,
            start_date: brand.start_date,
            revenue_log: serde_json::to_string(&brand.revenue_log).unwrap_or_else(|_| "{}".into()),
            status: brand.status,
            phase: brand.phase,
            source: brand.source,
            created_at: brand.created_at,
        }
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::brands_archive)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArchivedBrandDB {
    pub id: String,
    pub name: String,
    pub reason: String,
    pub closed_date: String,
    pub total_revenue: String,
    pub summary: String,
    pub created_at: String,
}

impl From<ArchivedBrandDB> for ArchivedBrand {
    fn from(db: ArchivedBrandDB) -> Self {
        ArchivedBrand {
            id: db.id,
            name: db.name,
            reason: db.reason,
            closed_date: db.closed_date,
            total_revenue: db.total_revenue.parse().unwrap_or_default(),
            summary: db.summary,
            created_at: db.created_at,
        }
    }
}

impl From<ArchivedBrand> for ArchivedBrandDB {
    fn from(brand: ArchivedBrand) -> Self {
        ArchivedBrandDB {
            id: brand.id,
            name: brand.name,
            reason: brand.reason,
            closed_date: brand.closed_date,
            total_revenue: brand.total_revenue.to_string(),
            summary: brand.summary,
            created_at: brand.created_at,
        }
    }
}
