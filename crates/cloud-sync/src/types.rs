//! Wire payloads and the transport seam for the state sync endpoint.

use async_trait::async_trait;
use lifeplan_core::snapshot::StateSnapshot;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body of `GET /api/state`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePayload {
    #[serde(default)]
    pub state: StateSnapshot,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `PUT /api/state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    pub state: StateSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushResponse {
    #[serde(default)]
    pub ok: bool,
}

/// Transport used by the scheduler; [`crate::SnapshotClient`] is the real
/// implementation, tests substitute their own.
#[async_trait]
pub trait SnapshotTransport: Send + Sync {
    async fn pull(&self) -> Result<StatePayload>;
    async fn push(&self, snapshot: StateSnapshot) -> Result<()>;
}
