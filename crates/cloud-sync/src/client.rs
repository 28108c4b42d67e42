//! Client for the whole-snapshot state endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lifeplan_core::snapshot::StateSnapshot;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::{CloudSyncError, Result};
use crate::session::SessionContext;
use crate::types::{PushRequest, PushResponse, SnapshotTransport, StatePayload};

/// Default timeout for sync requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the shared secret.
pub(crate) const ACCESS_CODE_HEADER: &str = "x-access-code";

/// Talks to `GET/PUT {base_url}/api/state`. Both operations return a typed
/// error on any non-success status or transport failure; callers decide to
/// stay on local state, nothing is retried here.
pub struct SnapshotClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl SnapshotClient {
    pub fn new(base_url: &str, session: Arc<SessionContext>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(SnapshotClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn state_url(&self) -> String {
        format!("{}/api/state", self.base_url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let code = self
            .session
            .access_code()
            .ok_or(CloudSyncError::Unauthenticated)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCESS_CODE_HEADER,
            HeaderValue::from_str(&code)
                .map_err(|_| CloudSyncError::api(0, "access code is not a valid header value"))?,
        );
        Ok(headers)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("state endpoint response ({}): {} bytes", status, body.len());

        if !status.is_success() {
            return Err(CloudSyncError::api(status.as_u16(), body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SnapshotTransport for SnapshotClient {
    /// Fetches the server-side snapshot. Called once at session start; a
    /// failure leaves the local state untouched.
    async fn pull(&self) -> Result<StatePayload> {
        let response = self
            .client
            .get(self.state_url())
            .headers(self.headers()?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Replaces the server-side snapshot with the full local one.
    async fn push(&self, snapshot: StateSnapshot) -> Result<()> {
        let response = self
            .client
            .put(self.state_url())
            .headers(self.headers()?)
            .json(&PushRequest { state: snapshot })
            .send()
            .await?;
        let ack: PushResponse = Self::parse_response(response).await?;
        if !ack.ok {
            return Err(CloudSyncError::api(200, "push was not acknowledged"));
        }
        Ok(())
    }
}
