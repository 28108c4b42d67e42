//! Remote collections backend.
//!
//! Implements the core repository traits over the server's REST collections
//! API, one trait per domain. Failures surface as `Error::Remote`, which
//! the domain services catch and replay against the local store.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lifeplan_core::brands::{
    ArchivedBrand, BrandRepositoryTrait, CurrentBrand, LiveBrand, PipelineBrand,
    PipelineBrandUpdate,
};
use lifeplan_core::connections::{ConnectionLog, ConnectionRepositoryTrait};
use lifeplan_core::errors::{Error, Result};
use lifeplan_core::ideas::{Idea, IdeaRepositoryTrait, IdeaUpdate};
use lifeplan_core::planning::{
    DailyPlan, MonthlyPlan, MonthlyPlanRecord, PlanningRepositoryTrait, WeeklyPlan,
};
use lifeplan_core::schedule::{
    MeetingItem, MeetingItemUpdate, ScheduleRepositoryTrait, WorkItem, WorkItemUpdate,
};
use lifeplan_core::settings::{Settings, SettingsRepositoryTrait};
use lifeplan_core::tracking::{
    DayLogs, ProtocolLogEntry, RangeLogs, TimetableLogEntry, TrackingRepositoryTrait,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::client::ACCESS_CODE_HEADER;
use crate::error::CloudSyncError;
use crate::session::SessionContext;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One client serves every domain; the domain services each hold it behind
/// their own repository trait.
pub struct CollectionsClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl CollectionsClient {
    pub fn new(base_url: &str, session: Arc<SessionContext>) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(CollectionsClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/collections{}", self.base_url, path)
    }

    fn headers(&self) -> crate::error::Result<HeaderMap> {
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

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let run = async {
            let mut request = self
                .client
                .request(method, self.url(path))
                .headers(self.headers()?);
            if let Some(body) = body {
                request = request.json(body);
            }
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            if !status.is_success() {
                return Err(CloudSyncError::api(status.as_u16(), text));
            }
            Ok(serde_json::from_str::<T>(&text)?)
        };
        run.await.map_err(Error::from)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    async fn send<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        let _: serde_json::Value = self.request(method, path, Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let _: serde_json::Value = self.request::<(), _>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

#[async_trait]
impl IdeaRepositoryTrait for CollectionsClient {
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        self.get("/ideas").await
    }

    async fn insert_idea(&self, idea: Idea) -> Result<()> {
        self.send(Method::POST, "/ideas", &idea).await
    }

    async fn update_idea(&self, id: &str, update: IdeaUpdate) -> Result<()> {
        self.send(Method::PATCH, &format!("/ideas/{}", id), &update)
            .await
    }

    async fn delete_idea(&self, id: &str) -> Result<()> {
        self.delete(&format!("/ideas/{}", id)).await
    }
}

#[async_trait]
impl BrandRepositoryTrait for CollectionsClient {
    async fn get_current(&self) -> Result<Option<CurrentBrand>> {
        self.get("/brands/current").await
    }

    async fn save_current(&self, brand: CurrentBrand) -> Result<()> {
        self.send(Method::PUT, "/brands/current", &brand).await
    }

    async fn clear_current(&self) -> Result<()> {
        self.delete("/brands/current").await
    }

    async fn list_pipeline(&self) -> Result<Vec<PipelineBrand>> {
        self.get("/brands/pipeline").await
    }

    async fn insert_pipeline(&self, brand: PipelineBrand) -> Result<()> {
        self.send(Method::POST, "/brands/pipeline", &brand).await
    }

    async fn update_pipeline(&self, id: &str, update: PipelineBrandUpdate) -> Result<()> {
        self.send(Method::PATCH, &format!("/brands/pipeline/{}", id), &update)
            .await
    }

    async fn delete_pipeline(&self, id: &str) -> Result<()> {
        self.delete(&format!("/brands/pipeline/{}", id)).await
    }

    async fn list_live(&self) -> Result<Vec<LiveBrand>> {
        self.get("/brands/live").await
    }

    async fn insert_live(&self, brand: LiveBrand) -> Result<()> {
        self.send(Method::POST, "/brands/live", &brand).await
    }

    async fn set_live_revenue(&self, id: &str, date_key: &str, amount: Decimal) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("/brands/live/{}/revenue", id),
            &json!({ "dateKey": date_key, "amount": amount }),
        )
        .await
    }

    async fn delete_live(&self, id: &str) -> Result<()> {
        self.delete(&format!("/brands/live/{}", id)).await
    }

    async fn list_archive(&self) -> Result<Vec<ArchivedBrand>> {
        self.get("/brands/archive").await
    }

    async fn insert_archive(&self, brand: ArchivedBrand) -> Result<()> {
        self.send(Method::POST, "/brands/archive", &brand).await
    }
}

#[async_trait]
impl PlanningRepositoryTrait for CollectionsClient {
    async fn get_monthly(&self, month_key: &str) -> Result<Option<MonthlyPlan>> {
        self.get(&format!("/planning/monthly/{}", month_key)).await
    }

    async fn upsert_monthly(&self, month_key: &str, plan: MonthlyPlan) -> Result<()> {
        self.send(Method::PUT, &format!("/planning/monthly/{}", month_key), &plan)
            .await
    }

    async fn get_weekly(&self, week_key: &str) -> Result<Option<WeeklyPlan>> {
        self.get(&format!("/planning/weekly/{}", week_key)).await
    }

    async fn upsert_weekly(&self, week_key: &str, plan: WeeklyPlan) -> Result<()> {
        self.send(Method::PUT, &format!("/planning/weekly/{}", week_key), &plan)
            .await
    }

    async fn get_daily(&self, date_key: &str) -> Result<Option<DailyPlan>> {
        self.get(&format!("/planning/daily/{}", date_key)).await
    }

    async fn upsert_daily(&self, date_key: &str, plan: DailyPlan) -> Result<()> {
        self.send(Method::PUT, &format!("/planning/daily/{}", date_key), &plan)
            .await
    }

    async fn list_monthly(&self) -> Result<Vec<MonthlyPlanRecord>> {
        self.get("/planning/monthly").await
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for CollectionsClient {
    async fn list_work(&self) -> Result<Vec<WorkItem>> {
        self.get("/schedule/work").await
    }

    async fn insert_work(&self, item: WorkItem) -> Result<()> {
        self.send(Method::POST, "/schedule/work", &item).await
    }

    async fn update_work(&self, id: &str, update: WorkItemUpdate) -> Result<()> {
        self.send(Method::PATCH, &format!("/schedule/work/{}", id), &update)
            .await
    }

    async fn delete_work(&self, id: &str) -> Result<()> {
        self.delete(&format!("/schedule/work/{}", id)).await
    }

    async fn list_meetings(&self) -> Result<Vec<MeetingItem>> {
        self.get("/schedule/meetings").await
    }

    async fn insert_meeting(&self, item: MeetingItem) -> Result<()> {
        self.send(Method::POST, "/schedule/meetings", &item).await
    }

    async fn update_meeting(&self, id: &str, update: MeetingItemUpdate) -> Result<()> {
        self.send(Method::PATCH, &format!("/schedule/meetings/{}", id), &update)
            .await
    }

    async fn delete_meeting(&self, id: &str) -> Result<()> {
        self.delete(&format!("/schedule/meetings/{}", id)).await
    }
}

#[async_trait]
impl ConnectionRepositoryTrait for CollectionsClient {
    async fn get_connections(&self, date_key: &str) -> Result<Option<ConnectionLog>> {
        self.get(&format!("/connections/{}", date_key)).await
    }

    async fn upsert_connections(&self, date_key: &str, log: ConnectionLog) -> Result<()> {
        self.send(Method::PUT, &format!("/connections/{}", date_key), &log)
            .await
    }

    async fn delete_connections(&self, date_key: &str) -> Result<()> {
        self.delete(&format!("/connections/{}", date_key)).await
    }

    async fn connections_range(
        &self,
        date_keys: &[String],
    ) -> Result<BTreeMap<String, ConnectionLog>> {
        self.request(
            Method::POST,
            "/connections/range",
            Some(&json!({ "dates": date_keys })),
        )
        .await
    }
}

#[async_trait]
impl TrackingRepositoryTrait for CollectionsClient {
    async fn timetable_day(&self, date_key: &str) -> Result<DayLogs<TimetableLogEntry>> {
        self.get(&format!("/tracking/timetable/{}", date_key)).await
    }

    async fn upsert_timetable(
        &self,
        date_key: &str,
        task_id: &str,
        entry: TimetableLogEntry,
    ) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("/tracking/timetable/{}/{}", date_key, task_id),
            &entry,
        )
        .await
    }

    async fn timetable_range(&self, date_keys: &[String]) -> Result<RangeLogs<TimetableLogEntry>> {
        self.request(
            Method::POST,
            "/tracking/timetable/range",
            Some(&json!({ "dates": date_keys })),
        )
        .await
    }

    async fn clear_timetable_day(&self, date_key: &str) -> Result<()> {
        self.delete(&format!("/tracking/timetable/{}", date_key)).await
    }

    async fn protocol_day(&self, date_key: &str) -> Result<DayLogs<ProtocolLogEntry>> {
        self.get(&format!("/tracking/protocol/{}", date_key)).await
    }

    async fn upsert_protocol(
        &self,
        date_key: &str,
        item_id: &str,
        entry: ProtocolLogEntry,
    ) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("/tracking/protocol/{}/{}", date_key, item_id),
            &entry,
        )
        .await
    }

    async fn protocol_range(&self, date_keys: &[String]) -> Result<RangeLogs<ProtocolLogEntry>> {
        self.request(
            Method::POST,
            "/tracking/protocol/range",
            Some(&json!({ "dates": date_keys })),
        )
        .await
    }

    async fn clear_protocol_day(&self, date_key: &str) -> Result<()> {
        self.delete(&format!("/tracking/protocol/{}", date_key)).await
    }
}

#[async_trait]
impl SettingsRepositoryTrait for CollectionsClient {
    async fn get_settings(&self) -> Result<Option<Settings>> {
        self.get("/settings").await
    }

    async fn upsert_settings(&self, settings: Settings) -> Result<()> {
        self.send(Method::PUT, "/settings", &settings).await
    }
}
