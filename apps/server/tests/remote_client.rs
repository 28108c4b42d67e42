//! End-to-end tests driving the sync clients against a listening server.

use std::sync::Arc;

use lifeplan_cloud_sync::{CollectionsClient, SessionContext, SnapshotClient, SyncScheduler};
use lifeplan_core::ideas::{Idea, IdeaRepositoryTrait};
use lifeplan_core::snapshot::StateSnapshot;
use lifeplan_core::store::{LocalStoreTrait, MemoryLocalStore};
use lifeplan_core::tracking::TrackingRepositoryTrait;
use lifeplan_server::api::app_router;
use lifeplan_server::build_state;
use lifeplan_server::config::Config;
use tempfile::TempDir;

const ACCESS_CODE: &str = "e2e-code";

async fn spawn_server() -> (String, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("e2e.db").to_string_lossy().into_owned(),
        access_code: ACCESS_CODE.to_string(),
    };
    let state = build_state(&config).await.unwrap();
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), tmp)
}

fn session() -> Arc<SessionContext> {
    let session = Arc::new(SessionContext::new(ACCESS_CODE));
    assert!(session.login(ACCESS_CODE));
    session
}

#[tokio::test]
async fn snapshot_push_then_pull_round_trips() {
    let (base_url, _tmp) = spawn_server().await;
    let session = session();
    let client = Arc::new(SnapshotClient::new(&base_url, Arc::clone(&session)).unwrap());

    // Device A accumulates local state and pushes it.
    let device_a = Arc::new(MemoryLocalStore::new());
    device_a
        .write_raw("lifeplan:fallback:ideas", r#"[{"id":"i1"}]"#)
        .await
        .unwrap();
    device_a
        .write_raw("lifeplan:fallback:connections", r#"{"2026-04-02":{"count":3}}"#)
        .await
        .unwrap();
    let scheduler_a = SyncScheduler::new(
        Arc::clone(&client) as _,
        Arc::clone(&device_a) as _,
        Arc::clone(&session),
    );
    assert!(scheduler_a.push_now().await);

    // Device B starts empty and pulls the snapshot at session start.
    let device_b = Arc::new(MemoryLocalStore::new());
    let scheduler_b = SyncScheduler::new(
        Arc::clone(&client) as _,
        Arc::clone(&device_b) as _,
        Arc::clone(&session),
    );
    assert!(scheduler_b.pull_now().await);

    let a: StateSnapshot = device_a.collect_snapshot().unwrap();
    let b: StateSnapshot = device_b.collect_snapshot().unwrap();
    assert_eq!(a, b);
    assert_eq!(
        b.get("lifeplan:fallback:ideas"),
        Some(r#"[{"id":"i1"}]"#)
    );
}

#[tokio::test]
async fn unauthenticated_clients_cannot_sync() {
    let (base_url, _tmp) = spawn_server().await;
    let session = Arc::new(SessionContext::new(ACCESS_CODE));
    // No login: the client refuses before any request is made.
    let client = SnapshotClient::new(&base_url, Arc::clone(&session)).unwrap();
    let store = Arc::new(MemoryLocalStore::new());
    let scheduler = SyncScheduler::new(Arc::new(client) as _, store as _, session);

    assert!(!scheduler.push_now().await);
    assert!(!scheduler.pull_now().await);
}

#[tokio::test]
async fn collections_client_serves_as_remote_repository() {
    let (base_url, _tmp) = spawn_server().await;
    let remote = CollectionsClient::new(&base_url, session()).unwrap();

    let idea = Idea {
        id: "idea-7".into(),
        text: "remote first".into(),
        category: "saas".into(),
        linked_brand: None,
        created_at: "2026-04-02T09:00:00Z".into(),
    };
    remote.insert_idea(idea.clone()).await.unwrap();
    let listed = remote.list_ideas().await.unwrap();
    assert_eq!(listed, vec![idea]);

    // Range queries come back keyed by date, absent days omitted.
    let range = remote
        .timetable_range(&["2026-04-01".to_string(), "2026-04-02".to_string()])
        .await
        .unwrap();
    assert!(range.is_empty());
}
