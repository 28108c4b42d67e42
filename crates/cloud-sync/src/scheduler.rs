//! Debounced snapshot push scheduling.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use lifeplan_core::constants::{ONLINE_FLUSH_MS, PUSH_DEBOUNCE_MS};
use lifeplan_core::store::{LocalStoreTrait, SyncNotifier};
use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::session::SessionContext;
use crate::types::SnapshotTransport;

/// Coalesces bursts of local writes into one outbound push.
///
/// A single timer slot exists per scheduler: scheduling again cancels the
/// pending push and restarts the window (trailing debounce). An in-flight
/// push is never cancelled. Failed pushes are logged and dropped; the next
/// local write schedules a fresh attempt.
pub struct SyncScheduler {
    transport: Arc<dyn SnapshotTransport>,
    store: Arc<dyn LocalStoreTrait>,
    session: Arc<SessionContext>,
    pending: Mutex<Option<JoinHandle<()>>>,
    debounce: Duration,
}

impl SyncScheduler {
    pub fn new(
        transport: Arc<dyn SnapshotTransport>,
        store: Arc<dyn LocalStoreTrait>,
        session: Arc<SessionContext>,
    ) -> Self {
        SyncScheduler {
            transport,
            store,
            session,
            pending: Mutex::new(None),
            debounce: Duration::from_millis(PUSH_DEBOUNCE_MS),
        }
    }

    /// Restarts the single push timer. No-op while logged out.
    pub fn schedule(&self, delay: Duration) {
        if !self.session.is_authenticated() {
            return;
        }

        let transport = Arc::clone(&self.transport);
        let store = Arc::clone(&self.store);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            push_snapshot(&*transport, &*store).await;
        });

        let mut slot = self.pending.lock().unwrap();
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Pushes the current snapshot immediately, bypassing the debounce.
    pub async fn push_now(&self) -> bool {
        if !self.session.is_authenticated() {
            return false;
        }
        try_push(&*self.transport, &*self.store).await.is_ok()
    }

    /// Replaces the local namespaced state with the server-side snapshot.
    /// Called once at session start; any failure keeps the local state.
    pub async fn pull_now(&self) -> bool {
        if !self.session.is_authenticated() {
            return false;
        }
        match self.transport.pull().await {
            Ok(payload) => {
                let mut snapshot = payload.state;
                snapshot.retain_trackable();
                match self.store.apply_snapshot(&snapshot).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("could not apply pulled snapshot: {}", e);
                        false
                    }
                }
            }
            Err(e) => {
                debug!("snapshot pull failed, staying on local state: {}", e);
                false
            }
        }
    }

    /// Network came back; flush whatever accumulated while offline after a
    /// short delay.
    pub fn notify_online(&self) {
        self.schedule(Duration::from_millis(ONLINE_FLUSH_MS));
    }

    /// Cancels any pending push. Called at logout.
    pub fn shutdown(&self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl SyncNotifier for SyncScheduler {
    fn schedule_push(&self) {
        self.schedule(self.debounce);
    }
}

async fn push_snapshot(transport: &dyn SnapshotTransport, store: &dyn LocalStoreTrait) {
    if let Err(e) = try_push(transport, store).await {
        // Dropped on purpose; the next write supersedes this attempt.
        warn!("snapshot push failed: {}", e);
    }
}

async fn try_push(
    transport: &dyn SnapshotTransport,
    store: &dyn LocalStoreTrait,
) -> std::result::Result<(), String> {
    let snapshot = store.collect_snapshot().map_err(|e| e.to_string())?;
    transport.push(snapshot).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use lifeplan_core::snapshot::StateSnapshot;
    use lifeplan_core::store::MemoryLocalStore;

    use super::*;
    use crate::error::Result;
    use crate::types::StatePayload;

    #[derive(Default)]
    struct CountingTransport {
        pushes: AtomicUsize,
        pulls: AtomicUsize,
    }

    #[async_trait]
    impl SnapshotTransport for CountingTransport {
        async fn pull(&self) -> Result<StatePayload> {
            self.pulls.fetch_add(1, Ordering::SeqCst);
            let mut state = StateSnapshot::new();
            state.insert("lifeplan:pulled", "1");
            state.insert("ignored:key", "1");
            Ok(StatePayload {
                state,
                updated_at: Some("2026-04-02T00:00:00Z".into()),
            })
        }

        async fn push(&self, _snapshot: StateSnapshot) -> Result<()> {
            self.pushes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn scheduler(
        session: Arc<SessionContext>,
    ) -> (SyncScheduler, Arc<CountingTransport>, Arc<MemoryLocalStore>) {
        let transport = Arc::new(CountingTransport::default());
        let store = Arc::new(MemoryLocalStore::new());
        let scheduler = SyncScheduler::new(
            Arc::clone(&transport) as Arc<dyn SnapshotTransport>,
            Arc::clone(&store) as Arc<dyn LocalStoreTrait>,
            session,
        );
        (scheduler, transport, store)
    }

    fn logged_in_session() -> Arc<SessionContext> {
        let session = Arc::new(SessionContext::new("code"));
        assert!(session.login("code"));
        session
    }

    #[tokio::test]
    async fn rescheduling_supersedes_the_pending_push() {
        let (scheduler, transport, _store) = scheduler(logged_in_session());

        scheduler.schedule(Duration::from_millis(30));
        scheduler.schedule(Duration::from_millis(30));
        scheduler.schedule(Duration::from_millis(30));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(transport.pushes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn nothing_is_pushed_while_logged_out() {
        let session = Arc::new(SessionContext::new("code"));
        let (scheduler, transport, _store) = scheduler(session);

        scheduler.schedule(Duration::from_millis(5));
        assert!(!scheduler.push_now().await);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(transport.pushes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn shutdown_cancels_the_pending_push() {
        let (scheduler, transport, _store) = scheduler(logged_in_session());

        scheduler.schedule(Duration::from_millis(30));
        scheduler.shutdown();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(transport.pushes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pull_applies_only_namespaced_keys() {
        let (scheduler, transport, store) = scheduler(logged_in_session());
        store.write_raw("other-app:keep", "x").await.unwrap();

        assert!(scheduler.pull_now().await);
        assert_eq!(transport.pulls.load(Ordering::SeqCst), 1);
        assert_eq!(store.read_raw("lifeplan:pulled").unwrap().as_deref(), Some("1"));
        assert_eq!(store.read_raw("ignored:key").unwrap(), None);
        assert_eq!(store.read_raw("other-app:keep").unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn push_now_sends_the_collected_snapshot() {
        let (scheduler, transport, store) = scheduler(logged_in_session());
        store.write_raw("lifeplan:a", "1").await.unwrap();

        assert!(scheduler.push_now().await);
        assert_eq!(transport.pushes.load(Ordering::SeqCst), 1);
    }
}
