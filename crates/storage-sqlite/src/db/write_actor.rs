//! Single-writer actor for SQLite.
//!
//! SQLite tolerates one writer at a time; all mutations are funneled
//! through a dedicated actor task owning one pooled connection, so writes
//! are serialized while reads keep using the pool directly.

use std::any::Any;
use std::sync::Arc;

use diesel::SqliteConnection;
use lifeplan_core::errors::{Error, Result};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;

// Diesel's transaction wrapper needs an error type it can produce itself
// (for BEGIN/COMMIT failures) next to whatever the job returns.
enum TxError {
    Core(Error),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        TxError::Diesel(err)
    }
}

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection inside a transaction and
    /// returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + Any + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        let erased: ErasedJob =
            Box::new(move |conn| job(conn).map(|value| Box::new(value) as Box<dyn Any + Send>));
        self.tx
            .send((erased, reply_tx))
            .await
            .map_err(|_| Error::Unexpected("database writer is not running".to_string()))?;

        let boxed = reply_rx
            .await
            .map_err(|_| Error::Unexpected("database writer dropped the reply".to_string()))??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("writer returned an unexpected type".to_string()))
    }
}

/// Spawns the writer task. It holds one connection for its whole lifetime
/// and processes jobs strictly in order.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, TxError, _>(|conn| job(conn).map_err(TxError::Core))
                .map_err(|e| match e {
                    TxError::Core(err) => err,
                    TxError::Diesel(err) => StorageError::Query(err).into(),
                });
            // A dropped receiver just means the caller gave up waiting.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
