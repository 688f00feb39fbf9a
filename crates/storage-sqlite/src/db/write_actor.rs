use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use log::error;
use salesboard_core::errors::{Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the actor's connection and reports a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type BoxedAny = Box<dyn Any + Send + 'static>;
type Envelope = (Job<BoxedAny>, oneshot::Sender<Result<BoxedAny>>);

/// Handle for sending jobs to the writer actor.
///
/// All writes go through one connection so SQLite never sees two writers
/// racing for the lock. Each job runs inside its own immediate transaction.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Executes a job on the writer actor's dedicated connection.
    ///
    /// The job's error rolls back its transaction and is returned as-is.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as BoxedAny)),
                ret_tx,
            ))
            .await
            .map_err(|_| Error::Unexpected("Writer actor has stopped".to_string()))?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Unexpected("Writer actor dropped the reply without a result".to_string())
        })??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("Writer actor returned an unexpected type".to_string()))
    }
}

/// Spawns the background task that owns the single write connection.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Dropping the receiver makes every exec call fail instead of hanging.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let mut job_error: Option<Error> = None;
            let result = conn.immediate_transaction::<_, StorageError, _>(|c| {
                job(c).map_err(|e| {
                    let message = e.to_string();
                    job_error = Some(e);
                    StorageError::CoreError(message)
                })
            });

            // Hand back the job's own error so callers can match on it.
            let reply = result.map_err(|e| job_error.take().unwrap_or_else(|| e.into()));

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(reply);
        }
    });

    WriteHandle { tx }
}
