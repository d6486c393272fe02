//! # Worker Pool
//!
//! A small, fixed-size set of Tokio tasks pulling jobs off one shared queue.
//!
//! ## How it works
//!
//! ```text
//!   submit() ──► mpsc queue ──► worker_0 ──► tokio::spawn(job) ──► oneshot ──► JobHandle::join()
//!                          └──► worker_1 ──► ...
//! ```
//!
//! - Each worker takes one job at a time, so at most `size` jobs run at once.
//! - Each job runs in its own spawned task. A job that panics takes only that task down; the
//!   worker logs it and keeps going, and the job's [`JobHandle`] reports [`PoolError::JobDropped`].
//! - Results travel back over a `oneshot` channel, the same request/response shape the rest of
//!   the crate uses for message passing.
//!
//! ## Shutdown
//!
//! [`WorkerPool::shutdown`] drops the queue sender, which lets every worker drain what is left
//! and exit, then awaits each worker task. Shutdown takes the pool by value, so nothing can be
//! submitted afterwards.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Queue slots per worker before `submit` starts waiting for room.
const QUEUE_DEPTH_PER_WORKER: usize = 16;

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Errors raised by the worker pool itself, never by the jobs it runs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PoolError {
    #[error("Worker pool size must be at least 1")]
    InvalidSize,
    #[error("Worker pool closed")]
    Closed,
    #[error("Job dropped before completing")]
    JobDropped,
    #[error("Worker task failed: {0}")]
    WorkerFailed(String),
}

/// A fixed number of workers executing submitted futures.
///
/// Must be created from inside a Tokio runtime.
pub struct WorkerPool {
    sender: mpsc::Sender<Job>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::InvalidSize);
        }

        let (sender, receiver) = mpsc::channel(size * QUEUE_DEPTH_PER_WORKER);
        let receiver = Arc::new(Mutex::new(receiver));
        let workers = (0..size)
            .map(|worker| tokio::spawn(run_worker(worker, receiver.clone())))
            .collect();

        info!(size, "Worker pool started");
        Ok(Self { sender, workers })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue `job` and return a handle to its eventual output.
    ///
    /// Waits only for queue space, not for the job to run.
    pub async fn submit<F, T>(&self, job: F) -> Result<JobHandle<T>, PoolError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        let job: Job = Box::pin(async move {
            let _ = respond_to.send(job.await);
        });

        self.sender.send(job).await.map_err(|_| PoolError::Closed)?;
        Ok(JobHandle { response })
    }

    /// Stops accepting work, lets the workers drain the queue and waits for all of them.
    pub async fn shutdown(self) -> Result<(), PoolError> {
        info!(size = self.workers.len(), "Shutting down worker pool...");
        drop(self.sender);

        for handle in self.workers {
            if let Err(e) = handle.await {
                error!(error = %e, "Worker task failed");
                return Err(PoolError::WorkerFailed(e.to_string()));
            }
        }

        info!("Worker pool shutdown complete.");
        Ok(())
    }
}

/// Handle to a job submitted to a [`WorkerPool`].
///
/// Dropping the handle does not cancel the job; it only discards the output.
#[derive(Debug)]
pub struct JobHandle<T> {
    response: oneshot::Receiver<T>,
}

impl<T> JobHandle<T> {
    /// Wait for the job to finish and take its output.
    pub async fn join(self) -> Result<T, PoolError> {
        self.response.await.map_err(|_| PoolError::JobDropped)
    }
}

async fn run_worker(worker: usize, receiver: Arc<Mutex<mpsc::Receiver<Job>>>) {
    debug!(worker, "Worker started");

    loop {
        let job = receiver.lock().await.recv().await;
        let Some(job) = job else { break };

        if let Err(e) = tokio::spawn(job).await {
            warn!(worker, error = %e, "Job panicked");
        }
    }

    debug!(worker, "Worker stopped");
}
