use crate::CacheSweepJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(CacheSweepJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &Option<CancellationToken>,
) -> Option<tokio::task::JoinHandle<()>> {
    let job = job?;
    let job = match shutdown {
        Some(token) => job.with_cancellation(token.clone()),
        None => job,
    };
    Some(Arc::new(job).start_job())
}

#[derive(Default)]
pub struct JobRunner {
    cache_sweep: Option<CacheSweepJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweep = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawns every configured job and returns their handles.
    pub async fn start(self) -> Vec<tokio::task::JoinHandle<()>> {
        info!("Starting background job runner");

        let handles: Vec<_> = [spawn_job(self.cache_sweep, &self.shutdown)]
            .into_iter()
            .flatten()
            .collect();

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}
