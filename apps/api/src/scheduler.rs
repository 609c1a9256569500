//! Periodic generation job.
//!
//! One background task, independent of request handlers. The first run fires
//! one full interval after startup. Runs are sequential; a slow run delays the
//! next tick instead of overlapping it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::generator::{generate_and_save, GeneratedPost};
use crate::llm_client::CompletionModel;
use crate::storage::PostStore;

/// File-name prefix for posts produced by the scheduler.
pub const SCHEDULED_PREFIX: &str = "daily_report_";

/// Spawns the periodic job. `period` must be non-zero.
pub fn spawn_scheduler(
    llm: Arc<dyn CompletionModel>,
    store: PostStore,
    keyword: String,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match run_scheduled_job(llm.as_ref(), &store, &keyword).await {
                Ok(generated) => info!(
                    "[task] Blog post generated for keyword: {keyword} ({})",
                    generated.saved.json_filename
                ),
                Err(e) => error!("[task] Scheduled generation for '{keyword}' failed: {e}"),
            }
        }
    })
}

/// One scheduled run: generate and save a post under the `daily_report_` prefix.
pub async fn run_scheduled_job(
    llm: &dyn CompletionModel,
    store: &PostStore,
    keyword: &str,
) -> Result<GeneratedPost, AppError> {
    generate_and_save(llm, store, keyword, SCHEDULED_PREFIX).await
}
