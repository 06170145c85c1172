use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use serde::Serialize;

use crate::error::AnalyzerError;
use crate::language::{Analyzer, AnalyzerBuilder};

type BuildResult = Result<Arc<dyn Analyzer>, AnalyzerError>;
type PendingBuild = Shared<BoxFuture<'static, BuildResult>>;

enum State {
    Uninitialized,
    Building { attempt: u64, pending: PendingBuild },
    Ready(Arc<dyn Analyzer>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerStatus {
    Uninitialized,
    Building,
    Ready,
}

/// Lazily built, process-wide analyzer.
///
/// The first `acquire` starts the build on the blocking pool; callers that
/// arrive while it runs await the same pending build. A failed build drops
/// back to uninitialized so the next `acquire` tries again.
pub struct AnalyzerResource {
    builder: Arc<dyn AnalyzerBuilder>,
    state: Arc<Mutex<State>>,
    attempts: AtomicU64,
}

impl AnalyzerResource {
    pub fn new(builder: Arc<dyn AnalyzerBuilder>) -> Self {
        Self {
            builder,
            state: Arc::new(Mutex::new(State::Uninitialized)),
            attempts: AtomicU64::new(0),
        }
    }

    /// Get the analyzer, building it if no build has succeeded yet
    pub async fn acquire(&self) -> Result<Arc<dyn Analyzer>, AnalyzerError> {
        let pending = {
            let mut state = lock(&self.state);
            match &*state {
                State::Ready(analyzer) => return Ok(Arc::clone(analyzer)),
                State::Building { pending, .. } => pending.clone(),
                State::Uninitialized => {
                    let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    let pending = self.start_build(attempt);
                    *state = State::Building {
                        attempt,
                        pending: pending.clone(),
                    };
                    pending
                }
            }
        };

        pending.await
    }

    /// Build eagerly, logging instead of returning the outcome
    pub async fn warm_up(&self) {
        match self.acquire().await {
            Ok(analyzer) => {
                tracing::info!("Analyzer for '{}' preloaded", analyzer.language_code())
            }
            Err(e) => tracing::warn!("Analyzer preload failed, will retry on demand: {}", e),
        }
    }

    pub fn status(&self) -> AnalyzerStatus {
        match &*lock(&self.state) {
            State::Uninitialized => AnalyzerStatus::Uninitialized,
            State::Building { .. } => AnalyzerStatus::Building,
            State::Ready(_) => AnalyzerStatus::Ready,
        }
    }

    fn start_build(&self, attempt: u64) -> PendingBuild {
        tracing::info!("Building analyzer (attempt #{})", attempt);

        let builder = Arc::clone(&self.builder);
        let state = Arc::clone(&self.state);
        let started = Instant::now();

        // The build task settles the state itself, waiters only read the result
        let build = tokio::spawn(async move {
            let result = match tokio::task::spawn_blocking(move || builder.build()).await {
                Ok(Ok(analyzer)) => {
                    tracing::info!(
                        "Analyzer ready in {} ms (attempt #{})",
                        started.elapsed().as_millis(),
                        attempt
                    );
                    let analyzer: Arc<dyn Analyzer> = Arc::from(analyzer);
                    Ok(analyzer)
                }
                Ok(Err(e)) => Err(e),
                Err(e) => Err(AnalyzerError::BuildAborted(e.to_string())),
            };
            settle(&state, attempt, &result);
            result
        });

        async move {
            build
                .await
                .unwrap_or_else(|e| Err(AnalyzerError::BuildAborted(e.to_string())))
        }
        .boxed()
        .shared()
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// Only the attempt that is still current may move the state on
fn settle(state: &Mutex<State>, attempt: u64, result: &BuildResult) {
    let mut state = lock(state);
    if let State::Building { attempt: current, .. } = &*state {
        if *current != attempt {
            return;
        }
        *state = match result {
            Ok(analyzer) => State::Ready(Arc::clone(analyzer)),
            Err(e) => {
                tracing::error!("Analyzer build #{} failed: {}", attempt, e);
                State::Uninitialized
            }
        };
    }
}
