//! Project list view lifecycle.
//!
//! A [`ProjectsView`] publishes its current [`PipelineResult`] on a
//! `tokio::sync::watch` channel. Every load is tagged with a generation
//! number; a response is only published if its generation is still the
//! current one and the view is still mounted. Unmounting or starting a new
//! load therefore turns every in-flight response into a no-op.
//!
//! Background loads are also cancelled outright: the view keeps the abort
//! handle of its latest task and aborts it on the next load or on unmount,
//! so at most one spawned fetch per view is ever outstanding.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::clients::RepositorySource;
use crate::pipeline::{run_pipeline, PipelineResult, ProjectsQuery};
use crate::projection::{project, RenderState};

#[derive(Debug)]
struct Lifecycle {
    generation: u64,
    mounted: bool,
    task: Option<AbortHandle>,
}

impl Lifecycle {
    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[derive(Debug)]
struct ViewInner {
    org: String,
    query: ProjectsQuery,
    lifecycle: Mutex<Lifecycle>,
    state: watch::Sender<PipelineResult>,
}

/// A mounted project list (featured or all).
///
/// Cloning yields another handle to the same view.
#[derive(Debug, Clone)]
pub struct ProjectsView {
    inner: Arc<ViewInner>,
}

impl ProjectsView {
    /// Mount a new view. It starts out `Loading`.
    pub fn new(org: &str, query: ProjectsQuery) -> Self {
        let (state, _) = watch::channel(PipelineResult::Loading);

        Self {
            inner: Arc::new(ViewInner {
                org: org.to_string(),
                query,
                lifecycle: Mutex::new(Lifecycle {
                    generation: 0,
                    mounted: true,
                    task: None,
                }),
                state,
            }),
        }
    }

    /// Run the pipeline and publish its outcome.
    ///
    /// Returns `true` if the outcome was published, `false` if the view was
    /// unmounted or another load started while this one was in flight.
    pub async fn load<S>(&self, source: &S) -> bool
    where
        S: RepositorySource + ?Sized,
    {
        let Some(generation) = self.begin() else {
            return false;
        };

        let result = run_pipeline(source, &self.inner.org, &self.inner.query).await;
        self.apply(generation, result)
    }

    /// Like [`load`](Self::load), on a background task.
    ///
    /// The generation is claimed before this returns, so a later `load` or
    /// `unmount` always supersedes this one. Superseding also aborts the
    /// task: its handle then resolves to a cancelled `JoinError`.
    pub fn spawn_load<S>(&self, source: Arc<S>) -> JoinHandle<bool>
    where
        S: RepositorySource + ?Sized + 'static,
    {
        let view = self.clone();
        let mut lifecycle = self.lock();
        let generation = self.begin_locked(&mut lifecycle);

        let handle = tokio::spawn(async move {
            let Some(generation) = generation else {
                return false;
            };
            let result = run_pipeline(source.as_ref(), &view.inner.org, &view.inner.query).await;
            view.apply(generation, result)
        });

        if generation.is_some() {
            lifecycle.task = Some(handle.abort_handle());
        }
        handle
    }

    /// Tear the view down. The pending background load, if any, is aborted
    /// and any other response still in flight is discarded.
    pub fn unmount(&self) {
        let mut lifecycle = self.lock();
        lifecycle.cancel_task();
        lifecycle.mounted = false;
        lifecycle.generation += 1;
        debug!(key = self.inner.query.key(), "view unmounted");
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PipelineResult> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current pipeline result.
    #[must_use]
    pub fn current(&self) -> PipelineResult {
        self.inner.state.borrow().clone()
    }

    /// What the view currently draws.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        project(&self.inner.state.borrow(), self.inner.query.placeholder_count())
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Generation of the most recent load (or unmount).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    #[must_use]
    pub fn query(&self) -> &ProjectsQuery {
        &self.inner.query
    }

    #[must_use]
    pub fn org(&self) -> &str {
        &self.inner.org
    }

    /// Claim a new generation and publish `Loading`.
    fn begin(&self) -> Option<u64> {
        let mut lifecycle = self.lock();
        self.begin_locked(&mut lifecycle)
    }

    fn begin_locked(&self, lifecycle: &mut Lifecycle) -> Option<u64> {
        if !lifecycle.mounted {
            debug!(key = self.inner.query.key(), "load requested on unmounted view");
            return None;
        }

        lifecycle.cancel_task();
        lifecycle.generation += 1;
        self.inner.state.send_replace(PipelineResult::Loading);
        Some(lifecycle.generation)
    }

    /// Publish `result` if `generation` is still current.
    fn apply(&self, generation: u64, result: PipelineResult) -> bool {
        let lifecycle = self.lock();
        if !lifecycle.mounted || lifecycle.generation != generation {
            debug!(
                key = self.inner.query.key(),
                generation,
                current = lifecycle.generation,
                "dropping stale response"
            );
            return false;
        }

        self.inner.state.send_replace(result);
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Lifecycle> {
        self.inner.lifecycle.lock().unwrap_or_else(|e| e.into_inner())
    }
}
