//! # Module: Dashboard View
//!
//! ## Responsibility
//! Owns the per-endpoint result slots for one mount. On mount it spawns one
//! fetch task per endpoint; completions come back over a bounded channel and
//! are applied by whoever drives the view (the TUI frame loop or the
//! headless printer), one at a time, as they arrive.
//!
//! ## Guarantees
//! - Exactly one request per endpoint per mount; no polling, no retry
//! - Each slot makes exactly one terminal transition
//! - Slots resolve independently and in completion order; one failure never
//!   blocks or alters another slot
//! - Unmount (explicit or on drop) aborts in-flight tasks; a task finishing
//!   afterwards finds its channel closed and its result is discarded
//!
//! ## NOT Responsible For
//! - Building requests (that belongs to `client`)
//! - Formatting (that belongs to `render`)

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::client::{FetchError, ReportSource};
use crate::endpoint::{Endpoint, EndpointId, EndpointSet, Profile};
use crate::report::EndpointResult;
use crate::DashboardError;

/// Error text recorded when a fetch task ends without reporting back.
const ORPHANED_TASK_MSG: &str = "request task ended without a result";

/// One fetch task's outcome, tagged with the slot it belongs to.
#[derive(Debug)]
struct Completion {
    slot: usize,
    outcome: Result<Value, FetchError>,
    elapsed: Duration,
}

/// View state for one mount of the dashboard.
pub struct DashboardView {
    set: EndpointSet,
    source: Arc<dyn ReportSource>,
    slots: Vec<EndpointResult>,
    tasks: Vec<JoinHandle<()>>,
    completions: mpsc::Receiver<Completion>,
    mounted_at: Instant,
}

impl std::fmt::Debug for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardView")
            .field("profile", &self.set.profile())
            .field("origin", &self.source.origin())
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl DashboardView {
    /// Mounts the view: creates a pending slot per endpoint and issues one
    /// request for each, concurrently. Returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Other`] when called outside a tokio runtime.
    pub fn mount(set: EndpointSet, source: Arc<dyn ReportSource>) -> Result<Self, DashboardError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| DashboardError::Other(format!("mount requires a tokio runtime: {e}")))?;

        info!(
            profile = %set.profile(),
            endpoints = set.len(),
            origin = %source.origin(),
            "mounting dashboard view"
        );

        let mounted_at = Instant::now();
        // Every task sends at most once, so `len` slots never block a sender.
        let (tx, completions) = mpsc::channel(set.len().max(1));

        let slots = set
            .endpoints()
            .iter()
            .map(|e| EndpointResult::pending(e.id.clone()))
            .collect();

        let tasks = set
            .endpoints()
            .iter()
            .cloned()
            .enumerate()
            .map(|(slot, endpoint)| {
                let source = Arc::clone(&source);
                let tx = tx.clone();
                runtime.spawn(async move {
                    let outcome = source.fetch(&endpoint).await;
                    let completion = Completion {
                        slot,
                        outcome,
                        elapsed: mounted_at.elapsed(),
                    };
                    if tx.send(completion).await.is_err() {
                        debug!(endpoint = %endpoint.id, "view unmounted, discarding result");
                    }
                })
            })
            .collect();

        // The view keeps no sender: once every task is done the channel closes.
        drop(tx);

        Ok(Self {
            set,
            source,
            slots,
            tasks,
            completions,
            mounted_at,
        })
    }

    /// Tears this mount down and mounts the same endpoint set again.
    ///
    /// This is a fresh mount, so it issues one new round of requests.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Other`] when called outside a tokio runtime.
    pub fn remount(&mut self) -> Result<(), DashboardError> {
        let fresh = Self::mount(self.set.clone(), Arc::clone(&self.source))?;
        // Assigning drops the old mount, which aborts its tasks.
        *self = fresh;
        Ok(())
    }

    /// Drains every completion that has already arrived and applies it.
    ///
    /// Never blocks. Returns how many slots changed.
    pub fn apply_completions(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.completions.try_recv() {
                Ok(completion) => {
                    if self.apply(completion).is_some() {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    applied += self.fail_orphans();
                    break;
                }
            }
        }
        applied
    }

    /// Waits for the next completion, applies it, and returns the slot it
    /// resolved. Returns `None` once every slot is terminal.
    pub async fn next_completion(&mut self) -> Option<&EndpointResult> {
        loop {
            if self.is_settled() {
                return None;
            }
            match self.completions.recv().await {
                Some(completion) => {
                    if let Some(idx) = self.apply(completion) {
                        return self.slots.get(idx);
                    }
                }
                None => {
                    self.fail_orphans();
                    return None;
                }
            }
        }
    }

    /// Applies completions until every slot is terminal.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    /// Tears the view down, aborting requests still in flight.
    ///
    /// Dropping the view has the same effect.
    pub fn unmount(self) {
        drop(self);
    }

    /// Slots in configured order.
    pub fn results(&self) -> &[EndpointResult] {
        &self.slots
    }

    /// Slot for `id`, if the id is part of this mount.
    pub fn result(&self, id: &str) -> Option<&EndpointResult> {
        self.slots.iter().find(|r| r.endpoint_id.as_str() == id)
    }

    /// Endpoints in configured order, parallel to [`Self::results`].
    pub fn endpoints(&self) -> &[Endpoint] {
        self.set.endpoints()
    }

    /// `(endpoint, result)` pairs in configured order.
    pub fn sections(&self) -> impl Iterator<Item = (&Endpoint, &EndpointResult)> {
        self.set.endpoints().iter().zip(self.slots.iter())
    }

    /// Profile of the mounted endpoint set.
    pub fn profile(&self) -> Profile {
        self.set.profile()
    }

    /// Where reports come from (base URL or `demo`).
    pub fn origin(&self) -> String {
        self.source.origin()
    }

    /// Time since this mount started.
    pub fn age(&self) -> Duration {
        self.mounted_at.elapsed()
    }

    /// Number of slots still pending.
    pub fn pending_count(&self) -> usize {
        self.slots.iter().filter(|r| !r.is_terminal()).count()
    }

    /// Ids of slots still pending, for diagnostics.
    pub fn pending_ids(&self) -> Vec<EndpointId> {
        self.slots
            .iter()
            .filter(|r| !r.is_terminal())
            .map(|r| r.endpoint_id.clone())
            .collect()
    }

    /// Number of loaded slots.
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|r| r.payload().is_some()).count()
    }

    /// Number of failed slots.
    pub fn failed_count(&self) -> usize {
        self.slots.iter().filter(|r| r.error_message().is_some()).count()
    }

    /// Returns `true` once every slot is terminal.
    pub fn is_settled(&self) -> bool {
        self.pending_count() == 0
    }

    /// Applies one completion. Returns the slot index on success.
    fn apply(&mut self, completion: Completion) -> Option<usize> {
        let Completion {
            slot,
            outcome,
            elapsed,
        } = completion;

        let Some(result) = self.slots.get_mut(slot) else {
            warn!(slot, "completion for unknown slot");
            return None;
        };

        let elapsed_ms = elapsed.as_millis() as u64;
        let outcome = match outcome {
            Ok(value) => {
                info!(endpoint = %result.endpoint_id, elapsed_ms, "report loaded");
                Ok(value)
            }
            Err(e) => {
                warn!(endpoint = %result.endpoint_id, elapsed_ms, error = %e, "report failed");
                Err(e.to_string())
            }
        };

        match result.resolve(outcome, elapsed) {
            Ok(()) => Some(slot),
            Err(e) => {
                warn!(error = %e, "discarding duplicate completion");
                None
            }
        }
    }

    /// Fails every slot that is still pending after all senders are gone.
    fn fail_orphans(&mut self) -> usize {
        let elapsed = self.mounted_at.elapsed();
        let mut failed = 0;
        for result in self.slots.iter_mut().filter(|r| !r.is_terminal()) {
            warn!(endpoint = %result.endpoint_id, "fetch task ended without reporting");
            if result.resolve(Err(ORPHANED_TASK_MSG.to_string()), elapsed).is_ok() {
                failed += 1;
            }
        }
        failed
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        let in_flight = self.tasks.iter().filter(|t| !t.is_finished()).count();
        for task in &self.tasks {
            task.abort();
        }
        self.completions.close();
        self.slots.clear();
        if in_flight > 0 {
            info!(in_flight, "dashboard view unmounted, aborted in-flight requests");
        } else {
            debug!("dashboard view unmounted");
        }
    }
}
