//! Periodic membership refresh.
//!
//! While a verified user is signed in, the poller refetches the caller's
//! communities every interval and lets [`SyncContext::refresh_memberships`]
//! report join requests that were approved or declined in the meantime.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::SyncContext;

/// `tokio::time::interval` rejects a zero period.
const MIN_PERIOD: Duration = Duration::from_millis(1);
use crate::membership::Reconciliation;

/// Running poller. [`PollerHandle::stop`] ends it and waits for the current
/// cycle; dropping the handle also ends it, without waiting.
#[derive(Debug)]
pub struct PollerHandle {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl PollerHandle {
    /// Signal the task and wait for it to finish its current cycle.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(error) = self.handle.await {
            tracing::warn!(%error, "membership poller ended abnormally");
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// One poll cycle. Skipped (returns `None`) unless a verified user is signed in.
///
/// Failures are logged and swallowed; the next cycle tries again with the
/// previous pending snapshot intact.
pub async fn poll_once(ctx: &SyncContext) -> Option<Reconciliation> {
    let verified = ctx.session().current().is_some_and(|user| user.is_verified);
    if !verified {
        tracing::trace!("membership poll skipped; no verified user");
        return None;
    }
    match ctx.refresh_memberships().await {
        Ok(reconciliation) => Some(reconciliation),
        Err(error) => {
            tracing::warn!(%error, "membership poll failed");
            None
        }
    }
}

/// Start polling every `period` as a background tokio task.
///
/// The first cycle runs immediately. Slow cycles delay the next tick rather
/// than bursting to catch up. A zero `period` is raised to one millisecond.
#[must_use]
pub fn spawn(ctx: SyncContext, period: Duration) -> PollerHandle {
    let period = period.max(MIN_PERIOD);
    let (shutdown, mut stopped) = watch::channel(false);
    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(?period, "membership poller started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    poll_once(&ctx).await;
                }
                changed = stopped.changed() => {
                    if changed.is_err() || *stopped.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("membership poller stopped");
    });
    PollerHandle { handle, shutdown }
}
