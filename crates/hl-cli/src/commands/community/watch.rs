use std::time::Duration;

use anyhow::bail;
use tokio::sync::broadcast::error::RecvError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Poll until Ctrl-C, printing each accepted/declined notification as it arrives.
pub async fn run(interval: Option<u64>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    if !user.is_verified {
        bail!("membership updates are only polled for verified accounts; run `hl auth next-step`");
    }

    let period = interval.map_or_else(|| ctx.config.sync.poll_interval(), Duration::from_secs);
    if period.is_zero() {
        bail!("--interval must be at least one second");
    }

    let mut rx = ctx.sync.notifier().subscribe();
    let poller = ctx.sync.watch_memberships(period);
    if !flags.quiet {
        eprintln!("watching memberships every {}s; press Ctrl-C to stop", period.as_secs());
    }

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(notification) => output(&notification, flags.format)?,
                Err(RecvError::Lagged(skipped)) => tracing::warn!(skipped, "missed notifications"),
                Err(RecvError::Closed) => break,
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(error) = signal {
                    tracing::warn!(%error, "failed to listen for Ctrl-C");
                }
                break;
            }
        }
    }

    poller.stop().await;
    Ok(())
}
