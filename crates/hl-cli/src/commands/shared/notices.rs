use hl_sync::{Level, Notification, SyncContext};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use crate::cli::GlobalFlags;

/// Collects notifications emitted while a command runs and prints them to stderr.
///
/// Error notifications are skipped; the failing command's error is already
/// reported by `main`.
pub struct Notices {
    rx: Receiver<Notification>,
    quiet: bool,
}

impl Notices {
    pub fn subscribe(ctx: &SyncContext, flags: &GlobalFlags) -> Self {
        Self {
            rx: ctx.notifier().subscribe(),
            quiet: flags.quiet,
        }
    }

    pub fn flush(mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(notification) => {
                    if !self.quiet && notification.level != Level::Error {
                        eprintln!("{}", format_notice(&notification));
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "dropped notifications");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
}

#[must_use]
pub fn format_notice(notification: &Notification) -> String {
    let marker = match notification.level {
        Level::Success => "ok",
        Level::Info => "note",
        Level::Error => "error",
    };
    format!("[{marker}] {notification}")
}
