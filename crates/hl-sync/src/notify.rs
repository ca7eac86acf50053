//! Transient user-facing notifications.

use std::fmt;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::membership::Transition;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description,
        }
    }

    pub fn info(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.into(),
            description,
        }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description,
        }
    }
}

impl From<&Transition> for Notification {
    fn from(transition: &Transition) -> Self {
        match transition {
            Transition::Accepted { name, .. } => Self::success(
                "Request approved!",
                Some(format!("You've been accepted into {name}.")),
            ),
            Transition::Declined { name, .. } => Self::info(
                "Request declined",
                Some(format!("Your request to join {name} was declined.")),
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {description}", self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// Fan-out of notifications to any number of subscribers.
///
/// Emitting with no subscribers is not an error; the message is dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn emit(&self, notification: Notification) {
        tracing::debug!(level = %notification.level, title = %notification.title, "notify");
        if self.tx.send(notification).is_err() {
            tracing::trace!("no notification subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_emitted_notifications() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        notifier.emit(Notification::success("Joined Maple!", None));
        let received = rx.recv().await.unwrap();
        assert_eq!(received.level, Level::Success);
        assert_eq!(received.to_string(), "Joined Maple!");
    }

    #[test]
    fn emit_without_subscribers_is_silent() {
        Notifier::new().emit(Notification::info("nobody listening", None));
    }

    #[test]
    fn transition_messages() {
        let accepted = Notification::from(&Transition::Accepted {
            id: "3".into(),
            name: "Tech Hub".into(),
        });
        assert_eq!(accepted.level, Level::Success);
        assert_eq!(
            accepted.description.as_deref(),
            Some("You've been accepted into Tech Hub.")
        );

        let declined = Notification::from(&Transition::Declined {
            id: "3".into(),
            name: "Tech Hub".into(),
        });
        assert_eq!(declined.level, Level::Info);
        assert!(declined.to_string().contains("was declined"));
    }
}
