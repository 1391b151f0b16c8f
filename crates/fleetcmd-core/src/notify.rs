//! Outbound notifications for the user-visible layer.
//!
//! The engine reports every user-visible transition through a
//! [`NotificationSink`]; display and expiry belong to the receiver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

pub trait NotificationSink {
    fn notify(&mut self, message: &str, kind: NoticeKind);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn notify(&mut self, message: &str, kind: NoticeKind) {
        (**self).notify(message, kind)
    }
}

/// Collects notices in arrival order
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    notices: Vec<Notice>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Take everything received so far
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn count_kind(&self, kind: NoticeKind) -> usize {
        self.notices.iter().filter(|n| n.kind == kind).count()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.notices.iter().any(|n| n.message.contains(fragment))
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notices.push(Notice {
            message: message.to_string(),
            kind,
        });
    }
}
