//! Ephemeral toast-notice state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push notices after auth operations resolve; the session store itself
//! never emits user-facing messages. The tray component renders and dismisses
//! them.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use uuid::Uuid;

/// Severity of a notice, mapped to tray styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS modifier suffix for the tray item.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single toast notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of live notices, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|notice| notice.id != id);
    }
}
