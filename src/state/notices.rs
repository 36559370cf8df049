//! Transient toast notifications.
//!
//! Auth flows push success/error notices here; `NoticeHost` renders the
//! stack and dismisses entries on click.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::*;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Client-generated id used as the render key and dismiss handle.
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered stack of visible notices, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), kind, message: message.to_owned() });
        id
    }

    /// Remove the notice with `id`, if still present.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}

pub fn notify_success(notices: RwSignal<NoticeState>, message: &str) {
    notices.update(|n| {
        n.push(NoticeKind::Success, message);
    });
}

pub fn notify_error(notices: RwSignal<NoticeState>, message: &str) {
    notices.update(|n| {
        n.push(NoticeKind::Error, message);
    });
}
