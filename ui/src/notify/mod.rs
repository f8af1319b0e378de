//! Transient toast notifications.

use dioxus::prelude::*;

mod host;
pub use host::ToastHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub tone: ToastTone,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: ToastTone::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: ToastTone::Error,
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notify {
    fn notify(&self, toast: Toast);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    visible: Vec<(u64, Toast)>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.visible.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|(toast_id, _)| *toast_id != id);
    }

    pub fn visible(&self) -> &[(u64, Toast)] {
        &self.visible
    }
}

impl Notify for Signal<ToastQueue> {
    fn notify(&self, toast: Toast) {
        tracing::debug!(title = %toast.title, "toast queued");
        let mut queue = *self;
        queue.write().push(toast);
    }
}
