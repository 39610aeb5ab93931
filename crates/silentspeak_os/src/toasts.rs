#![forbid(unsafe_code)]

use silentspeak_contracts::toast::{Notice, Toast, ToastId};
use silentspeak_contracts::MonotonicTimeNs;

/// Transient notifications. Every operation returns a new tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastTray {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastTray {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: ToastId(1),
        }
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&self, notice: Notice, now: MonotonicTimeNs) -> (Self, ToastId) {
        let id = self.next_id;
        let mut toasts = self.toasts.clone();
        toasts.push(Toast {
            id,
            message: notice.message,
            kind: notice.kind,
            expires_at: now.plus_ms(notice.duration_ms),
        });
        (
            Self {
                toasts,
                next_id: ToastId(id.0 + 1),
            },
            id,
        )
    }

    pub fn push_all(&self, notices: Vec<Notice>, now: MonotonicTimeNs) -> Self {
        notices
            .into_iter()
            .fold(self.clone(), |tray, notice| tray.push(notice, now).0)
    }

    /// Unknown ids are a no-op.
    pub fn dismiss(&self, id: ToastId) -> Self {
        Self {
            toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
            next_id: self.next_id,
        }
    }

    pub fn expire(&self, now: MonotonicTimeNs) -> Self {
        Self {
            toasts: self
                .toasts
                .iter()
                .filter(|t| t.expires_at > now)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }
}

impl Default for ToastTray {
    fn default() -> Self {
        Self::new()
    }
}
