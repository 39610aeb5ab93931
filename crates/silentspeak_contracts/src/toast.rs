#![forbid(unsafe_code)]

use crate::MonotonicTimeNs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: MonotonicTimeNs,
}

/// A notification an orchestration step wants shown. The tray assigns
/// id and deadline when it is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms,
        }
    }
}
