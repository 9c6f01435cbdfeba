//! Transient user-facing notifications ("toasts").

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Holds at most one pending toast and its dismiss countdown.
///
/// Showing a toast while one is pending replaces it and restarts the
/// countdown; there is no notification queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    ticks_left: u32,
    dismiss_after_ticks: u32,
}

impl ToastState {
    pub fn new(dismiss_after_ticks: u32) -> Self {
        Self {
            current: None,
            ticks_left: 0,
            dismiss_after_ticks,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, toast: Toast) {
        self.current = Some(toast);
        self.ticks_left = self.dismiss_after_ticks;
    }

    /// Advances the dismiss countdown by one event-loop tick.
    pub fn tick(&mut self) {
        if self.current.is_none() {
            return;
        }

        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.current = None;
        }
    }
}
