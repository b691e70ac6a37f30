//! Transient toast notifications.
//!
//! One toast is visible at a time: showing a new one replaces whatever is on
//! screen. A toast dismisses itself after its lifetime elapses. Time comes
//! in as epoch milliseconds from the caller so expiry is deterministic.

/// Default toast lifetime in milliseconds.
pub const TOAST_DURATION_MS: i64 = 3000;

/// Severity of a toast, mapped to an icon by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    /// Icon glyph shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Single-slot toast holder with auto-dismiss.
#[derive(Debug)]
pub struct ToastQueue {
    current: Option<(Toast, i64)>,
    duration_ms: i64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration_ms(TOAST_DURATION_MS)
    }

    /// Override the default lifetime.
    #[must_use]
    pub fn with_duration_ms(duration_ms: i64) -> Self {
        Self {
            current: None,
            duration_ms,
        }
    }

    /// Show a toast, replacing any currently visible one.
    pub fn show(&mut self, level: ToastLevel, message: impl Into<String>, now_ms: i64) {
        let toast = Toast {
            level,
            message: message.into(),
        };
        self.current = Some((toast, now_ms));
    }

    /// The toast visible at `now_ms`, if its lifetime has not elapsed.
    #[must_use]
    pub fn current(&self, now_ms: i64) -> Option<&Toast> {
        let (toast, shown_at) = self.current.as_ref()?;
        if now_ms - shown_at >= self.duration_ms {
            return None;
        }
        Some(toast)
    }

    /// Drop the current toast immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;
