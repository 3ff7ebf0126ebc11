//! Transient alert shown over the page or the password modal.
//!
//! DESIGN
//! ======
//! Closing only flips `open`; title and message stay so the closing
//! transition can still render them.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Auto-close delay for alerts raised by the profile page.
pub const PAGE_AUTO_CLOSE_MS: u32 = 3000;

/// Auto-close delay for alerts raised inside the password modal.
pub const MODAL_AUTO_CLOSE_MS: u32 = 2000;

/// Severity of an alert. Drives styling and auto-close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Success,
    Error,
    Warning,
}

impl AlertKind {
    /// CSS modifier for the alert container.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Glyph shown next to the title.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
        }
    }
}

/// Alert contents and visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub open: bool,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl AlertState {
    /// Build an open alert.
    #[must_use]
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { open: true, kind, title: title.into(), message: message.into() }
    }

    /// Replace contents and open.
    pub fn show(&mut self, kind: AlertKind, title: impl Into<String>, message: impl Into<String>) {
        *self = Self::new(kind, title, message);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Auto-close delay for this alert given the owner's default, or `None`
    /// when the alert must be dismissed by hand. Only success alerts close
    /// themselves.
    #[must_use]
    pub fn auto_close_after(&self, delay_ms: u32) -> Option<u32> {
        (self.kind == AlertKind::Success).then_some(delay_ms)
    }
}
