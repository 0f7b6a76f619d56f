//! Transient notifications raised by row actions.

use owo_colors::AnsiColors;
use serde::Serialize;

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// The message to display
    pub title: String,
    /// How the host should style the toast
    pub style: ToastStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToastStyle {
    Success,
    Failure,
}

impl Toast {
    pub fn new(title: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            title: title.into(),
            style,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastStyle::Success)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::new(title, ToastStyle::Failure)
    }

    /// Get the terminal color associated with this toast's style
    pub fn color(&self) -> AnsiColors {
        match self.style {
            ToastStyle::Success => AnsiColors::Green,
            ToastStyle::Failure => AnsiColors::Red,
        }
    }
}
