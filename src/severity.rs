//! Toast severity levels
//!
//! Severity picks the marker class, icon and colors of a toast. Parsing is
//! lenient: any name that is not a known severity is treated as `Info`.

use std::fmt;

use crate::theme::toast::{self as colors, ToastColors};

/// Severity category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Error,
        Severity::Warning,
    ];

    /// Parse a severity name, falling back to `Info` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Marker class carried by the toast element, e.g. `toast-success`
    pub fn marker_class(self) -> &'static str {
        match self {
            Severity::Info => "toast-info",
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Warning => "toast-warning",
        }
    }

    /// Icon-font class name (used as `fas fa-<icon>`)
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-times-circle",
            Severity::Warning => "fa-exclamation-triangle",
        }
    }

    /// Glyph drawn for the icon in a terminal
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
        }
    }

    pub fn colors(self) -> ToastColors {
        match self {
            Severity::Info => colors::INFO,
            Severity::Success => colors::SUCCESS,
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    /// Recover the severity from an element's marker class
    pub fn from_marker_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.marker_class() == class)
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::from_name(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
