// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

/// Screen corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn is_top(self) -> bool {
        matches!(self, ToastPosition::TopRight | ToastPosition::TopLeft)
    }

    pub fn is_right(self) -> bool {
        matches!(self, ToastPosition::TopRight | ToastPosition::BottomRight)
    }
}

/// Toast timing and layout section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    /// Time a toast stays before its exit begins
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Delay between insertion and the `show` class being added
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    /// Delay between losing `show` and removal from the tree
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
    #[serde(default)]
    pub position: ToastPosition,
    /// Widest a rendered toast may get, borders included
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_enter_delay_ms() -> u64 {
    10
}

fn default_exit_delay_ms() -> u64 {
    300
}

fn default_max_width() -> u16 {
    48
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            duration_ms: default_duration_ms(),
            enter_delay_ms: default_enter_delay_ms(),
            exit_delay_ms: default_exit_delay_ms(),
            position: ToastPosition::default(),
            max_width: default_max_width(),
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
