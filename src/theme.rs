//! Centralized theme configuration for the toast UI.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` and never hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);
}

/// Toast styles, one color set per severity
pub mod toast {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
        pub icon: Color,
    }

    pub const INFO: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: Color::Rgb(55, 55, 85),
        border: palette::INFO,
        icon: palette::INFO,
    };

    pub const SUCCESS: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: Color::Rgb(36, 64, 48),
        border: palette::SUCCESS,
        icon: palette::SUCCESS,
    };

    pub const WARNING: ToastColors = ToastColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
        icon: palette::BG_DARK,
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
        icon: palette::TEXT,
    };

    /// Toasts entering or leaving are drawn faded
    pub const FADED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .bg(palette::BG_SURFACE)
        .add_modifier(Modifier::DIM);

    pub const CLOSE: Style = Style::new().add_modifier(Modifier::BOLD);
}

/// Demo screen styles
pub mod demo {
    use super::*;

    pub const BACKGROUND: Style = Style::new().bg(palette::BG_DARK);
    pub const TITLE: Style = Style::new()
        .fg(palette::INFO)
        .add_modifier(Modifier::BOLD);
    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
}
