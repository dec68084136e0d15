//! # Theme Configuration
//!
//! Centralized colours for the journal. Views should take colours from here
//! rather than inlining `Color32` values.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let fill = CURRENT_THEME.stress_color(level);
//! let border = colors::CARD_BORDER;
//! ```

use eframe::egui::Color32;
use shared::{InsightKind, StressLevel, TagTone};

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, tabs)
    pub interactive: InteractiveColors,
    /// Background and card colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Stress severity scale, index 0 is level 1
    pub severity: [Color32; 5],
    /// Tag and pill colors
    pub tags: TagColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub active_background: Color32,
    pub inactive_background: Color32,
    pub border: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub app_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub bar_track: Color32,
    pub bar_fill: Color32,
    pub preview_background: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub white: Color32,
    pub error: Color32,
}

#[derive(Debug, Clone)]
pub struct TagColors {
    pub neutral_background: Color32,
    pub risk_background: Color32,
    pub risk_text: Color32,
    pub safe_background: Color32,
    pub safe_text: Color32,
    pub pill_red: Color32,
    pub pill_amber: Color32,
    pub pill_green: Color32,
}

/// Calm teal theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        active_background: Color32::from_rgb(37, 99, 235),
        inactive_background: Color32::from_rgb(241, 245, 249),
        border: Color32::from_rgb(148, 163, 184),
    },
    layout: LayoutColors {
        app_background: Color32::from_rgb(240, 244, 248),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(226, 232, 240),
        bar_track: Color32::from_rgb(226, 232, 240),
        bar_fill: Color32::from_rgb(13, 148, 136),
        preview_background: Color32::from_rgb(15, 23, 42),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(30, 41, 59),
        secondary: Color32::from_rgb(100, 116, 139),
        heading: Color32::from_rgb(15, 23, 42),
        white: Color32::WHITE,
        error: Color32::from_rgb(220, 38, 38),
    },
    severity: [
        Color32::from_rgb(34, 197, 94),  // 1 calm
        Color32::from_rgb(132, 204, 22), // 2
        Color32::from_rgb(234, 179, 8),  // 3
        Color32::from_rgb(249, 115, 22), // 4
        Color32::from_rgb(220, 38, 38),  // 5 meltdown
    ],
    tags: TagColors {
        neutral_background: Color32::from_rgb(241, 245, 249),
        risk_background: Color32::from_rgb(254, 226, 226),
        risk_text: Color32::from_rgb(153, 27, 27),
        safe_background: Color32::from_rgb(220, 252, 231),
        safe_text: Color32::from_rgb(22, 101, 52),
        pill_red: Color32::from_rgb(220, 38, 38),
        pill_amber: Color32::from_rgb(217, 119, 6),
        pill_green: Color32::from_rgb(22, 163, 74),
    },
};

impl Theme {
    /// Marker and chip colour for a stress level
    pub fn stress_color(&self, level: StressLevel) -> Color32 {
        let index = (level.value() as usize).saturating_sub(1).min(self.severity.len() - 1);
        self.severity[index]
    }

    /// Badge colour for an insight
    pub fn insight_color(&self, kind: InsightKind) -> Color32 {
        match kind {
            InsightKind::HighImpact => self.tags.pill_red,
            InsightKind::Consistent => self.tags.pill_amber,
            InsightKind::Protective => self.tags.pill_green,
        }
    }

    /// (background, text) for a profile tag
    pub fn tag_colors(&self, tone: TagTone) -> (Color32, Color32) {
        match tone {
            TagTone::Risk => (self.tags.risk_background, self.tags.risk_text),
            TagTone::Safe => (self.tags.safe_background, self.tags.safe_text),
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;
    pub const BUTTON_BORDER: Color32 = CURRENT_THEME.interactive.border;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;
    pub const TEXT_ERROR: Color32 = CURRENT_THEME.typography.error;

    pub const APP_BACKGROUND: Color32 = CURRENT_THEME.layout.app_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const BAR_TRACK: Color32 = CURRENT_THEME.layout.bar_track;
    pub const BAR_FILL: Color32 = CURRENT_THEME.layout.bar_fill;
    pub const PREVIEW_BACKGROUND: Color32 = CURRENT_THEME.layout.preview_background;

    pub const TAG_NEUTRAL: Color32 = CURRENT_THEME.tags.neutral_background;
}
