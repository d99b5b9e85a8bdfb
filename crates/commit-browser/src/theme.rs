use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - colors, indentation and styles passed into rendering
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Title bar
    pub title_fg: Color,
    pub title_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection
    pub selected_fg: Color,

    // List item indentation (columns)
    pub item_indent: u16,
    pub selected_indent: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default) - magenta title, coral selection
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: Color::Reset,
            bg_secondary: tailwind::SLATE.c900,

            // Title - light text on magenta
            title_fg: Color::from_u32(0x00FA_FAFA),
            title_bg: Color::from_u32(0x008F_157B),

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c400,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::FUCHSIA.c400,

            // Status
            status_success: tailwind::EMERALD.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SKY.c400,

            // Selection - coral
            selected_fg: Color::from_u32(0x00FF_7F50),

            item_indent: 4,
            selected_indent: 2,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the title bar
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .bg(self.title_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for key hints (e.g., "Enter" in "Enter search")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the selected commit hash
    pub fn selected_hash(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected commit message
    pub fn selected_message(&self) -> Style {
        Style::default().fg(self.selected_fg)
    }

    /// Style for a commit hash
    pub fn hash(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for a commit message
    pub fn message(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for a status line of the given type
    pub fn status(&self, status_type: &crate::state::TaskStatusType) -> Style {
        use crate::state::TaskStatusType;

        let color = match status_type {
            TaskStatusType::Success => self.status_success,
            TaskStatusType::Error => self.status_error,
            TaskStatusType::Warning => self.status_warning,
            TaskStatusType::Info => self.status_info,
        };
        Style::default().fg(color)
    }
}
