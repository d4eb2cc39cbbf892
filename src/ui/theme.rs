use crate::snapshot::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub node: Color,      // Neutral node fill
    pub pointer: Color,   // low/high/mid labels
    pub discarded: Color, // Cells outside the search window
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    node: Color::Rgb(205, 214, 244),
    pointer: Color::Rgb(148, 226, 213), // Cyan/teal
    discarded: Color::Rgb(69, 71, 90),
};

impl Theme {
    /// Color for a highlight role
    pub fn role(&self, role: Role) -> Color {
        match role {
            Role::Current => self.border_focused,
            Role::Compared => self.secondary,
            Role::Matched => self.success,
            Role::New => self.primary,
            Role::Removed => self.error,
        }
    }
}
