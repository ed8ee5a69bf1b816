use bevy::prelude::*;

/// Shared palette and type sizes for the overlay UI.
pub struct Theme;

impl Theme {
    /// Highlight colour for active links and progress fills.
    pub const ACCENT: Color = Color::srgb(0.0, 0.96, 1.0);
    /// Background of an inactive nav link.
    pub const NAV_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
    /// Background of the active section panel.
    pub const PANEL_ACTIVE: Color = Color::srgba(0.02, 0.02, 0.06, 0.55);
    /// Background of inactive section panels.
    pub const PANEL_IDLE: Color = Color::srgba(0.02, 0.02, 0.06, 0.25);
    /// Card and input background.
    pub const SURFACE: Color = Color::srgba(1.0, 1.0, 1.0, 0.06);
    /// Body text colour.
    pub const TEXT: Color = Color::srgb(0.92, 0.93, 0.96);
    /// Secondary text colour.
    pub const MUTED: Color = Color::srgb(0.6, 0.62, 0.7);
    /// Success colour for valid fields and sent state.
    pub const SUCCESS: Color = Color::srgb(0.3, 0.69, 0.31);
    /// Error colour for invalid fields.
    pub const ERROR: Color = Color::srgb(0.96, 0.26, 0.21);
    /// Title font size.
    pub const TITLE_SIZE: f32 = 48.0;
    /// Body font size.
    pub const BODY_SIZE: f32 = 18.0;
}
