//! Color palette: dark slate surfaces with a blue accent

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(2, 6, 23);
pub const CARD_BG: Color = Color::Rgb(15, 23, 42);
pub const SURFACE: Color = Color::Rgb(30, 41, 59);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Rgb(59, 130, 246);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const ACCENT_DEEP: Color = Color::Rgb(37, 99, 235);
pub const ACCENT_INDIGO: Color = Color::Rgb(99, 102, 241);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(34, 197, 94);
pub const STATUS_RED: Color = Color::Rgb(239, 68, 68);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const HEARTBEAT_PINK: Color = Color::Rgb(244, 114, 182);
