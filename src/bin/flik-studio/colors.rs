//! Color constants for the page, tour overlay and cursor.

use eframe::egui::Color32;

// Page background
pub const BACKGROUND: Color32 = Color32::from_rgb(6, 9, 15);
pub const BACKGROUND_GLOW: Color32 = Color32::from_rgba_premultiplied(4, 30, 23, 26);

// Glass cards
pub const GLASS_FILL: Color32 = Color32::from_rgba_premultiplied(12, 12, 12, 64);
pub const GLASS_STROKE: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
pub const GLASS_BUTTON_FILL: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);

// Accents
pub const EMERALD_DARK: Color32 = Color32::from_rgb(6, 78, 59);
pub const EMERALD_LIGHT: Color32 = Color32::from_rgb(52, 211, 153);
pub const BLUE_DARK: Color32 = Color32::from_rgb(23, 37, 84);
pub const PURPLE_DARK: Color32 = Color32::from_rgb(46, 16, 101);

// Text
pub const TEXT: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179);

// Tour overlay controls
pub const TOUR_CONTROL_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);
pub const TOUR_CONTROL_STROKE: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51);
pub const TOUR_HINT_TEXT: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179);

// Card overlay gradient end
pub const CARD_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);

// Cursor
pub const CURSOR_RING: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179);
pub const CURSOR_FILL: Color32 = Color32::from_rgba_premultiplied(230, 230, 230, 230);
