/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

/// Widest the page content column grows.
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

/// Distance of the floating navigation bar from the window bottom.
pub const NAV_BOTTOM_MARGIN: f32 = 32.0;

/// Duration of the section fade-in/rise animation in seconds.
pub const REVEAL_DURATION: f32 = 0.6;

/// Vertical distance a section rises while it fades in.
pub const REVEAL_OFFSET: f32 = 20.0;

/// Scale applied to a hovered portfolio card.
pub const CARD_HOVER_SCALE: f32 = 1.02;

/// Duration of the portfolio card hover animation in seconds.
pub const CARD_HOVER_DURATION: f32 = 0.2;

/// Time the panorama takes to ease to a new pan/zoom, in seconds.
pub const TOUR_EASING: f32 = 0.3;

/// Side of the round zoom buttons in the tour overlay.
pub const TOUR_BUTTON_SIZE: f32 = 48.0;

/// Offset between the pointer and the top-left corner of the cursor glyph.
pub const CURSOR_OFFSET: f32 = 16.0;

/// Diameter of the default and button cursor glyphs.
pub const CURSOR_SIZE: f32 = 32.0;

/// Height of the text caret cursor glyph.
pub const CURSOR_CARET_HEIGHT: f32 = 64.0;
