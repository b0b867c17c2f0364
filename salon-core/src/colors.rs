//! Deterministic display colors per event category.
//!
//! One static table shared by every render surface, so the same event
//! never shows two different colors in the same render pass. The colors
//! are reconstructible display state; they are never persisted.

/// Background/text/border triple for one event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

const WEDDING: ColorScheme = ColorScheme {
    background: "#DC2626",
    text: "white",
    border: "#B91C1C",
};

const ENGAGEMENT: ColorScheme = ColorScheme {
    background: "#7C3AED",
    text: "white",
    border: "#6D28D9",
};

const HENNA_NIGHT: ColorScheme = ColorScheme {
    background: "#2563EB",
    text: "white",
    border: "#1D4ED8",
};

const DEFAULT: ColorScheme = ColorScheme {
    background: "#4F46E5",
    text: "white",
    border: "#4338CA",
};

/// Colors for an event category wire code.
///
/// Total over all inputs: unknown codes get the default triple so display
/// never fails, but an unknown code is still a validation failure upstream.
pub fn colors_for(event_type: i32) -> &'static ColorScheme {
    match event_type {
        0 => &WEDDING,
        1 => &ENGAGEMENT,
        2 => &HENNA_NIGHT,
        _ => &DEFAULT,
    }
}
