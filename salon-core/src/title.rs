//! Derived two-line event titles.
//!
//! The title is a pure function of the host name, the time range and the
//! viewport width. It is recomputed whenever any input changes (the form
//! setters call into here) and never stored as authoritative state.

/// Viewports at or below this width show compact titles (first name only).
pub const NARROW_VIEWPORT_MAX_PX: u32 = 768;

/// An injected viewport-width signal. Display code receives this value
/// instead of reading ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32) -> Viewport {
        Viewport { width_px }
    }

    /// A desktop-sized viewport, the default for terminal use.
    pub fn wide() -> Viewport {
        Viewport { width_px: 1024 }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn is_narrow(&self) -> bool {
        self.width_px <= NARROW_VIEWPORT_MAX_PX
    }
}

/// Compose the two-line display title.
///
/// Line 1 is the host name (first name only on narrow viewports), line 2
/// is `start - finish` when both times are set, otherwise empty. The
/// result is trimmed of trailing whitespace, so a missing time range
/// yields a single line.
pub fn derive_title(
    hosted_name_surname: &str,
    time_start: &str,
    time_finish: &str,
    viewport: Viewport,
) -> String {
    let host = hosted_name_surname.trim();
    let name = if viewport.is_narrow() {
        host.split_whitespace().next().unwrap_or_default()
    } else {
        host
    };

    let time_line = if !time_start.is_empty() && !time_finish.is_empty() {
        format!("{} - {}", time_start, time_finish)
    } else {
        String::new()
    };

    format!("{}\n{}", name, time_line).trim_end().to_string()
}
