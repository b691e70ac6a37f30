//! Sticky header scroll physics.
//!
//! The header condenses once the page has scrolled past a threshold, hides
//! when the shopper keeps scrolling down past a second threshold, and
//! reappears the moment they scroll back up. Input arrives as the current
//! vertical offset; callers throttle delivery (the original samples at
//! 100 ms) with [`crate::util::debounce::Throttle`].

/// Offset past which the header renders condensed.
pub const CONDENSE_THRESHOLD_PX: f64 = 100.0;

/// Offset past which downward scrolling hides the header.
pub const HIDE_THRESHOLD_PX: f64 = 200.0;

/// Whether the header is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

/// What the renderer applies after a scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderFrame {
    pub condensed: bool,
    pub visibility: HeaderVisibility,
}

/// Scroll-direction state machine for the sticky header.
#[derive(Debug, Default)]
pub struct StickyHeader {
    last_offset: f64,
}

impl StickyHeader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current vertical offset and get the resulting header frame.
    pub fn on_scroll(&mut self, offset: f64) -> HeaderFrame {
        let frame = if offset > CONDENSE_THRESHOLD_PX {
            let visibility = if offset > self.last_offset && offset > HIDE_THRESHOLD_PX {
                HeaderVisibility::Hidden
            } else {
                HeaderVisibility::Shown
            };
            HeaderFrame {
                condensed: true,
                visibility,
            }
        } else {
            HeaderFrame {
                condensed: false,
                visibility: HeaderVisibility::Shown,
            }
        };

        self.last_offset = offset;
        frame
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
