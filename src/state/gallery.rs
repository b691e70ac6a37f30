//! Product gallery selection and hero carousel.
//!
//! Thumbnail clicks swap the main media slot between images and videos;
//! image thumbnails are served at a small size and swapped to the full-size
//! rendition for the main slot. The hero carousel is plain wrap-around
//! index math over a fixed slide count.

/// Thumbnail rendition suffix in platform image URLs.
const THUMB_SIZE_SUFFIX: &str = "_200x";

/// Main-slot rendition suffix.
const FULL_SIZE_SUFFIX: &str = "_1000x";

/// Kind of media a thumbnail points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// What the main media slot should render after a thumbnail click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSelection {
    pub kind: MediaKind,
    /// Image: full-size image URL. Video: the video source URL.
    pub src: String,
}

impl MediaSelection {
    /// Build the main-slot selection from a clicked thumbnail.
    ///
    /// Image thumbnails have their rendition suffix upgraded; video
    /// thumbnails pass their source through untouched.
    #[must_use]
    pub fn from_thumbnail(kind: MediaKind, src: &str) -> Self {
        let src = match kind {
            MediaKind::Image => full_size_src(src),
            MediaKind::Video => src.to_owned(),
        };
        Self { kind, src }
    }
}

/// Upgrade a thumbnail image URL to its full-size rendition.
///
/// URLs without the thumbnail suffix come back unchanged.
#[must_use]
pub fn full_size_src(thumb_src: &str) -> String {
    thumb_src.replacen(THUMB_SIZE_SUFFIX, FULL_SIZE_SUFFIX, 1)
}

// =============================================================================
// HERO CAROUSEL
// =============================================================================

/// Wrap-around slide cursor for the hero carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting on the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Index of the active slide.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Step back one slide, wrapping before the start.
    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Jump to `index` (dot navigation). Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.active = index;
        }
        self.active
    }

    fn step(&mut self, direction: isize) -> usize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as isize;
        let next = (self.active as isize + direction).rem_euclid(len);
        self.active = usize::try_from(next).unwrap_or(0);
        self.active
    }
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
