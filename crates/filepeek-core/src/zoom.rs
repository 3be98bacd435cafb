//! Image viewport state.
//!
//! Zoom is a discrete percentage and survives image changes; load status is
//! tracked per source session like the audio controller.

use crate::config::{DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT, ZOOM_STEP_PERCENT};
use crate::error::{MediaKind, PreviewError};
use crate::session::SessionId;

/// Zoom percentage, always a step multiple within 25%–300%.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoomLevel(u16);

impl ZoomLevel {
    /// Snap to the nearest lower step and clamp into range.
    #[must_use]
    pub fn new(percent: u16) -> Self {
        let snapped = percent - percent % ZOOM_STEP_PERCENT;
        Self(snapped.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    #[must_use]
    pub fn percent(self) -> u16 {
        self.0
    }

    /// Scale factor for rendering (100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_PERCENT
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT))
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(ZOOM_STEP_PERCENT).max(MIN_ZOOM_PERCENT))
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// Load status of the displayed image.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImageStatus {
    /// No source attached.
    #[default]
    Empty,
    Loading,
    Loaded,
    /// Terminal for this source.
    Failed(PreviewError),
}

/// Signal from the image element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSignal {
    Loaded,
    Failed,
}

/// Zoom and load state for one image at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageViewport {
    zoom: ZoomLevel,
    status: ImageStatus,
    session: SessionId,
}

impl ImageViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn status(&self) -> &ImageStatus {
        &self.status
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn is_loading(&self) -> bool {
        self.status == ImageStatus::Loading
    }

    pub fn error(&self) -> Option<&PreviewError> {
        match &self.status {
            ImageStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Switch to a new image. The zoom level is kept.
    pub fn attach(&mut self) -> SessionId {
        self.session = self.session.next();
        self.status = ImageStatus::Loading;
        self.session
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZoomLevel::default();
    }

    pub fn can_zoom_in(&self) -> bool {
        !self.zoom.is_max()
    }

    pub fn can_zoom_out(&self) -> bool {
        !self.zoom.is_min()
    }

    /// Apply a load/error signal. Returns `false` for stale or redundant ones.
    pub fn handle(&mut self, session: SessionId, signal: ImageSignal) -> bool {
        if session != self.session || self.status != ImageStatus::Loading {
            return false;
        }
        self.status = match signal {
            ImageSignal::Loaded => ImageStatus::Loaded,
            ImageSignal::Failed => ImageStatus::Failed(PreviewError::LoadFailure(MediaKind::Image)),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // ZoomLevel Tests
    // =========================================================================

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut viewport = ImageViewport::new();
        assert_eq!(viewport.zoom().percent(), 100);

        for _ in 0..6 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom().percent(), 250);

        viewport.zoom_in();
        assert_eq!(viewport.zoom().percent(), 275);
        assert!(viewport.can_zoom_in());

        viewport.zoom_in();
        assert_eq!(viewport.zoom().percent(), 300);
        assert!(!viewport.can_zoom_in());

        viewport.zoom_in();
        assert_eq!(viewport.zoom().percent(), 300);

        viewport.reset_zoom();
        assert_eq!(viewport.zoom().percent(), 100);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut viewport = ImageViewport::new();
        for _ in 0..3 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom().percent(), 25);
        assert!(!viewport.can_zoom_out());

        viewport.zoom_out();
        assert_eq!(viewport.zoom().percent(), 25);

        viewport.reset_zoom();
        assert_eq!(viewport.zoom(), ZoomLevel::default());
    }

    #[test]
    fn test_zoom_level_new_snaps() {
        assert_eq!(ZoomLevel::new(0).percent(), 25);
        assert_eq!(ZoomLevel::new(130).percent(), 125);
        assert_eq!(ZoomLevel::new(1000).percent(), 300);
    }

    #[test]
    fn test_as_factor() {
        assert_eq!(ZoomLevel::default().as_factor(), 1.0);
        assert_eq!(ZoomLevel::new(25).as_factor(), 0.25);
        assert_eq!(ZoomLevel::new(300).as_factor(), 3.0);
    }

    // =========================================================================
    // Load Status Tests
    // =========================================================================

    #[test]
    fn test_load_and_error() {
        let mut viewport = ImageViewport::new();
        let session = viewport.attach();
        assert!(viewport.is_loading());
        assert!(viewport.handle(session, ImageSignal::Loaded));
        assert_eq!(viewport.status(), &ImageStatus::Loaded);

        let session = viewport.attach();
        assert!(viewport.handle(session, ImageSignal::Failed));
        assert!(!viewport.is_loading());
        assert_eq!(
            viewport.error(),
            Some(&PreviewError::LoadFailure(MediaKind::Image))
        );

        // Terminal: a later load event for the same source changes nothing.
        assert!(!viewport.handle(session, ImageSignal::Loaded));
        assert!(viewport.error().is_some());
    }

    #[test]
    fn test_image_change_keeps_zoom_and_clears_error() {
        let mut viewport = ImageViewport::new();
        let first = viewport.attach();
        viewport.zoom_in();
        viewport.handle(first, ImageSignal::Failed);

        let second = viewport.attach();
        assert_eq!(viewport.zoom().percent(), 125);
        assert!(viewport.is_loading());
        assert_eq!(viewport.error(), None);

        assert!(!viewport.handle(first, ImageSignal::Loaded));
        assert!(viewport.is_loading());
        assert!(viewport.handle(second, ImageSignal::Loaded));
    }
}
