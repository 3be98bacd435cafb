//! Source session identity.
//!
//! A controller hands out a new [`SessionId`] every time it is attached to a
//! source. Signals carry the session they were subscribed under, so callbacks
//! still in flight for a previous source are recognized and dropped.

/// Identity of one attached source within a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// The session following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
