//! Audio playback state machine.
//!
//! [`PlaybackController`] never touches a media element. It consumes
//! [`MediaSignal`]s reported by the element and returns [`MediaCommand`]s for
//! the caller to execute, which keeps every transition testable without a
//! browser.
//!
//! ## Sessions and tickets
//!
//! Each [`attach`](PlaybackController::attach) starts a new [`SessionId`];
//! signals tagged with an older session are dropped. Starting playback is
//! asynchronous on every platform, so a play request only moves the state to
//! [`PlaybackState::Starting`] and hands out a [`PlayTicket`]. The state
//! commits to `Playing` when the platform confirms that ticket, and a pause
//! issued in between makes the ticket stale.

use crate::error::{MediaKind, PreviewError};
use crate::session::SessionId;

// =============================================================================
// Timeline
// =============================================================================

/// Position and duration of a loaded source, in seconds.
///
/// The position never exceeds a known duration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timeline {
    position: f64,
    duration: Option<f64>,
}

impl Timeline {
    pub fn new(position: f64, duration: Option<f64>) -> Self {
        Self::default().with_duration(duration).at(position)
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Known duration; `None` until metadata arrives or for endless streams.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Position divided by duration, or 0 without a positive duration.
    pub fn progress_ratio(&self) -> f64 {
        match self.duration {
            Some(duration) if duration > 0.0 => self.position / duration,
            _ => 0.0,
        }
    }

    #[must_use]
    fn at(mut self, position: f64) -> Self {
        let position = position.max(0.0);
        self.position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        self
    }

    #[must_use]
    fn with_duration(mut self, duration: Option<f64>) -> Self {
        self.duration = duration.filter(|d| d.is_finite() && *d >= 0.0);
        let position = self.position;
        self.at(position)
    }
}

// =============================================================================
// Playback State
// =============================================================================

/// Identity of one pending play request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlayTicket(u64);

/// Playback state of the attached source.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlaybackState {
    /// No source attached.
    #[default]
    Idle,
    /// Source attached, nothing playable yet.
    Loading,
    /// Playable and stopped (fresh load or after the end was reached).
    Ready(Timeline),
    /// Play requested, waiting for the platform to confirm.
    Starting { timeline: Timeline, ticket: PlayTicket },
    Playing(Timeline),
    Paused(Timeline),
    /// Terminal for this source.
    Errored(PreviewError),
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    pub fn is_starting(&self) -> bool {
        matches!(self, Self::Starting { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        match self {
            Self::Ready(timeline)
            | Self::Starting { timeline, .. }
            | Self::Playing(timeline)
            | Self::Paused(timeline) => Some(timeline),
            Self::Idle | Self::Loading | Self::Errored(_) => None,
        }
    }

    fn timeline_mut(&mut self) -> Option<&mut Timeline> {
        match self {
            Self::Ready(timeline)
            | Self::Starting { timeline, .. }
            | Self::Playing(timeline)
            | Self::Paused(timeline) => Some(timeline),
            Self::Idle | Self::Loading | Self::Errored(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PreviewError> {
        match self {
            Self::Errored(err) => Some(err),
            _ => None,
        }
    }

    /// Current position in seconds (0 when nothing is loaded).
    pub fn current_time(&self) -> f64 {
        self.timeline().map(Timeline::position).unwrap_or(0.0)
    }

    /// Duration in seconds (0 while unknown).
    pub fn duration(&self) -> f64 {
        self.timeline()
            .and_then(Timeline::duration)
            .unwrap_or(0.0)
    }

    pub fn progress_ratio(&self) -> f64 {
        self.timeline()
            .map(Timeline::progress_ratio)
            .unwrap_or(0.0)
    }
}

// =============================================================================
// Signals and Commands
// =============================================================================

/// Notification from the media element (or the play request it returned).
#[derive(Clone, Debug, PartialEq)]
pub enum MediaSignal {
    /// Metadata decoded; a non-finite duration means "unknown".
    MetadataReady { duration: f64 },
    /// Enough data to start, with or without metadata.
    CanPlay,
    TimeProgress { time: f64 },
    Ended,
    LoadFailed,
    /// Paused from outside the player (media keys, OS).
    PausedByPlatform,
    PlayStarted { ticket: PlayTicket },
    PlayRejected { ticket: PlayTicket, reason: String },
}

/// Instruction for the media element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaCommand {
    /// Start playback and report the result with this ticket.
    Play { ticket: PlayTicket },
    Pause,
    /// Jump to an absolute position in seconds.
    Seek { time: f64 },
}

// =============================================================================
// Controller
// =============================================================================

/// Playback controller for one audio source at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackController {
    state: PlaybackState,
    source: Option<String>,
    session: SessionId,
    last_ticket: u64,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Switch to a new source.
    ///
    /// Signals from every earlier session are ignored from now on. The state
    /// resets to `Loading` at position 0 with an unknown duration.
    pub fn attach(&mut self, source: impl Into<String>) -> SessionId {
        self.session = self.session.next();
        self.source = Some(source.into());
        self.state = PlaybackState::Loading;
        self.session
    }

    /// Drop the current source.
    pub fn detach(&mut self) {
        self.session = self.session.next();
        self.source = None;
        self.state = PlaybackState::Idle;
    }

    /// Play/pause button.
    ///
    /// Returns the command the media element must run, or `None` while
    /// nothing is playable.
    pub fn toggle(&mut self) -> Option<MediaCommand> {
        match self.state {
            PlaybackState::Playing(timeline) | PlaybackState::Starting { timeline, .. } => {
                self.state = PlaybackState::Paused(timeline);
                Some(MediaCommand::Pause)
            }
            PlaybackState::Ready(timeline) | PlaybackState::Paused(timeline) => {
                self.last_ticket += 1;
                let ticket = PlayTicket(self.last_ticket);
                self.state = PlaybackState::Starting { timeline, ticket };
                Some(MediaCommand::Play { ticket })
            }
            PlaybackState::Idle | PlaybackState::Loading | PlaybackState::Errored(_) => None,
        }
    }

    /// Seek to a fraction of the duration.
    ///
    /// Ignored until a positive duration is known.
    pub fn seek(&mut self, ratio: f64) -> Option<MediaCommand> {
        if !ratio.is_finite() {
            return None;
        }
        let timeline = self.state.timeline_mut()?;
        let duration = timeline.duration().filter(|d| *d > 0.0)?;
        let time = ratio.clamp(0.0, 1.0) * duration;
        *timeline = timeline.at(time);
        Some(MediaCommand::Seek { time })
    }

    /// Apply a signal from the media element.
    ///
    /// Returns `false` when the signal was stale or had no effect in the
    /// current state.
    pub fn handle(&mut self, session: SessionId, signal: MediaSignal) -> bool {
        if session != self.session {
            return false;
        }

        match signal {
            MediaSignal::MetadataReady { duration } => {
                if self.state.is_loading() {
                    self.state = PlaybackState::Ready(Timeline::new(0.0, Some(duration)));
                    return true;
                }
                match self.state.timeline_mut() {
                    Some(timeline) => {
                        *timeline = timeline.with_duration(Some(duration));
                        true
                    }
                    None => false,
                }
            }
            MediaSignal::CanPlay => {
                if self.state.is_loading() {
                    self.state = PlaybackState::Ready(Timeline::default());
                    true
                } else {
                    false
                }
            }
            MediaSignal::TimeProgress { time } => {
                if !time.is_finite() {
                    return false;
                }
                match self.state.timeline_mut() {
                    Some(timeline) => {
                        *timeline = timeline.at(time);
                        true
                    }
                    None => false,
                }
            }
            MediaSignal::Ended => match self.state.timeline().copied() {
                Some(timeline) => {
                    self.state = PlaybackState::Ready(timeline.at(0.0));
                    true
                }
                None => false,
            },
            MediaSignal::LoadFailed => {
                if matches!(self.state, PlaybackState::Idle) {
                    return false;
                }
                self.state = PlaybackState::Errored(PreviewError::LoadFailure(MediaKind::Audio));
                true
            }
            MediaSignal::PausedByPlatform => match self.state {
                PlaybackState::Playing(timeline) | PlaybackState::Starting { timeline, .. } => {
                    self.state = PlaybackState::Paused(timeline);
                    true
                }
                _ => false,
            },
            MediaSignal::PlayStarted { ticket } => match self.state {
                PlaybackState::Starting {
                    timeline,
                    ticket: pending,
                } if pending == ticket => {
                    self.state = PlaybackState::Playing(timeline);
                    true
                }
                _ => false,
            },
            MediaSignal::PlayRejected { ticket, reason } => match self.state {
                PlaybackState::Starting { ticket: pending, .. } if pending == ticket => {
                    self.state =
                        PlaybackState::Errored(PreviewError::PlaybackStartFailure(reason));
                    true
                }
                _ => false,
            },
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Map a pointer position on the progress track to a ratio in `[0, 1]`.
///
/// Returns `None` for a collapsed track.
pub fn track_ratio(pointer_x: f64, track_left: f64, track_width: f64) -> Option<f64> {
    if !track_width.is_finite() || track_width <= 0.0 || !pointer_x.is_finite() {
        return None;
    }
    Some(((pointer_x - track_left) / track_width).clamp(0.0, 1.0))
}

/// Format seconds as `m:ss`.
///
/// NaN, infinite and negative values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> (PlaybackController, SessionId) {
        let mut controller = PlaybackController::new();
        let session = controller.attach("song.mp3");
        assert!(controller.handle(session, MediaSignal::MetadataReady { duration }));
        (controller, session)
    }

    fn play(controller: &mut PlaybackController, session: SessionId) {
        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert!(controller.handle(session, MediaSignal::PlayStarted { ticket }));
    }

    // =========================================================================
    // Loading Tests
    // =========================================================================

    #[test]
    fn test_attach_starts_loading() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.state(), &PlaybackState::Idle);

        controller.attach("a.wav");
        let state = controller.state();
        assert!(state.is_loading());
        assert!(!state.is_playing());
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.duration(), 0.0);
        assert_eq!(state.error(), None);
        assert_eq!(controller.source(), Some("a.wav"));
    }

    #[test]
    fn test_metadata_sets_duration() {
        let (controller, _) = loaded(200.0);
        assert_eq!(controller.state().duration(), 200.0);
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn test_can_play_clears_loading_without_metadata() {
        let mut controller = PlaybackController::new();
        let session = controller.attach("a.wav");
        assert!(controller.handle(session, MediaSignal::CanPlay));
        assert_eq!(controller.state(), &PlaybackState::Ready(Timeline::default()));

        // Metadata arriving later fills in the duration.
        assert!(controller.handle(session, MediaSignal::MetadataReady { duration: 30.0 }));
        assert_eq!(controller.state().duration(), 30.0);

        // A second canplay (after seeking) changes nothing.
        assert!(!controller.handle(session, MediaSignal::CanPlay));
    }

    #[test]
    fn test_non_finite_duration_is_unknown() {
        let (mut controller, _) = loaded(f64::INFINITY);
        assert_eq!(controller.state().duration(), 0.0);
        assert_eq!(controller.state().progress_ratio(), 0.0);
        assert_eq!(controller.seek(0.5), None);
    }

    #[test]
    fn test_load_error() {
        let mut controller = PlaybackController::new();
        let session = controller.attach("broken.mp3");
        assert!(controller.handle(session, MediaSignal::LoadFailed));
        let state = controller.state();
        assert!(!state.is_loading());
        assert!(!state.is_playing());
        assert_eq!(
            state.error(),
            Some(&PreviewError::LoadFailure(MediaKind::Audio))
        );
        assert_eq!(controller.toggle(), None);
    }

    // =========================================================================
    // Toggle Tests
    // =========================================================================

    #[test]
    fn test_toggle_is_noop_while_loading() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.toggle(), None);
        controller.attach("a.wav");
        assert_eq!(controller.toggle(), None);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_play_commits_only_on_confirmation() {
        let (mut controller, session) = loaded(10.0);

        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert!(controller.state().is_starting());
        assert!(!controller.state().is_playing());

        assert!(controller.handle(session, MediaSignal::PlayStarted { ticket }));
        assert!(controller.state().is_playing());
    }

    #[test]
    fn test_pause_is_immediate() {
        let (mut controller, session) = loaded(10.0);
        play(&mut controller, session);
        controller.handle(session, MediaSignal::TimeProgress { time: 4.0 });

        assert_eq!(controller.toggle(), Some(MediaCommand::Pause));
        assert_eq!(
            controller.state(),
            &PlaybackState::Paused(Timeline::new(4.0, Some(10.0)))
        );
    }

    #[test]
    fn test_play_rejection_reports_error() {
        let (mut controller, session) = loaded(10.0);
        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert!(controller.handle(
            session,
            MediaSignal::PlayRejected {
                ticket,
                reason: "NotAllowedError".into(),
            }
        ));
        assert!(!controller.state().is_playing());
        assert_eq!(
            controller.state().error(),
            Some(&PreviewError::PlaybackStartFailure("NotAllowedError".into()))
        );
    }

    #[test]
    fn test_pause_during_start_makes_ticket_stale() {
        let (mut controller, session) = loaded(10.0);
        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert_eq!(controller.toggle(), Some(MediaCommand::Pause));

        // The aborted start resolves late either way; neither outcome applies.
        assert!(!controller.handle(session, MediaSignal::PlayStarted { ticket }));
        assert!(!controller.handle(
            session,
            MediaSignal::PlayRejected {
                ticket,
                reason: "AbortError".into(),
            }
        ));
        assert!(matches!(controller.state(), PlaybackState::Paused(_)));
    }

    #[test]
    fn test_old_ticket_cannot_confirm_new_start() {
        let (mut controller, session) = loaded(10.0);
        let Some(MediaCommand::Play { ticket: first }) = controller.toggle() else {
            panic!("expected a play command");
        };
        controller.toggle();
        let Some(MediaCommand::Play { ticket: second }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert_ne!(first, second);
        assert!(!controller.handle(session, MediaSignal::PlayStarted { ticket: first }));
        assert!(controller.state().is_starting());
        assert!(controller.handle(session, MediaSignal::PlayStarted { ticket: second }));
        assert!(controller.state().is_playing());
    }

    #[test]
    fn test_platform_pause() {
        let (mut controller, session) = loaded(10.0);
        play(&mut controller, session);
        assert!(controller.handle(session, MediaSignal::PausedByPlatform));
        assert!(matches!(controller.state(), PlaybackState::Paused(_)));
        assert!(!controller.handle(session, MediaSignal::PausedByPlatform));
    }

    #[test]
    fn test_platform_pause_while_starting() {
        let (mut controller, session) = loaded(10.0);
        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        assert!(controller.state().is_starting());

        assert!(controller.handle(session, MediaSignal::PausedByPlatform));
        assert!(matches!(controller.state(), PlaybackState::Paused(_)));

        // The start that was pending when the element paused no longer applies
        assert!(!controller.handle(session, MediaSignal::PlayStarted { ticket }));
        assert!(matches!(controller.state(), PlaybackState::Paused(_)));
    }

    // =========================================================================
    // Progress Tests
    // =========================================================================

    #[test]
    fn test_progress_updates_and_clamps() {
        let (mut controller, session) = loaded(200.0);
        play(&mut controller, session);

        controller.handle(session, MediaSignal::TimeProgress { time: 50.0 });
        assert_eq!(controller.state().current_time(), 50.0);
        assert_eq!(controller.state().progress_ratio(), 0.25);

        controller.handle(session, MediaSignal::TimeProgress { time: 250.0 });
        assert_eq!(controller.state().current_time(), 200.0);

        assert!(!controller.handle(session, MediaSignal::TimeProgress { time: f64::NAN }));
        assert_eq!(controller.state().current_time(), 200.0);
    }

    #[test]
    fn test_progress_ignored_while_loading() {
        let mut controller = PlaybackController::new();
        let session = controller.attach("a.wav");
        assert!(!controller.handle(session, MediaSignal::TimeProgress { time: 3.0 }));
        assert_eq!(controller.state().current_time(), 0.0);
    }

    #[test]
    fn test_ended_rewinds() {
        let (mut controller, session) = loaded(10.0);
        play(&mut controller, session);
        controller.handle(session, MediaSignal::TimeProgress { time: 10.0 });

        assert!(controller.handle(session, MediaSignal::Ended));
        assert_eq!(
            controller.state(),
            &PlaybackState::Ready(Timeline::new(0.0, Some(10.0)))
        );
        assert!(matches!(controller.toggle(), Some(MediaCommand::Play { .. })));
    }

    // =========================================================================
    // Seek Tests
    // =========================================================================

    #[test]
    fn test_seek_maps_ratio_to_time() {
        let (mut controller, _) = loaded(200.0);

        assert_eq!(controller.seek(0.5), Some(MediaCommand::Seek { time: 100.0 }));
        assert_eq!(controller.state().current_time(), 100.0);

        assert_eq!(controller.seek(0.0), Some(MediaCommand::Seek { time: 0.0 }));
        assert_eq!(controller.state().current_time(), 0.0);

        assert_eq!(controller.seek(1.0), Some(MediaCommand::Seek { time: 200.0 }));
        assert_eq!(controller.state().current_time(), 200.0);
    }

    #[test]
    fn test_seek_clamps_and_rejects_nan() {
        let (mut controller, _) = loaded(60.0);
        assert_eq!(controller.seek(1.5), Some(MediaCommand::Seek { time: 60.0 }));
        assert_eq!(controller.seek(-1.0), Some(MediaCommand::Seek { time: 0.0 }));
        assert_eq!(controller.seek(f64::NAN), None);
    }

    #[test]
    fn test_seek_ignored_without_duration() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.seek(0.5), None);

        let session = controller.attach("a.wav");
        assert_eq!(controller.seek(0.5), None);

        controller.handle(session, MediaSignal::CanPlay);
        assert_eq!(controller.seek(0.5), None);

        controller.handle(session, MediaSignal::MetadataReady { duration: 0.0 });
        assert_eq!(controller.seek(0.5), None);
    }

    #[test]
    fn test_seek_keeps_playing_state() {
        let (mut controller, session) = loaded(100.0);
        play(&mut controller, session);
        controller.seek(0.3);
        assert!(controller.state().is_playing());
        assert!((controller.state().current_time() - 30.0).abs() < 1e-9);
    }

    // =========================================================================
    // Source Switching Tests
    // =========================================================================

    #[test]
    fn test_switching_source_while_playing_resets() {
        let (mut controller, session) = loaded(120.0);
        play(&mut controller, session);
        controller.handle(session, MediaSignal::TimeProgress { time: 42.0 });

        let next = controller.attach("other.ogg");
        assert_ne!(session, next);
        let state = controller.state();
        assert!(!state.is_playing());
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.duration(), 0.0);
        assert!(state.is_loading());
    }

    #[test]
    fn test_stale_session_signals_are_dropped() {
        let (mut controller, old) = loaded(120.0);
        let Some(MediaCommand::Play { ticket }) = controller.toggle() else {
            panic!("expected a play command");
        };
        let new = controller.attach("other.ogg");

        assert!(!controller.handle(old, MediaSignal::TimeProgress { time: 9.0 }));
        assert!(!controller.handle(old, MediaSignal::MetadataReady { duration: 120.0 }));
        assert!(!controller.handle(old, MediaSignal::LoadFailed));
        assert!(!controller.handle(old, MediaSignal::PlayStarted { ticket }));
        assert!(controller.state().is_loading());

        assert!(controller.handle(new, MediaSignal::MetadataReady { duration: 5.0 }));
        assert_eq!(controller.state().duration(), 5.0);
    }

    #[test]
    fn test_detach() {
        let (mut controller, session) = loaded(10.0);
        controller.detach();
        assert_eq!(controller.state(), &PlaybackState::Idle);
        assert_eq!(controller.source(), None);
        assert!(!controller.handle(session, MediaSignal::CanPlay));
    }

    // =========================================================================
    // Helper Tests
    // =========================================================================

    #[test]
    fn test_track_ratio() {
        assert_eq!(track_ratio(150.0, 100.0, 200.0), Some(0.25));
        assert_eq!(track_ratio(50.0, 100.0, 200.0), Some(0.0));
        assert_eq!(track_ratio(400.0, 100.0, 200.0), Some(1.0));
        assert_eq!(track_ratio(150.0, 100.0, 0.0), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
    }
}
