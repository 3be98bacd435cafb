//! Reactive wrappers around the playback controller and the image viewport.
//!
//! The controllers are pure state machines; these hooks feed them DOM
//! events tagged with the session that produced them, and run the commands
//! they return against the live media element.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, MouseEvent};

use filepeek_core::{
    ImageSignal, ImageViewport, MediaCommand, MediaSignal, PlaybackController, SessionId,
};

use crate::utils::dom;

// =============================================================================
// Audio
// =============================================================================

/// Signals and element handle for one mounted audio player.
#[derive(Clone, Copy)]
pub struct PlaybackHandle {
    pub controller: RwSignal<PlaybackController>,
    /// Changes on every source switch; the `<audio>` element is keyed on it.
    pub session: Memo<SessionId>,
    pub audio_ref: NodeRef<html::Audio>,
}

impl PlaybackHandle {
    /// Forward an element event, tagged with the session it was wired for.
    pub fn signal(&self, session: SessionId, signal: MediaSignal) {
        self.controller.update(|controller| {
            controller.handle(session, signal);
        });
    }

    /// Play/pause button.
    pub fn toggle(&self) {
        if let Some(command) = self.controller.try_update(|c| c.toggle()).flatten() {
            self.run(command);
        }
    }

    /// Seek to a fraction of the track.
    pub fn seek(&self, ratio: f64) {
        if let Some(command) = self.controller.try_update(|c| c.seek(ratio)).flatten() {
            self.run(command);
        }
    }

    /// Seek to where the pointer sits on the progress track.
    pub fn seek_to_pointer(&self, ev: &MouseEvent, track: &Element) {
        if let Some(ratio) = dom::pointer_ratio(ev, track) {
            self.seek(ratio);
        }
    }

    fn run(&self, command: MediaCommand) {
        let Some(audio) = self.audio_ref.get_untracked() else {
            return;
        };

        match command {
            MediaCommand::Pause => {
                let _ = audio.pause();
            }
            MediaCommand::Seek { time } => audio.set_current_time(time),
            MediaCommand::Play { ticket } => {
                let session = self.session.get_untracked();
                let controller = self.controller;
                let settle = move |signal: MediaSignal| {
                    controller.try_update(|c| c.handle(session, signal));
                };

                match audio.play() {
                    Ok(promise) => spawn_local(async move {
                        match JsFuture::from(promise).await {
                            Ok(_) => settle(MediaSignal::PlayStarted { ticket }),
                            Err(err) => {
                                let reason = dom::js_error_message(&err);
                                web_sys::console::warn_1(
                                    &format!("Playback failed: {}", reason).into(),
                                );
                                settle(MediaSignal::PlayRejected { ticket, reason });
                            }
                        }
                    }),
                    Err(err) => {
                        let reason = dom::js_error_message(&err);
                        web_sys::console::error_1(&format!("Playback failed: {}", reason).into());
                        settle(MediaSignal::PlayRejected { ticket, reason });
                    }
                }
            }
        }
    }
}

/// Pause whatever the element is playing before it is replaced or dropped.
fn release(audio_ref: NodeRef<html::Audio>) {
    if let Some(audio) = audio_ref.try_get_untracked().flatten() {
        let _ = audio.pause();
    }
}

/// Drive a [`PlaybackController`] from a reactive source URL.
///
/// A source change stops the old element, starts a new session and resets
/// the player to loading.
pub fn use_playback(src: Signal<String>) -> PlaybackHandle {
    let controller = RwSignal::new({
        let mut controller = PlaybackController::new();
        controller.attach(src.get_untracked());
        controller
    });
    let session = Memo::new(move |_| controller.with(|c| c.session()));
    let audio_ref = NodeRef::<html::Audio>::new();

    Effect::new(move |prev: Option<String>| {
        let src = src.get();
        if prev.is_some_and(|prev| prev != src) {
            release(audio_ref);
            controller.update(|c| {
                c.attach(src.clone());
            });
        }
        src
    });

    on_cleanup(move || release(audio_ref));

    PlaybackHandle {
        controller,
        session,
        audio_ref,
    }
}

// =============================================================================
// Image
// =============================================================================

/// Signals for one mounted image viewer.
#[derive(Clone, Copy)]
pub struct ViewportHandle {
    pub viewport: RwSignal<ImageViewport>,
    /// Changes on every image switch; the `<img>` element is keyed on it.
    pub session: Memo<SessionId>,
}

impl ViewportHandle {
    /// Forward an `<img>` load/error event.
    pub fn signal(&self, session: SessionId, signal: ImageSignal) {
        self.viewport.update(|viewport| {
            viewport.handle(session, signal);
        });
    }
}

/// Drive an [`ImageViewport`] from a reactive source URL.
///
/// The zoom level survives image switches; the load status does not.
pub fn use_viewport(src: Signal<String>) -> ViewportHandle {
    let viewport = RwSignal::new({
        let mut viewport = ImageViewport::new();
        viewport.attach();
        viewport
    });
    let session = Memo::new(move |_| viewport.with(|v| v.session()));

    Effect::new(move |prev: Option<String>| {
        let src = src.get();
        if prev.as_ref().is_some_and(|prev| *prev != src) {
            viewport.update(|v| {
                v.attach();
            });
        }
        src
    });

    ViewportHandle { viewport, session }
}
