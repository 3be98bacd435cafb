//! Compact audio player: play/pause, elapsed and total time, seekable
//! progress track.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use filepeek_core::{MediaSignal, format_time};

use super::ErrorNotice;
use super::hook::{PlaybackHandle, use_playback};
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/viewer/audio.module.css");

#[component]
pub fn AudioPlayer(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] name: Signal<String>,
) -> impl IntoView {
    let playback = use_playback(src);
    let controller = playback.controller;

    let error = Memo::new(move |_| controller.with(|c| c.state().error().cloned()));

    view! {
        <div class=css::container>
            {move || match error.get() {
                Some(err) => view! { <ErrorNotice error=err /> }.into_any(),
                None => view! { <PlayerBody playback=playback name=name /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PlayerBody(playback: PlaybackHandle, name: Signal<String>) -> impl IntoView {
    let controller = playback.controller;
    let track_ref = NodeRef::<html::Div>::new();

    let is_loading = Memo::new(move |_| controller.with(|c| c.state().is_loading()));
    let is_playing =
        Memo::new(move |_| controller.with(|c| c.state().is_playing() || c.state().is_starting()));
    let can_toggle = Memo::new(move |_| controller.with(|c| c.state().timeline().is_some()));
    let current_time = Memo::new(move |_| controller.with(|c| c.state().current_time()));
    let duration = Memo::new(move |_| controller.with(|c| c.state().duration()));
    let percent = Memo::new(move |_| controller.with(|c| c.state().progress_ratio() * 100.0));

    let on_track_click = move |ev: web_sys::MouseEvent| {
        if let Some(track) = track_ref.get_untracked() {
            playback.seek_to_pointer(&ev, &track);
        }
    };

    // Dragging with the primary button held keeps seeking
    let on_track_drag = move |ev: web_sys::MouseEvent| {
        if ev.buttons() != 1 {
            return;
        }
        if let Some(track) = track_ref.get_untracked() {
            playback.seek_to_pointer(&ev, &track);
        }
    };

    view! {
        <MediaElement playback=playback />

        <div class=css::fileName>
            <span class=css::fileIcon><Icon icon=ic::FILE_AUDIO /></span>
            <span class=css::fileNameText>{move || name.get()}</span>
        </div>

        <div class=css::controls>
            <button
                class=css::playButton
                disabled=move || !can_toggle.get()
                aria-label=move || if is_playing.get() { "Pause" } else { "Play" }
                on:click=move |_| playback.toggle()
            >
                {move || {
                    let icon = if is_loading.get() {
                        ic::LOADING
                    } else if is_playing.get() {
                        ic::PAUSE
                    } else {
                        ic::PLAY
                    };
                    view! { <Icon icon=icon /> }
                }}
            </button>

            <span class=css::time>{move || format_time(current_time.get())}</span>

            <div
                node_ref=track_ref
                class=css::track
                role="slider"
                aria-label="Audio progress"
                aria-valuemin="0"
                aria-valuemax=move || duration.get().to_string()
                aria-valuenow=move || current_time.get().to_string()
                on:click=on_track_click
                on:mousemove=on_track_drag
            >
                <div class=css::trackBackground>
                    <div class=css::trackFill style:width=move || format!("{}%", percent.get())></div>
                    <div class=css::trackHandle style:left=move || format!("{}%", percent.get())></div>
                </div>
            </div>

            <span class=css::time>{move || format_time(duration.get())}</span>
        </div>
    }
}

/// The `<audio>` element, rebuilt for every session.
///
/// Listeners capture the session they were created for, so events from a
/// replaced element can never reach the controller.
#[component]
fn MediaElement(playback: PlaybackHandle) -> impl IntoView {
    let controller = playback.controller;
    let audio_ref = playback.audio_ref;

    move || {
        let session = playback.session.get();
        let src = controller.with_untracked(|c| c.source().unwrap_or_default().to_string());
        let forward = move |signal: MediaSignal| playback.signal(session, signal);

        view! {
            <audio
                node_ref=audio_ref
                src=src
                preload="metadata"
                on:loadedmetadata=move |ev| {
                    if let Some(media) = dom::media_target(&ev) {
                        forward(MediaSignal::MetadataReady { duration: media.duration() });
                    }
                }
                on:canplay=move |_| forward(MediaSignal::CanPlay)
                on:timeupdate=move |ev| {
                    if let Some(media) = dom::media_target(&ev) {
                        forward(MediaSignal::TimeProgress { time: media.current_time() });
                    }
                }
                on:ended=move |_| forward(MediaSignal::Ended)
                on:pause=move |_| forward(MediaSignal::PausedByPlatform)
                on:error=move |_| forward(MediaSignal::LoadFailed)
            ></audio>
        }
    }
}
