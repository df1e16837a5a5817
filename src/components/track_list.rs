use dioxus::prelude::*;

use crate::components::PagePlayer;
use crate::player_sync::{PlayerEvent, PlayerSync};
use crate::playlist::Track;

#[component]
pub fn TrackList(tracks: Vec<Track>, now_playing: Option<usize>) -> Element {
    rsx! {
        div { class: "tracks",
            for track in tracks {
                {
                    let play_index = track.play_index;
                    rsx! {
                        TrackRow {
                            key: "{play_index}",
                            is_now_playing: now_playing == Some(play_index),
                            track,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrackRow(track: Track, is_now_playing: bool) -> Element {
    let mut sync = use_context::<Signal<PlayerSync<PagePlayer>>>();
    let play_index = track.play_index;
    let position = play_index + 1;
    let title = track.video_title.clone().unwrap_or_else(|| track.title.clone());

    rsx! {
        div {
            class: if is_now_playing { "track nowPlaying" } else { "track" },
            "data-playnum": "{play_index}",
            div {
                class: "playTrack",
                onclick: move |_| sync.write().dispatch(&PlayerEvent::TrackClicked(play_index)),
                span { class: "playNum", "{position}." }
                span { class: "playTitle", title: "{track.title}", "{title}" }
                span { class: "score", "{track.score}" }
                // Opening the thread must not start the track.
                a {
                    class: "commentNum",
                    href: "{track.permalink}",
                    target: "_blank",
                    rel: "noopener",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    "{track.comment_count} comments"
                }
            }
        }
    }
}
