use dioxus::prelude::*;

use crate::components::{attach_player_api, AlertBanner, PagePlayer, TrackList};
use crate::config::Settings;
use crate::player_sync::{Banner, PlayerSync};
use crate::playlist::Playlist;

/// Embedded player, error banners and the track list for one playlist.
#[component]
pub fn PlayerPanel(playlist: Playlist) -> Element {
    let settings = use_context::<Settings>();
    let sync = {
        let tracks = playlist.tracks.clone();
        let title_prefix = settings.title_prefix.clone();
        use_signal(move || PlayerSync::<PagePlayer>::new(tracks, title_prefix))
    };
    use_context_provider(|| sync);

    // The embed iframe has to exist before the API can attach to it.
    {
        let settings = settings.clone();
        let mut sync = sync;
        use_effect(move || {
            if let Err(err) = attach_player_api(sync, &settings) {
                tracing::warn!("could not attach player: {err}");
                sync.write().report(err.to_string());
            }
        });
    }

    let (title, banners, now_playing) = {
        let state = sync.read();
        (
            state.document_title().map(str::to_string),
            state.banners().iter().cloned().collect::<Vec<Banner>>(),
            state.now_playing(),
        )
    };

    rsx! {
        if let Some(title) = title {
            document::Title { "{title}" }
        }
        div { class: "errors",
            for banner in banners {
                {
                    let id = banner.id;
                    let mut sync = sync;
                    rsx! {
                        AlertBanner {
                            key: "{id}",
                            message: banner.message,
                            on_dismiss: move |_| {
                                sync.write().dismiss_banner(id);
                            },
                        }
                    }
                }
            }
        }
        div { class: "player-frame",
            iframe {
                id: "{settings.player_element_id}",
                src: "{playlist.embed_url}",
                width: "640",
                height: "360",
                "frameborder": "0",
                allowfullscreen: true,
            }
        }
        TrackList { tracks: playlist.tracks.clone(), now_playing }
    }
}
