use crate::api::{ListingRequest, RedditClient, YouTubeClient};
use crate::components::{current_search, AlertBanner, FilterBar, PlayerPanel};
use crate::config::Settings;
use crate::error::FlockError;
use crate::filter::{merge_options, TokenSet};
use crate::playlist::{build_playlist, Playlist};
use crate::query::{parameter_by_name, SUBREDDITS_PARAM};
use dioxus::prelude::*;

async fn load_playlist(settings: &Settings, request: &ListingRequest) -> Result<Playlist, FlockError> {
    let listing = RedditClient::from_settings(settings)
        .fetch_listing(request)
        .await?;
    let mut playlist = build_playlist(&listing)?;
    if let Some(youtube) = YouTubeClient::from_settings(settings) {
        youtube.fill_titles(&mut playlist.tracks).await;
    }
    tracing::info!(
        "built playlist of {} tracks from r/{}",
        playlist.tracks.len(),
        request.subreddits.join("+")
    );
    Ok(playlist)
}

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Empty,
    Ready(Playlist),
    Failed(String),
}

#[component]
pub fn AppShell() -> Element {
    let settings = use_hook(Settings::load);
    let search = use_hook(current_search);
    let mut failure_dismissed = use_signal(|| false);

    use_context_provider(|| settings.clone());

    let field = parameter_by_name(&search, SUBREDDITS_PARAM).unwrap_or_default();
    let options = merge_options(&settings.suggested_subreddits, &TokenSet::parse(&field));

    let playlist = {
        let settings = settings.clone();
        let request = ListingRequest::from_search(&search, &settings);
        use_resource(move || {
            let settings = settings.clone();
            let request = request.clone();
            async move {
                let request = request?;
                Some(load_playlist(&settings, &request).await)
            }
        })
    };

    let state = match &*playlist.read() {
        None => PageState::Loading,
        Some(None) => PageState::Empty,
        Some(Some(Ok(playlist))) => PageState::Ready(playlist.clone()),
        Some(Some(Err(err))) => PageState::Failed(err.to_string()),
    };

    rsx! {
        div { class: "container",
            header { class: "page-header",
                h1 { class: "brand", "flock" }
                FilterBar { initial: field, options }
            }
            match state {
                PageState::Loading => rsx! {
                    p { class: "loading", "Gathering the flock..." }
                },
                PageState::Empty => rsx! {},
                PageState::Ready(playlist) => rsx! {
                    PlayerPanel { playlist }
                },
                PageState::Failed(message) => rsx! {
                    div { class: "errors",
                        if !failure_dismissed() {
                            AlertBanner {
                                message,
                                on_dismiss: move |_| failure_dismissed.set(true),
                            }
                        }
                    }
                },
            }
        }
    }
}
