use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod events;
mod filter;
mod player_sync;
mod playlist;
mod query;
mod utils;

use components::AppShell;

const PAGE_CSS: &str = r#"
.track { padding: 0.4rem 0.6rem; border-bottom: 1px solid #eee; }
.track.nowPlaying { background: #fcf3d9; font-weight: 600; }
.playTrack { cursor: pointer; display: flex; gap: 0.6rem; }
.commentNum { margin-left: auto; }
.chosen-choices { display: flex; flex-wrap: wrap; gap: 0.3rem; list-style: none; padding: 0; }
.chosen-results { list-style: none; padding: 0; max-height: 12rem; overflow-y: auto; }
.active-result { cursor: pointer; }
"#;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger unavailable: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Style { "{PAGE_CSS}" }

        AppShell {}
    }
}
