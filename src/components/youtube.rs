//! Bindings to the YouTube iframe API and the wiring from its callbacks into
//! the page's `PlayerSync`.

use dioxus::prelude::*;

use crate::config::Settings;
use crate::error::FlockError;
use crate::player_sync::{PlayerSync, PlaylistPlayer};

#[cfg(target_arch = "wasm32")]
use crate::components::browser::load_iframe_api;
#[cfg(target_arch = "wasm32")]
use crate::events::Subscribers;
#[cfg(target_arch = "wasm32")]
use crate::player_sync::{PlayerEvent, PlayerState};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    /// `YT.Player`
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    pub type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player")]
    fn new(element_id: &str, options: &JsValue) -> YtPlayer;

    #[wasm_bindgen(method, js_name = playVideoAt)]
    fn js_play_video_at(this: &YtPlayer, index: u32);

    #[wasm_bindgen(method, js_name = getPlaylistIndex)]
    fn js_playlist_index(this: &YtPlayer) -> f64;
}

#[cfg(target_arch = "wasm32")]
impl PlaylistPlayer for YtPlayer {
    fn play_video_at(&mut self, index: usize) {
        self.js_play_video_at(index as u32);
    }

    fn playlist_index(&self) -> Option<usize> {
        let index = self.js_playlist_index();
        (index.is_finite() && index >= 0.0).then_some(index as usize)
    }
}

#[cfg(target_arch = "wasm32")]
pub type PagePlayer = YtPlayer;

/// Outside the browser there is no player to attach; the handle stays
/// uninitialized.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct DetachedPlayer;

#[cfg(not(target_arch = "wasm32"))]
impl PlaylistPlayer for DetachedPlayer {
    fn play_video_at(&mut self, _index: usize) {}

    fn playlist_index(&self) -> Option<usize> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type PagePlayer = DetachedPlayer;

#[cfg(target_arch = "wasm32")]
fn js_error(err: JsValue) -> FlockError {
    FlockError::Browser(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn event_code(event: &JsValue) -> Option<i32> {
    js_sys::Reflect::get(event, &"data".into())
        .ok()
        .and_then(|value| value.as_f64())
        .map(|code| code as i32)
}

/// Install `onYouTubeIframeAPIReady`, then load the API script. When the API
/// calls back, a `YT.Player` is attached to the embed iframe and its
/// `onReady`/`onError`/`onStateChange` events feed `sync`.
#[cfg(target_arch = "wasm32")]
pub fn attach_player_api(
    sync: Signal<PlayerSync<PagePlayer>>,
    settings: &Settings,
) -> Result<(), FlockError> {
    let runtime = Runtime::current();
    let events = Rc::new(RefCell::new(Subscribers::<PlayerEvent>::new()));

    {
        let mut sync = sync;
        let runtime = runtime.clone();
        events.borrow_mut().subscribe(move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            sync.write().dispatch(event);
        });
    }

    let on_ready = {
        let mut sync = sync;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            let _guard = RuntimeGuard::new(runtime.clone());
            match js_sys::Reflect::get(&event, &"target".into()) {
                Ok(target) if target.is_object() => {
                    sync.write().on_api_ready(target.unchecked_into::<YtPlayer>());
                }
                _ => tracing::warn!("onReady fired without a player target"),
            }
        }) as Box<dyn FnMut(JsValue)>)
    };

    let on_error = {
        let events = events.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            let code = event_code(&event).unwrap_or(-1);
            events.borrow_mut().emit(&PlayerEvent::ApiError(code));
        }) as Box<dyn FnMut(JsValue)>)
    };

    let on_state_change = {
        let events = events.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            let state = PlayerState::from_code(event_code(&event).unwrap_or(-1));
            events.borrow_mut().emit(&PlayerEvent::StateChange(state));
        }) as Box<dyn FnMut(JsValue)>)
    };

    let handlers = js_sys::Object::new();
    js_sys::Reflect::set(&handlers, &"onReady".into(), on_ready.as_ref()).map_err(js_error)?;
    js_sys::Reflect::set(&handlers, &"onError".into(), on_error.as_ref()).map_err(js_error)?;
    js_sys::Reflect::set(&handlers, &"onStateChange".into(), on_state_change.as_ref())
        .map_err(js_error)?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"events".into(), &handlers).map_err(js_error)?;

    let element_id = settings.player_element_id.clone();
    let on_api_ready = Closure::wrap(Box::new(move || {
        tracing::info!("iframe API loaded; attaching player to #{element_id}");
        // The player registers itself with the API; `onReady` hands it back.
        let _player = YtPlayer::new(&element_id, &options);
    }) as Box<dyn FnMut()>);

    let win = web_sys::window().ok_or_else(|| FlockError::Browser("no window".to_string()))?;
    js_sys::Reflect::set(&win, &"onYouTubeIframeAPIReady".into(), on_api_ready.as_ref())
        .map_err(js_error)?;

    on_ready.forget();
    on_error.forget();
    on_state_change.forget();
    on_api_ready.forget();

    load_iframe_api(&settings.iframe_api_url)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_player_api(
    _sync: Signal<PlayerSync<PagePlayer>>,
    settings: &Settings,
) -> Result<(), FlockError> {
    tracing::info!(
        "no iframe API outside the browser; #{} stays detached",
        settings.player_element_id
    );
    Ok(())
}
