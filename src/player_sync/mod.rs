//! Keeps the track list's "now playing" row and the document title in step
//! with the embedded player's playlist position.

use tracing::{debug, info, warn};

use crate::playlist::Track;

#[cfg(test)]
mod tests;

pub const API_ERROR_MESSAGE: &str = "Having difficulty connecting to the YouTube API. The player controls will still work, but certain functions will not. This is most likely due to network problems. Thanks for your patience!";

/// The calls the page needs from an embedded playlist player.
pub trait PlaylistPlayer {
    fn play_video_at(&mut self, index: usize);
    /// `None` when the player has no playlist position yet.
    fn playlist_index(&self) -> Option<usize>;
}

/// Player reference that only becomes usable once the API reports ready.
#[derive(Debug)]
pub enum PlayerHandle<P> {
    Uninitialized,
    Ready(P),
}

impl<P> Default for PlayerHandle<P> {
    fn default() -> Self {
        PlayerHandle::Uninitialized
    }
}

impl<P> PlayerHandle<P> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PlayerHandle::Ready(_))
    }

    pub fn get(&self) -> Option<&P> {
        match self {
            PlayerHandle::Ready(player) => Some(player),
            PlayerHandle::Uninitialized => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut P> {
        match self {
            PlayerHandle::Ready(player) => Some(player),
            PlayerHandle::Uninitialized => None,
        }
    }
}

/// Player states as reported by the iframe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
    Unknown(i32),
}

impl PlayerState {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => PlayerState::Unstarted,
            0 => PlayerState::Ended,
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            3 => PlayerState::Buffering,
            5 => PlayerState::Cued,
            other => PlayerState::Unknown(other),
        }
    }
}

/// Everything besides readiness that the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    ApiError(i32),
    StateChange(PlayerState),
    TrackClicked(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub message: String,
}

/// Error banners, oldest first. Pushing never removes earlier banners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBanners {
    banners: Vec<Banner>,
    next_id: u64,
}

impl ErrorBanners {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.push(Banner {
            id,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.banners.len();
        self.banners.retain(|banner| banner.id != id);
        self.banners.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }
}

pub struct PlayerSync<P> {
    handle: PlayerHandle<P>,
    tracks: Vec<Track>,
    title_prefix: String,
    now_playing: Option<usize>,
    document_title: Option<String>,
    banners: ErrorBanners,
}

impl<P: PlaylistPlayer> PlayerSync<P> {
    pub fn new(tracks: Vec<Track>, title_prefix: impl Into<String>) -> Self {
        Self {
            handle: PlayerHandle::Uninitialized,
            tracks,
            title_prefix: title_prefix.into(),
            now_playing: None,
            document_title: None,
            banners: ErrorBanners::default(),
        }
    }

    /// Take ownership of the player and start the playlist from the top.
    pub fn on_api_ready(&mut self, player: P) {
        if self.handle.is_ready() {
            warn!("player reported ready twice; replacing handle");
        }
        info!("player ready with {} tracks", self.tracks.len());
        self.handle = PlayerHandle::Ready(player);
        if let Some(player) = self.handle.get_mut() {
            player.play_video_at(0);
        }
    }

    pub fn dispatch(&mut self, event: &PlayerEvent) {
        match *event {
            PlayerEvent::ApiError(code) => {
                self.on_api_error(code);
            }
            PlayerEvent::StateChange(state) => self.on_state_change(state),
            PlayerEvent::TrackClicked(play_index) => self.on_track_click(play_index),
        }
    }

    pub fn on_api_error(&mut self, code: i32) -> u64 {
        warn!("YouTube API error {code}");
        self.banners.push(API_ERROR_MESSAGE)
    }

    pub fn on_state_change(&mut self, state: PlayerState) {
        debug!(?state, "player state changed");
        self.sync();
    }

    /// Play the clicked row and resync without waiting for the player's
    /// state callback.
    pub fn on_track_click(&mut self, play_index: usize) {
        match self.handle.get_mut() {
            Some(player) => player.play_video_at(play_index),
            None => debug!(play_index, "track clicked before player ready"),
        }
        self.sync();
    }

    /// Flag the row matching the player's playlist index and retitle the
    /// document. Does nothing until the player is ready.
    pub fn sync(&mut self) {
        let Some(player) = self.handle.get() else {
            return;
        };
        let index = player.playlist_index();
        let row = index.and_then(|i| self.tracks.iter().find(|track| track.play_index == i));

        match row {
            Some(track) => {
                self.now_playing = Some(track.play_index);
                self.document_title = Some(format!("{}{}", self.title_prefix, track.title));
            }
            None => {
                debug!(?index, "no track row for playlist index");
                self.now_playing = None;
            }
        }
    }

    pub fn report(&mut self, message: impl Into<String>) -> u64 {
        self.banners.push(message)
    }
}

impl<P> PlayerSync<P> {
    pub fn is_ready(&self) -> bool {
        self.handle.is_ready()
    }

    pub fn player(&self) -> Option<&P> {
        self.handle.get()
    }

    pub fn player_mut(&mut self) -> Option<&mut P> {
        self.handle.get_mut()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn now_playing(&self) -> Option<usize> {
        self.now_playing
    }

    pub fn is_now_playing(&self, play_index: usize) -> bool {
        self.now_playing == Some(play_index)
    }

    pub fn document_title(&self) -> Option<&str> {
        self.document_title.as_deref()
    }

    pub fn banners(&self) -> &ErrorBanners {
        &self.banners
    }

    pub fn dismiss_banner(&mut self, id: u64) -> bool {
        self.banners.dismiss(id)
    }
}
