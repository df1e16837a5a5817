use super::*;

/// Stands in for the iframe player: playing an index moves the playlist there.
#[derive(Debug, Default)]
struct FakePlayer {
    index: Option<usize>,
    played: Vec<usize>,
}

impl PlaylistPlayer for FakePlayer {
    fn play_video_at(&mut self, index: usize) {
        self.index = Some(index);
        self.played.push(index);
    }

    fn playlist_index(&self) -> Option<usize> {
        self.index
    }
}

fn track(play_index: usize, title: &str) -> Track {
    Track {
        play_index,
        title: title.to_string(),
        video_title: None,
        video_id: format!("vid{play_index}"),
        url: format!("http://www.youtube.com/watch?v=vid{play_index}"),
        permalink: format!("http://www.reddit.com/r/futuregarage/comments/{play_index}/"),
        comment_count: 0,
        score: 1,
    }
}

fn controller() -> PlayerSync<FakePlayer> {
    PlayerSync::new(
        vec![
            track(0, "Burial - Untrue"),
            track(1, "Sage The Gemini - Gas Pedal"),
            track(2, "Koreless - Untitled"),
        ],
        "flock - ",
    )
}

#[test]
fn ready_starts_playlist_at_zero() {
    let mut sync = controller();
    assert!(!sync.is_ready());

    sync.on_api_ready(FakePlayer::default());

    assert!(sync.is_ready());
    assert_eq!(sync.player().map(|p| p.played.clone()), Some(vec![0]));
}

#[test]
fn sync_before_ready_is_a_no_op() {
    let mut sync = controller();
    sync.sync();
    sync.dispatch(&PlayerEvent::StateChange(PlayerState::Playing));
    sync.dispatch(&PlayerEvent::TrackClicked(1));

    assert_eq!(sync.now_playing(), None);
    assert_eq!(sync.document_title(), None);
}

#[test]
fn state_change_flags_the_playing_row() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());

    sync.dispatch(&PlayerEvent::StateChange(PlayerState::Playing));

    assert_eq!(sync.now_playing(), Some(0));
    assert_eq!(sync.document_title(), Some("flock - Burial - Untrue"));
}

#[test]
fn every_state_value_resyncs() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());

    for (code, expected) in [(0, 1usize), (2, 2), (3, 0), (-1, 1), (42, 2)] {
        if let Some(player) = sync.player_mut() {
            player.index = Some(expected);
        }
        sync.on_state_change(PlayerState::from_code(code));
        assert_eq!(sync.now_playing(), Some(expected), "state code {code}");
    }
}

#[test]
fn click_plays_and_resyncs_immediately() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());

    sync.dispatch(&PlayerEvent::TrackClicked(2));

    assert_eq!(sync.player().map(|p| p.played.clone()), Some(vec![0, 2]));
    assert_eq!(sync.now_playing(), Some(2));
    assert!(sync.is_now_playing(2));
    assert!(!sync.is_now_playing(0));
    assert_eq!(sync.document_title(), Some("flock - Koreless - Untitled"));
}

#[test]
fn exactly_one_row_is_flagged_for_each_index() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());

    for index in [1, 0, 2, 2, 1] {
        sync.on_track_click(index);
        let flagged: Vec<usize> = sync
            .tracks()
            .iter()
            .map(|t| t.play_index)
            .filter(|&i| sync.is_now_playing(i))
            .collect();
        assert_eq!(flagged, vec![index]);
    }
}

#[test]
fn repeated_sync_is_idempotent() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());
    sync.on_track_click(1);

    let flagged = sync.now_playing();
    let title = sync.document_title().map(str::to_string);
    sync.sync();
    sync.sync();

    assert_eq!(sync.now_playing(), flagged);
    assert_eq!(sync.document_title().map(str::to_string), title);
}

#[test]
fn unknown_index_clears_flag_and_keeps_title() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());
    sync.on_track_click(1);

    if let Some(player) = sync.player_mut() {
        player.index = Some(9);
    }
    sync.sync();

    assert_eq!(sync.now_playing(), None);
    assert_eq!(sync.document_title(), Some("flock - Sage The Gemini - Gas Pedal"));
}

#[test]
fn api_errors_stack_and_dismiss_individually() {
    let mut sync = controller();
    let first = sync.on_api_error(5);
    let second = sync.on_api_error(150);
    sync.dispatch(&PlayerEvent::ApiError(2));

    assert_eq!(sync.banners().iter().count(), 3);
    assert!(sync.banners().iter().all(|b| b.message == API_ERROR_MESSAGE));

    assert!(sync.dismiss_banner(second));
    assert!(!sync.dismiss_banner(second));
    let left: Vec<u64> = sync.banners().iter().map(|b| b.id).collect();
    assert_eq!(left, vec![first, 2]);
}

#[test]
fn clicks_keep_working_after_api_error() {
    let mut sync = controller();
    sync.on_api_ready(FakePlayer::default());
    sync.on_api_error(5);

    sync.on_track_click(1);

    assert_eq!(sync.now_playing(), Some(1));
}
