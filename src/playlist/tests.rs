use super::*;
use crate::api::models::{Child, ListingData};

fn post(title: &str, url: &str, permalink: &str) -> Child {
    Child {
        data: Post {
            title: title.to_string(),
            url: Some(url.to_string()),
            permalink: permalink.to_string(),
            num_comments: 3,
            score: 10,
        },
    }
}

fn listing(children: Vec<Child>) -> Listing {
    Listing {
        data: ListingData { children },
    }
}

#[test]
fn sanitises_long_and_short_youtube_links() {
    assert_eq!(
        sanitise_url("https://www.YouTube.com/watch?feature=share&v=wRpHf4X7FNM#t=30").as_deref(),
        Some("http://www.youtube.com/watch?v=wRpHf4X7FNM")
    );
    assert_eq!(
        sanitise_url("http://youtu.be/cfLmW-dKtwg?t=1").as_deref(),
        Some("http://www.youtube.com/watch?v=cfLmW-dKtwg")
    );
}

#[test]
fn video_id_is_percent_decoded() {
    assert_eq!(
        video_id("http://www.youtube.com/watch?v=abc%2Ddef").as_deref(),
        Some("abc-def")
    );
    let playlist = embed_url(&["x", "abc-def"]).expect("non-empty");
    assert!(playlist.ends_with("playlist=abc-def"));
}

#[test]
fn escaped_ampersands_from_listings_still_find_the_id() {
    assert_eq!(
        sanitise_url("https://www.youtube.com/watch?feature=youtu.be&amp;v=wRpHf4X7FNM").as_deref(),
        Some("http://www.youtube.com/watch?v=wRpHf4X7FNM")
    );

    let links = parse_listing(&listing(vec![post(
        "shared",
        "https://www.youtube.com/watch?feature=youtu.be&amp;v=wRpHf4X7FNM",
        "/r/fg/9/",
    )]));
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].video_id, "wRpHf4X7FNM");
}

#[test]
fn schemeless_links_are_read() {
    assert_eq!(video_id("youtube.com/watch?v=aaa").as_deref(), Some("aaa"));
}

#[test]
fn rejects_non_youtube_and_idless_links() {
    assert_eq!(sanitise_url("http://imgur.com/abc"), None);
    assert_eq!(sanitise_url("http://www.youtube.com/user/burial"), None);
    assert_eq!(sanitise_url("http://youtu.be/"), None);
    assert_eq!(sanitise_url("http://www.youtube.com/watch?v="), None);
}

#[test]
fn parse_keeps_youtube_posts_and_cleans_fields() {
    let links = parse_listing(&listing(vec![
        post("Burial &amp; Four Tet", "http://www.youtube.com/watch?v=aaa", "/r/fg/1/"),
        post("an image", "http://imgur.com/xyz", "/r/fg/2/"),
    ]));

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "Burial & Four Tet");
    assert_eq!(links[0].video_id, "aaa");
    assert_eq!(links[0].permalink, "http://www.reddit.com/r/fg/1/");
}

#[test]
fn duplicates_keep_first_occurrence() {
    let links = parse_listing(&listing(vec![
        post("first", "http://www.youtube.com/watch?v=aaa", "/1/"),
        post("other", "http://www.youtube.com/watch?v=bbb", "/2/"),
        post("repost", "http://youtu.be/aaa", "/3/"),
    ]));

    let titles: Vec<String> = remove_duplicates(links).into_iter().map(|l| l.title).collect();
    assert_eq!(titles, vec!["first", "other"]);
}

#[test]
fn embed_url_puts_rest_in_playlist() {
    let url = embed_url(&["aaa", "bbb", "ccc"]).expect("non-empty");
    assert!(url.starts_with("http://www.youtube.com/embed/aaa?"));
    assert!(url.contains("enablejsapi=1"));
    assert!(url.ends_with("playlist=bbb%2Cccc"));

    assert!(matches!(
        embed_url::<&str>(&[]),
        Err(FlockError::EmptyPlaylist)
    ));
}

#[test]
fn build_assigns_play_indices_in_order() {
    let playlist = build_playlist(&listing(vec![
        post("one", "http://www.youtube.com/watch?v=aaa", "/1/"),
        post("skip", "http://soundcloud.com/x", "/2/"),
        post("two", "http://youtu.be/bbb", "/3/"),
    ]))
    .expect("two links");

    let rows: Vec<(usize, &str)> = playlist
        .tracks
        .iter()
        .map(|t| (t.play_index, t.title.as_str()))
        .collect();
    assert_eq!(rows, vec![(0, "one"), (1, "two")]);
    assert!(playlist.tracks.iter().all(|t| t.video_title.is_none()));
    assert!(playlist.embed_url.starts_with("http://www.youtube.com/embed/aaa?"));
}

#[test]
fn build_without_links_fails() {
    let err = build_playlist(&listing(vec![post("img", "http://imgur.com/a", "/1/")])).unwrap_err();
    assert!(matches!(err, FlockError::NoLinks));
}
