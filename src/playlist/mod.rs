//! Turns a subreddit listing into the player's playlist and track rows.

use reqwest::Url;

use crate::api::models::{Listing, Post};
use crate::error::FlockError;
use crate::utils::unescape_html;

#[cfg(test)]
mod tests;

const REDDIT_PERMALINK_BASE: &str = "http://www.reddit.com";
const YOUTUBE_EMBED_BASE: &str = "http://www.youtube.com/embed";

/// One playable row of the track list.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub play_index: usize,
    pub title: String,
    /// Title YouTube reports for the video, when the Data API was asked.
    pub video_title: Option<String>,
    pub video_id: String,
    pub url: String,
    pub permalink: String,
    pub comment_count: u32,
    pub score: i64,
}

/// A post that survived URL sanitising, before play indices are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub title: String,
    pub video_id: String,
    pub url: String,
    pub permalink: String,
    pub comment_count: u32,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub tracks: Vec<Track>,
    pub embed_url: String,
}

fn watch_url(video_id: &str) -> String {
    format!("http://www.youtube.com/watch?v={video_id}")
}

/// Parse a post URL, tolerating links posted without a scheme.
fn parse_url(url: &str) -> Option<Url> {
    Url::parse(url)
        .or_else(|_| Url::parse(&format!("http://{url}")))
        .ok()
}

/// Extract the video id from a YouTube link.
///
/// Long links (`youtube` anywhere in the URL) read the decoded `v` parameter;
/// short `youtu.be` links read the path. Anything else yields `None`. Reddit
/// escapes `&` in listing URLs, so entities are decoded first.
pub fn video_id(url: &str) -> Option<String> {
    let url = unescape_html(url);
    let lower = url.to_lowercase();
    let id = if lower.contains("youtube") {
        parse_url(&url)?
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    } else if lower.contains("youtu.be") {
        let parsed = parse_url(&url)?;
        let segments: Vec<&str> = parsed.path_segments()?.collect();
        Some(segments.join("/"))
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

/// Canonical watch URL for a YouTube link, or `None` for anything else.
pub fn sanitise_url(url: &str) -> Option<String> {
    video_id(url).map(|id| watch_url(&id))
}

fn link_from_post(post: &Post) -> Option<Link> {
    let video_id = video_id(post.url.as_deref()?)?;
    Some(Link {
        title: unescape_html(&post.title),
        url: watch_url(&video_id),
        video_id,
        permalink: format!("{REDDIT_PERMALINK_BASE}{}", post.permalink),
        comment_count: post.num_comments,
        score: post.score,
    })
}

/// Keep the listing's YouTube posts in listing order.
pub fn parse_listing(listing: &Listing) -> Vec<Link> {
    listing
        .data
        .children
        .iter()
        .filter_map(|child| link_from_post(&child.data))
        .collect()
}

/// Drop later links whose canonical URL was already seen.
pub fn remove_duplicates(links: Vec<Link>) -> Vec<Link> {
    let mut seen: Vec<String> = Vec::with_capacity(links.len());
    links
        .into_iter()
        .filter(|link| {
            if seen.contains(&link.url) {
                return false;
            }
            seen.push(link.url.clone());
            true
        })
        .collect()
}

/// Embed URL that plays `video_ids` in order: the first id is the embedded
/// video and the rest become its playlist.
pub fn embed_url<S: AsRef<str>>(video_ids: &[S]) -> Result<String, FlockError> {
    let (first, rest) = video_ids.split_first().ok_or(FlockError::EmptyPlaylist)?;
    let playlist = rest.iter().map(|id| id.as_ref()).collect::<Vec<&str>>().join(",");
    Ok(format!(
        "{YOUTUBE_EMBED_BASE}/{}?autohide=0&showinfo=1&modestbranding=1&rel=0&enablejsapi=1&playlist={}",
        first.as_ref(),
        urlencoding::encode(&playlist)
    ))
}

/// Build the playlist for a listing: sanitise, de-duplicate, index.
pub fn build_playlist(listing: &Listing) -> Result<Playlist, FlockError> {
    let links = remove_duplicates(parse_listing(listing));
    if links.is_empty() {
        return Err(FlockError::NoLinks);
    }

    let video_ids: Vec<&str> = links.iter().map(|link| link.video_id.as_str()).collect();
    let embed = embed_url(&video_ids[..])?;

    let tracks = links
        .into_iter()
        .enumerate()
        .map(|(play_index, link)| Track {
            play_index,
            title: link.title,
            video_title: None,
            video_id: link.video_id,
            url: link.url,
            permalink: link.permalink,
            comment_count: link.comment_count,
            score: link.score,
        })
        .collect();

    Ok(Playlist {
        tracks,
        embed_url: embed,
    })
}
