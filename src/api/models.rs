use serde::{Deserialize, Serialize};

/// Top-level `/r/{subreddits}/{sort}.json` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Listing {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Child {
    #[serde(default)]
    pub data: Post,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub num_comments: u32,
    #[serde(default)]
    pub score: i64,
}

/// `/youtube/v3/videos?part=snippet` response. Only the fields used for track
/// titles are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
}
