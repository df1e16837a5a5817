use crate::api::models::VideoListResponse;
use crate::api::HTTP_CLIENT;
use crate::config::Settings;
use crate::playlist::Track;

/// The Data API accepts at most this many ids per `videos` call.
const MAX_IDS_PER_REQUEST: usize = 50;

/// Looks up video titles through the YouTube Data API. Every failure is
/// logged and swallowed; tracks keep their Reddit titles.
pub struct YouTubeClient {
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// `None` unless a key is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let key = settings.youtube_api_key.as_deref()?.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(settings.youtube_api_url.clone(), key))
    }

    pub fn videos_url<S: AsRef<str>>(&self, video_ids: &[S]) -> String {
        let ids = video_ids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        format!(
            "{}/youtube/v3/videos?part=snippet&id={}&key={}",
            self.base_url,
            urlencoding::encode(&ids),
            urlencoding::encode(&self.api_key)
        )
    }

    async fn fetch_videos(&self, video_ids: &[&str]) -> Option<VideoListResponse> {
        let url = self.videos_url(video_ids);
        let response = match HTTP_CLIENT.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("youtube request failed: {err}");
                return None;
            }
        };
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!("youtube answered {}", response.status());
            return None;
        }
        match response.text().await {
            Ok(body) => parse_videos_body(&body),
            Err(err) => {
                tracing::warn!("youtube body unreadable: {err}");
                None
            }
        }
    }

    /// Fill `video_title` on every track YouTube knows about.
    pub async fn fill_titles(&self, tracks: &mut [Track]) {
        let ids: Vec<String> = tracks.iter().map(|track| track.video_id.clone()).collect();
        for chunk in ids.chunks(MAX_IDS_PER_REQUEST) {
            let chunk: Vec<&str> = chunk.iter().map(String::as_str).collect();
            if let Some(videos) = self.fetch_videos(&chunk).await {
                apply_video_titles(tracks, &videos);
            }
        }
    }
}

/// `None` for bodies that are not a `videos` response.
pub fn parse_videos_body(body: &str) -> Option<VideoListResponse> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if value.get("error").is_some() {
        tracing::warn!("youtube returned an error body");
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Items are matched to tracks by video id, so removed or private videos
/// missing from the response leave their track untouched.
pub fn apply_video_titles(tracks: &mut [Track], videos: &VideoListResponse) {
    for item in &videos.items {
        if item.snippet.title.is_empty() {
            continue;
        }
        for track in tracks.iter_mut().filter(|track| track.video_id == item.id) {
            track.video_title = Some(item.snippet.title.clone());
        }
    }
}
