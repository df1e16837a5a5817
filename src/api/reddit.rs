use crate::api::models::Listing;
use crate::api::HTTP_CLIENT;
use crate::config::Settings;
use crate::error::FlockError;
use crate::query::{parameter_by_name, SUBREDDITS_PARAM};

pub const SORT_PARAM: &str = "sort";
pub const WINDOW_PARAM: &str = "t";

/// What to ask Reddit for, read from the page's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub subreddits: Vec<String>,
    pub sort: String,
    pub window: String,
    pub limit: u32,
}

fn path_safe(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl ListingRequest {
    /// `None` when the search string names no subreddits. `sort` and `t`
    /// override the configured defaults when they are plain words.
    pub fn from_search(search: &str, settings: &Settings) -> Option<Self> {
        let subreddits: Vec<String> = parameter_by_name(search, SUBREDDITS_PARAM)?
            .split_whitespace()
            .filter(|name| path_safe(name))
            .map(str::to_string)
            .collect();
        if subreddits.is_empty() {
            return None;
        }

        let pick = |param: &str, fallback: &str| {
            parameter_by_name(search, param)
                .filter(|value| path_safe(value))
                .unwrap_or_else(|| fallback.to_string())
        };

        Some(Self {
            subreddits,
            sort: pick(SORT_PARAM, &settings.sort),
            window: pick(WINDOW_PARAM, &settings.window),
            limit: settings.limit,
        })
    }
}

pub struct RedditClient {
    base_url: String,
}

impl RedditClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.reddit_base_url.clone())
    }

    pub fn listing_url(&self, request: &ListingRequest) -> String {
        format!(
            "{}/r/{}/{}.json?t={}&limit={}",
            self.base_url,
            request.subreddits.join("+"),
            request.sort,
            request.window,
            request.limit
        )
    }

    pub async fn fetch_listing(&self, request: &ListingRequest) -> Result<Listing, FlockError> {
        let url = self.listing_url(request);
        tracing::debug!("fetching {url}");

        let response = HTTP_CLIENT.get(&url).send().await.map_err(|err| {
            tracing::warn!("reddit request failed: {err}");
            FlockError::NoRedditResponse
        })?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!("reddit answered {}", response.status());
            return Err(FlockError::NoRedditResponse);
        }

        let body = response.text().await.map_err(|err| {
            tracing::warn!("reddit body unreadable: {err}");
            FlockError::NoRedditResponse
        })?;

        parse_listing_body(&body)
    }
}

/// Parse a listing body. Bodies carrying an `error` field or that are not
/// listing JSON count as no response.
pub fn parse_listing_body(body: &str) -> Result<Listing, FlockError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| FlockError::NoRedditResponse)?;
    if value.get("error").is_some() {
        return Err(FlockError::NoRedditResponse);
    }
    serde_json::from_value(value).map_err(|_| FlockError::NoRedditResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_reads_subreddits_and_overrides() {
        let settings = Settings::default();
        let request = ListingRequest::from_search("?subreddits=jazz+dubstep&sort=hot", &settings)
            .expect("subreddits present");
        assert_eq!(request.subreddits, vec!["jazz", "dubstep"]);
        assert_eq!(request.sort, "hot");
        assert_eq!(request.window, "week");

        let url = RedditClient::new("https://www.reddit.com/").listing_url(&request);
        assert_eq!(
            url,
            "https://www.reddit.com/r/jazz+dubstep/hot.json?t=week&limit=100"
        );
    }

    #[test]
    fn request_needs_subreddits() {
        let settings = Settings::default();
        assert!(ListingRequest::from_search("", &settings).is_none());
        assert!(ListingRequest::from_search("?subreddits=", &settings).is_none());
        assert!(ListingRequest::from_search("?sort=hot", &settings).is_none());
    }

    #[test]
    fn unsafe_sort_falls_back_to_default() {
        let settings = Settings::default();
        let request = ListingRequest::from_search("?subreddits=jazz&sort=../x", &settings)
            .expect("subreddits present");
        assert_eq!(request.sort, "top");
    }

    #[test]
    fn error_bodies_are_no_response() {
        assert!(matches!(
            parse_listing_body(r#"{ "error": 404 }"#),
            Err(FlockError::NoRedditResponse)
        ));
        assert!(matches!(
            parse_listing_body("<html></html>"),
            Err(FlockError::NoRedditResponse)
        ));
    }

    #[test]
    fn listing_body_parses_posts() {
        let body = serde_json::json!({
            "kind": "Listing",
            "data": { "children": [
                { "kind": "t3", "data": {
                    "title": "Burial - Untrue",
                    "url": "http://www.youtube.com/watch?v=wRpHf4X7FNM",
                    "permalink": "/r/futuregarage/comments/abc/",
                    "num_comments": 12,
                    "score": 40
                } }
            ] }
        })
        .to_string();
        let listing = parse_listing_body(&body).expect("valid listing");
        assert_eq!(listing.data.children.len(), 1);
        assert_eq!(listing.data.children[0].data.num_comments, 12);
    }
}
