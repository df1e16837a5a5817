use serde::{Deserialize, Serialize};

use crate::error::FlockError;

#[cfg(target_arch = "wasm32")]
const SETTINGS_ELEMENT_ID: &str = "flock-settings";

/// Reddit caps listing pages at 100 posts.
const MAX_LISTING_LIMIT: u32 = 100;

/// Page settings. Every field falls back to its default when missing from the
/// JSON override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title_prefix: String,
    pub player_element_id: String,
    pub iframe_api_url: String,
    pub no_results_text: String,
    pub search_contains: bool,
    pub reddit_base_url: String,
    pub sort: String,
    pub window: String,
    pub limit: u32,
    pub suggested_subreddits: Vec<String>,
    /// Data API key. Without one, tracks keep their Reddit titles.
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title_prefix: "flock - ".to_string(),
            player_element_id: "player".to_string(),
            iframe_api_url: "https://www.youtube.com/iframe_api".to_string(),
            no_results_text:
                "Oops, that one's too hip for us - add it to your search with space or enter"
                    .to_string(),
            search_contains: true,
            reddit_base_url: "https://www.reddit.com".to_string(),
            sort: "top".to_string(),
            window: "week".to_string(),
            limit: MAX_LISTING_LIMIT,
            suggested_subreddits: [
                "futuregarage",
                "listentothis",
                "electronicmusic",
                "dubstep",
                "futurebeats",
                "indieheads",
                "hiphopheads",
                "jazz",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            youtube_api_key: None,
            youtube_api_url: "https://www.googleapis.com".to_string(),
        }
    }
}

impl Settings {
    /// Parse a JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, FlockError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), FlockError> {
        if self.limit == 0 || self.limit > MAX_LISTING_LIMIT {
            return Err(FlockError::Settings(format!(
                "limit must be between 1 and {MAX_LISTING_LIMIT}"
            )));
        }
        if self.player_element_id.trim().is_empty() {
            return Err(FlockError::Settings(
                "player_element_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Read settings from the page's `#flock-settings` JSON block, falling
    /// back to defaults when it is absent or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!("ignoring page settings: {err}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "title_prefix": "mix - ", "limit": 25 }"#)
            .expect("valid settings");
        assert_eq!(settings.title_prefix, "mix - ");
        assert_eq!(settings.limit, 25);
        assert_eq!(settings.sort, "top");
        assert!(settings.search_contains);
    }

    #[test]
    fn youtube_key_is_optional() {
        assert_eq!(Settings::default().youtube_api_key, None);
        let settings =
            Settings::from_json(r#"{ "youtube_api_key": "k3y" }"#).expect("valid settings");
        assert_eq!(settings.youtube_api_key.as_deref(), Some("k3y"));
        assert_eq!(settings.youtube_api_url, "https://www.googleapis.com");
    }

    #[test]
    fn out_of_range_limit_is_rejected() {
        let err = Settings::from_json(r#"{ "limit": 500 }"#).unwrap_err();
        assert!(matches!(err, FlockError::Settings(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FlockError::SettingsJson(_)));
    }
}
