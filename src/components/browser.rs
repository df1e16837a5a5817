//! Browser-only helpers: the location bar and the iframe API script tag.

use crate::error::FlockError;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
const IFRAME_API_SCRIPT_ID: &str = "flock-iframe-api";

/// The page's current `location.search`, including the leading `?`.
#[cfg(target_arch = "wasm32")]
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_search() -> String {
    String::new()
}

/// Replace `location.search`, which reloads the page.
#[cfg(target_arch = "wasm32")]
pub fn navigate(search: &str) -> Result<(), FlockError> {
    tracing::info!("navigating to {search}");
    let win = window().ok_or_else(|| FlockError::Browser("no window".to_string()))?;
    win.location()
        .set_search(search)
        .map_err(|err| FlockError::Browser(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(search: &str) -> Result<(), FlockError> {
    tracing::info!("navigation to {search} ignored outside the browser");
    Ok(())
}

/// Insert the iframe API `<script>` once.
#[cfg(target_arch = "wasm32")]
pub fn load_iframe_api(src: &str) -> Result<(), FlockError> {
    let browser = |what: &str| FlockError::Browser(what.to_string());
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| browser("no document"))?;

    if document.get_element_by_id(IFRAME_API_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .map_err(|err| FlockError::Browser(format!("{err:?}")))?;
    script.set_id(IFRAME_API_SCRIPT_ID);
    script
        .set_attribute("src", src)
        .map_err(|err| FlockError::Browser(format!("{err:?}")))?;
    document
        .body()
        .ok_or_else(|| browser("no body"))?
        .append_child(&script)
        .map_err(|err| FlockError::Browser(format!("{err:?}")))?;
    Ok(())
}
