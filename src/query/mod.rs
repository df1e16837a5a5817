//! Query-string helpers for the `subreddits` filter.

use regex::Regex;

use crate::error::FlockError;


pub const SUBREDDITS_PARAM: &str = "subreddits";

/// Rendered in place of a parameter that is missing from the URL.
pub const ABSENT_VALUE: &str = "undefined";

/// Read `name` from a `?a=b&c=d` search string.
///
/// The name must sit right after `?` or `&` and be followed by `=`, so `x`
/// never matches `ax=1` or `xy=1`. `+` is read as a space and the value is
/// then percent-decoded; a value that does not decode is returned with only
/// the `+` substitution applied.
pub fn parameter_by_name(search: &str, name: &str) -> Option<String> {
    let pattern = format!(r"[?&]{}=([^&]*)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(search)?.get(1)?.as_str().replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw),
    }
}

/// Build the search string that keeps the current `subreddits` value and
/// appends `&key=value` for every pair, in order.
///
/// Keys and values are inserted verbatim; callers pass URL-safe text.
pub fn append_navigation_params<K, V>(
    search: &str,
    keys: &[K],
    values: &[V],
) -> Result<String, FlockError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if keys.len() != values.len() {
        return Err(FlockError::MismatchedParams {
            keys: keys.len(),
            values: values.len(),
        });
    }

    let subreddits = parameter_by_name(search, SUBREDDITS_PARAM);
    let mut next = format!(
        "?{SUBREDDITS_PARAM}={}",
        subreddits.as_deref().unwrap_or(ABSENT_VALUE)
    );
    for (key, value) in keys.iter().zip(values) {
        next.push('&');
        next.push_str(key.as_ref());
        next.push('=');
        next.push_str(value.as_ref());
    }
    Ok(next)
}

/// Search string for a fresh filter submission.
pub fn subreddits_search(field: &str) -> String {
    format!("?{SUBREDDITS_PARAM}={field}")
}
