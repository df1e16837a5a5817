//! Subreddit filter state: the multi-select's token set and the
//! space-separated text field it keeps up to date.

use std::fmt;


/// One change event from the multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(String),
    Deselected(String),
}

/// Ordered, duplicate-free list of selected tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a space-separated field value. Repeated tokens keep their first
    /// position.
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        for token in text.split_whitespace() {
            set.insert(token);
        }
        set
    }

    /// Returns false when the token was already present or is blank.
    pub fn insert(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Apply a change event and report whether the set changed.
    pub fn apply(&mut self, change: &SelectionChange) -> bool {
        match change {
            SelectionChange::Selected(token) => self.insert(token),
            SelectionChange::Deselected(token) => self.remove(token),
        }
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Update the text field for one change event.
///
/// A selection appends `" token"`. A deselection removes the first literal
/// occurrence of the token and collapses the first double space. Exactly one
/// leading and one trailing space are then stripped, so `"a b  "` keeps one
/// trailing space.
pub fn apply_selection_change(field: &str, change: &SelectionChange) -> String {
    let mut text = field.to_string();
    match change {
        SelectionChange::Selected(token) => {
            text.push(' ');
            text.push_str(token);
        }
        SelectionChange::Deselected(token) => {
            text = text.replacen(token.as_str(), "", 1);
            text = text.replacen("  ", " ", 1);
        }
    }
    trim_single_spaces(&text)
}

/// Keys that add the typed or top-matching name to the selection.
pub fn commits_search(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Strip at most one space from each end.
pub fn trim_single_spaces(text: &str) -> String {
    let text = text.strip_prefix(' ').unwrap_or(text);
    let text = text.strip_suffix(' ').unwrap_or(text);
    text.to_string()
}

/// Suggestions followed by any token from the URL that is not a suggestion.
pub fn merge_options(suggested: &[String], current: &TokenSet) -> Vec<String> {
    let mut merged = TokenSet::new();
    for option in suggested.iter().map(String::as_str).chain(current.iter()) {
        merged.insert(option);
    }
    merged.tokens
}

/// Options left to offer for `query`, skipping those already selected.
///
/// With `contains` any case-insensitive substring matches; otherwise the query
/// must start one of the option's words (split on spaces, `_` and `-`).
pub fn search_options<'a>(
    options: &'a [String],
    selected: &TokenSet,
    query: &str,
    contains: bool,
) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .map(String::as_str)
        .filter(|option| !selected.contains(option))
        .filter(|option| {
            if query.is_empty() {
                return true;
            }
            let option = option.to_lowercase();
            if contains {
                option.contains(&query)
            } else {
                option
                    .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
                    .any(|word| word.starts_with(&query))
            }
        })
        .collect()
}
