//! Two-way binding between the board state and the URL query string.
//! Exactly three parameters are shareable: `category` (omitted when "All"),
//! `q` (omitted when empty) and `job` (omitted when no detail is open).

use crate::detail::DetailState;
use crate::state::FilterState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    pub category: Option<String>,
    pub q: Option<String>,
    pub job: Option<String>,
}

impl UrlState {
    /// Snapshot of the current state with defaults omitted.
    pub fn capture(filters: &FilterState, detail: &DetailState) -> Self {
        Self {
            category: (!filters.category_is_all()).then(|| filters.category.clone()),
            q: (!filters.query.is_empty()).then(|| filters.query.clone()),
            job: match detail {
                DetailState::Open { slug } => Some(slug.clone()),
                DetailState::Closed => None,
            },
        }
    }

    /// Parses a query string (with or without a leading '?'). Unknown
    /// parameters are ignored; missing ones take their defaults downstream.
    pub fn parse(query: &str) -> Self {
        let mut state = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            if value.is_empty() {
                continue;
            }
            match key {
                "category" => state.category = Some(value),
                "q" => state.q = Some(value),
                "job" => state.job = Some(value),
                _ => {}
            }
        }
        state
    }

    /// Canonical query string, no leading '?'. Empty when everything is at
    /// its default.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = &self.category {
            parts.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(q) = &self.q {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
        if let Some(job) = &self.job {
            parts.push(format!("job={}", urlencoding::encode(job)));
        }
        parts.join("&")
    }

    /// Filter state hydrated from this snapshot; the open slug, if any, is
    /// resolved separately against the store.
    pub fn hydrate(&self) -> FilterState {
        let mut filters = FilterState::default();
        if let Some(category) = &self.category {
            filters.set_category(category.clone());
        }
        if let Some(q) = &self.q {
            filters.set_query(q);
        }
        filters
    }
}

/// Query-string component decoding: '+' is a space, malformed escapes pass
/// through verbatim, invalid UTF-8 degrades lossily.
fn decode_component(s: &str) -> String {
    let s = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned()
}
