//! Free-text location -> normalized filter buckets.
//!
//! Domestic locations resolve to "<State> State" buckets (literal "FCT" for
//! the capital territory). A location that looks Nigerian but names no known
//! state or city yields an empty set on purpose: precision over recall, the
//! job then only shows under "All locations". Foreign locations resolve to a
//! single country bucket via the alias table, with comma-tail and raw-text
//! fallbacks behind it.

use crate::taxonomy::{CITY_STATES, COUNTRY_ALIASES, FCT, STATES};
use regex::Regex;
use std::sync::OnceLock;

/// Buckets for one location string. Deduplicated, insertion-ordered. A job
/// may carry several domestic buckets at once, but never a mix of domestic
/// and country/fallback buckets.
pub fn bucketize(location: &str) -> Vec<String> {
    let text = location.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();

    let mut buckets: Vec<String> = Vec::new();

    for m in states_re().find_iter(&lower) {
        if let Some(state) = STATES.iter().find(|s| s.eq_ignore_ascii_case(m.as_str())) {
            push_unique(&mut buckets, format!("{state} State"));
        }
    }
    for m in cities_re().find_iter(&lower) {
        if let Some((_, state)) = CITY_STATES.iter().find(|(c, _)| *c == m.as_str()) {
            let bucket = if *state == FCT {
                FCT.to_string()
            } else {
                format!("{state} State")
            };
            push_unique(&mut buckets, bucket);
        }
    }
    if !buckets.is_empty() {
        return buckets;
    }

    // A bare domestic signal with nothing resolved is not bucketed at all.
    if nigeria_re().is_match(&lower) {
        return Vec::new();
    }

    for (keyword, label) in COUNTRY_ALIASES {
        if lower.contains(keyword) {
            return vec![label.to_string()];
        }
    }

    // Trailing comma part is usually the country or region.
    if let Some((_, tail)) = text.rsplit_once(',') {
        let tail = tail.trim();
        if !tail.is_empty() {
            return vec![tail.to_string()];
        }
    }

    vec![text.to_string()]
}

fn push_unique(buckets: &mut Vec<String>, bucket: String) {
    if !buckets.contains(&bucket) {
        buckets.push(bucket);
    }
}

/// One `\b(a|b|...)\b` alternation over a word table, compiled on first use.
/// Word boundaries make "Lagos," match and "Lagosians" not.
fn word_table(words: &[String]) -> Regex {
    let pattern = format!(r"\b({})\b", words.join("|"));
    Regex::new(&pattern).expect("static word table pattern")
}

fn states_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| word_table(&STATES.map(|s| s.to_lowercase())))
}

fn cities_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| word_table(&CITY_STATES.map(|(c, _)| c.to_string())))
}

fn nigeria_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bnigeria\b").expect("static word table pattern"))
}
