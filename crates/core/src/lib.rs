pub mod classify;
pub mod dates;
pub mod location;
pub mod slug;
pub mod taxonomy;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record as it arrives from the extraction pipeline. Every field is
/// optional: a missing or malformed value degrades to "unspecified" and must
/// never reject the record as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_type: Option<String>,
    /// Category hint from the extraction model. Superseded by the local
    /// classifier so filtering stays deterministic over title text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub apply_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub how_to_apply: Vec<String>,
    #[serde(default, rename = "_source", deserialize_with = "lenient_string")]
    pub source: Option<String>,
}

/// A stored job: the raw record plus fields derived exactly once at load
/// time. Never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    #[serde(flatten)]
    pub raw: RawJob,
    pub category: &'static str,
    pub location_buckets: Vec<String>,
    pub slug: String,
}

impl Job {
    pub fn derive(raw: RawJob) -> Self {
        let category = classify::classify_title(raw.job_title.as_deref().unwrap_or(""));
        let location_buckets = location::bucketize(raw.location.as_deref().unwrap_or(""));
        let slug = slug::job_slug(raw.apply_url.as_deref(), raw.job_title.as_deref());
        Self {
            raw,
            category,
            location_buckets,
            slug,
        }
    }

    /// Expired iff the deadline parses to a date strictly before `today`.
    /// Absent or unparsable deadlines are never expired.
    pub fn is_expired(&self, today: chrono::NaiveDate) -> bool {
        dates::is_expired(self.raw.deadline.as_deref(), today)
    }

    /// Salary with placeholder junk ("n/a", "nil", "--", ...) filtered out.
    pub fn salary_display(&self) -> Option<&str> {
        let s = self.raw.salary.as_deref()?.trim();
        if is_salary_placeholder(s) {
            None
        } else {
            Some(s)
        }
    }

    pub fn title_display(&self) -> &str {
        non_empty(self.raw.job_title.as_deref()).unwrap_or("Untitled Role")
    }

    pub fn company_display(&self) -> &str {
        non_empty(self.raw.company.as_deref()).unwrap_or("Company not listed")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

const SALARY_PLACEHOLDERS: [&str; 9] = ["n", "n,", "na", "n/a", "none", "null", "-", "--", "nil"];

fn is_salary_placeholder(s: &str) -> bool {
    let lower = s.to_lowercase();
    lower.is_empty() || SALARY_PLACEHOLDERS.contains(&lower.as_str())
}

/// Accepts strings as-is, stringifies stray numbers and booleans, and maps
/// anything else (null, arrays, objects) to None instead of failing the
/// whole record.
fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(value.and_then(scalar_to_string))
}

/// Accepts an array (scalar elements kept, the rest skipped) or a lone
/// scalar promoted to a one-element list.
fn lenient_strings<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    })
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
