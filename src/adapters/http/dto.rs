use jobbermed_board::DetailContent;
use serde::{Deserialize, Serialize};

//
// Standard envelopes
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOk<T> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErr {
    pub ok: bool,
    pub error: ApiErrorBody,
}

//
// Health
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String, // "up"
}

//
// V1: job list
//

/// Query string for /api/v1/jobs. Everything optional; the documented
/// defaults apply ("All", "All locations", empty keyword, page 1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsQueryV1 {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCardV1 {
    pub slug: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    pub category: String,
    pub location_buckets: Vec<String>,
    pub posted: String,
    pub deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCountV1 {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponseV1 {
    pub jobs: Vec<JobCardV1>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub show_controls: bool,
    /// Taxonomy order, non-expired jobs only.
    pub category_counts: Vec<LabelCountV1>,
    /// Alphabetical, non-expired jobs only.
    pub location_counts: Vec<LabelCountV1>,
    /// Canonical shareable query string for the current filter state.
    pub share_query: String,
}

//
// V1: job detail
//

#[derive(Debug, Clone, Serialize)]
pub struct JobDetailV1 {
    pub slug: String,
    #[serde(flatten)]
    pub content: DetailContent,
}
