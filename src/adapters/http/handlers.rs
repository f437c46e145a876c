use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use tracing::warn;

use jobbermed_board::{BoardController, DetailContent, JobStore};
use jobbermed_core::dates;

use super::{dto::*, error::ApiError};

pub struct AppStateConfig {
    pub web_dir: String,
}

pub struct AppState {
    /// None when the feed never loaded; the API answers 503 while the shell
    /// keeps serving.
    pub store: Option<Arc<JobStore>>,
    pub web_dir: String,
}

impl AppState {
    pub fn new(cfg: AppStateConfig, store: Option<Arc<JobStore>>) -> Self {
        Self {
            store,
            web_dir: cfg.web_dir,
        }
    }

    pub fn web_assets_dir(&self) -> String {
        format!("{}/assets", self.web_dir.trim_end_matches('/'))
    }

    fn index_path(&self) -> String {
        format!("{}/index.html", self.web_dir.trim_end_matches('/'))
    }

    fn store(&self) -> Result<&Arc<JobStore>, ApiError> {
        self.store.as_ref().ok_or_else(|| {
            ApiError::unavailable(
                "feed_unavailable",
                "The job feed could not be loaded; please try again later",
            )
        })
    }
}

//
// UI index
//

pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match tokio::fs::read_to_string(state.index_path()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(path = %state.index_path(), error = %e, "index.html unreadable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "index.html not found or unreadable".to_string(),
            )
                .into_response()
        }
    }
}

//
// Health (v1)
//

pub async fn health_v1() -> Result<Json<ApiOk<HealthResponse>>, ApiError> {
    Ok(Json(ApiOk {
        ok: true,
        data: HealthResponse {
            status: "up".to_string(),
        },
    }))
}

//
// Job list (v1)
//

pub async fn list_jobs_v1(
    State(state): State<Arc<AppState>>,
    Query(q): Query<JobsQueryV1>,
) -> Result<Json<ApiOk<JobListResponseV1>>, ApiError> {
    let store = state.store()?.clone();
    let today = chrono::Local::now().date_naive();

    // Each request is its own browsing session.
    let mut board = BoardController::new(store, today, "");
    if let Some(category) = q.category.as_deref() {
        board.set_category(category);
    }
    if let Some(location) = q.location.as_deref() {
        board.set_location(location);
    }
    if let Some(query) = q.q.as_deref() {
        board.set_query(query);
    }
    if let Some(page) = q.page {
        board.set_page(page);
    }

    let (total, category_counts, location_counts) = {
        let outcome = board.outcome();
        let categories = outcome
            .category_counts
            .iter()
            .map(|(label, count)| LabelCountV1 {
                label: label.to_string(),
                count: *count,
            })
            .collect();
        let locations = outcome
            .location_counts
            .iter()
            .map(|(label, count)| LabelCountV1 {
                label: label.clone(),
                count: *count,
            })
            .collect();
        (outcome.jobs.len(), categories, locations)
    };

    let view = board.visible_page();
    let response = JobListResponseV1 {
        jobs: view.items.iter().map(|job| job_card(job)).collect(),
        page: view.page,
        total,
        total_pages: view.total_pages,
        show_controls: view.show_controls(),
        category_counts,
        location_counts,
        share_query: board.current_query(),
    };

    Ok(Json(ApiOk {
        ok: true,
        data: response,
    }))
}

fn job_card(job: &jobbermed_core::Job) -> JobCardV1 {
    JobCardV1 {
        slug: job.slug.clone(),
        title: job.title_display().to_string(),
        company: job.company_display().to_string(),
        location: job.raw.location.clone().filter(|l| !l.trim().is_empty()),
        salary: job.salary_display().map(str::to_string),
        job_type: job.raw.job_type.clone().filter(|t| !t.trim().is_empty()),
        category: job.category.to_string(),
        location_buckets: job.location_buckets.clone(),
        posted: dates::format_display(job.raw.date_posted.as_deref()),
        deadline: dates::format_display(job.raw.deadline.as_deref()),
        source: job.raw.source.clone(),
    }
}

//
// Job detail (v1)
//

pub async fn job_detail_v1(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiOk<JobDetailV1>>, ApiError> {
    let store = state.store()?;
    let job = store
        .find_by_slug(&slug)
        .ok_or_else(|| ApiError::not_found("job_not_found", format!("no job with slug '{slug}'")))?;

    Ok(Json(ApiOk {
        ok: true,
        data: JobDetailV1 {
            slug: job.slug.clone(),
            content: DetailContent::for_job(job),
        },
    }))
}
