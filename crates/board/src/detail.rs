//! The detail panel: a two-state machine (closed / open on a slug) plus the
//! view-model the render layer consumes. Opening records the scroll offset
//! and locks background scroll; closing restores both.

use jobbermed_core::{dates, Job};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        slug: String,
    },
}

#[derive(Debug, Default)]
pub struct DetailRouter {
    state: DetailState,
    saved_scroll: Option<f64>,
    scroll_locked: bool,
}

impl DetailRouter {
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn current_slug(&self) -> Option<&str> {
        match &self.state {
            DetailState::Open { slug } => Some(slug),
            DetailState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open { .. })
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Closed -> Open. Remembers where the list was scrolled to.
    pub fn open(&mut self, slug: impl Into<String>, scroll_offset: f64) {
        self.saved_scroll = Some(scroll_offset);
        self.scroll_locked = true;
        self.state = DetailState::Open { slug: slug.into() };
    }

    /// Direct repopulation for forward/back navigation landing on another
    /// slug: no intermediate close, scroll bookkeeping untouched.
    pub fn navigate_to(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if !self.is_open() {
            debug!(%slug, "detail navigate while closed, treating as open");
            self.scroll_locked = true;
        }
        self.state = DetailState::Open { slug };
    }

    /// Open -> Closed. Returns the scroll offset to restore, if one was
    /// recorded.
    pub fn close(&mut self) -> Option<f64> {
        self.state = DetailState::Closed;
        self.scroll_locked = false;
        self.saved_scroll.take()
    }
}

/// Everything the detail view renders, in render order. Lists are complete
/// and untruncated.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DetailContent {
    pub title: String,
    pub company_line: String,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub tags: DetailTags,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub how_to_apply: Vec<String>,
    pub apply: ApplyAction,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DetailTags {
    pub posted: String,
    pub category: &'static str,
    pub job_type: Option<String>,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ApplyAction {
    Link(String),
    /// No apply URL: render the button disabled instead of hiding it.
    Disabled,
}

impl DetailContent {
    pub fn for_job(job: &Job) -> Self {
        let company_line = match job.raw.location.as_deref().map(str::trim).filter(|l| !l.is_empty())
        {
            Some(location) => format!("{} • {}", job.company_display(), location),
            None => job.company_display().to_string(),
        };
        Self {
            title: job.title_display().to_string(),
            company_line,
            salary: job.salary_display().map(str::to_string),
            source: job.raw.source.clone(),
            tags: DetailTags {
                posted: dates::format_display(job.raw.date_posted.as_deref()),
                category: job.category,
                job_type: job.raw.job_type.clone().filter(|t| !t.trim().is_empty()),
                deadline: dates::format_display(job.raw.deadline.as_deref()),
            },
            requirements: job.raw.requirements.clone(),
            responsibilities: job.raw.responsibilities.clone(),
            how_to_apply: job.raw.how_to_apply.clone(),
            apply: match job.raw.apply_url.as_deref().filter(|u| !u.trim().is_empty()) {
                Some(url) => ApplyAction::Link(url.to_string()),
                None => ApplyAction::Disabled,
            },
        }
    }
}
