//! The authoritative in-memory job collection. Parses the feed, sorts it
//! newest first, drops duplicates and attaches derived fields exactly once.
//! Immutable after load.

use jobbermed_core::{Job, RawJob};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

/// The feed document: either a bare array of records or an object wrapping
/// them under a `jobs` key (the pipeline emits the latter, older snapshots
/// the former).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Feed {
    Wrapped {
        #[serde(default)]
        metadata: Option<serde_json::Value>,
        jobs: Vec<RawJob>,
    },
    Bare(Vec<RawJob>),
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("feed contains no jobs")]
    Empty,
}

#[derive(Debug)]
pub struct JobStore {
    jobs: Vec<Job>,
    metadata: Option<serde_json::Value>,
}

impl JobStore {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FeedError> {
        let feed: Feed = serde_json::from_slice(bytes)?;
        Self::load(feed)
    }

    pub fn load(feed: Feed) -> Result<Self, FeedError> {
        let (metadata, mut raw) = match feed {
            Feed::Wrapped { metadata, jobs } => (metadata, jobs),
            Feed::Bare(jobs) => (None, jobs),
        };
        if raw.is_empty() {
            return Err(FeedError::Empty);
        }

        // Lexicographic descending on date_posted; absent dates sort last.
        raw.sort_by(|a, b| {
            let da = a.date_posted.as_deref().unwrap_or("");
            let db = b.date_posted.as_deref().unwrap_or("");
            db.cmp(da)
        });

        // Newest-first order makes the surviving duplicate the newest one.
        let before = raw.len();
        let mut seen = HashSet::new();
        raw.retain(|job| {
            let key = format!(
                "{}|{}",
                job.job_title.as_deref().unwrap_or("").trim().to_lowercase(),
                job.company.as_deref().unwrap_or("").trim().to_lowercase(),
            );
            seen.insert(key)
        });
        let duplicates = before - raw.len();

        let jobs: Vec<Job> = raw.into_iter().map(Job::derive).collect();
        info!(total = jobs.len(), duplicates, "job store loaded");
        Ok(Self { jobs, metadata })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    /// Tolerant slug lookup: exact derived-slug equality first, then apply
    /// URLs containing the slug (legacy and foreign slugs).
    pub fn find_by_slug(&self, slug: &str) -> Option<&Job> {
        self.jobs
            .iter()
            .find(|j| j.slug == slug)
            .or_else(|| {
                self.jobs.iter().find(|j| {
                    jobbermed_core::slug::slug_matches(slug, &j.slug, j.raw.apply_url.as_deref())
                })
            })
    }
}
