//! Loading the normalized feed into a `JobStore`. The fetch is the one
//! asynchronous boundary of the whole board; a failure here is terminal for
//! the page load and surfaces as a static error state, never a retry loop.

use jobbermed_board::{FeedError, JobStore};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FeedSourceError {
    #[error("could not read feed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not fetch feed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Feed from a local file.
pub async fn read_feed(path: &Path) -> Result<JobStore, FeedSourceError> {
    let bytes = tokio::fs::read(path).await?;
    info!(path = %path.display(), bytes = bytes.len(), "feed read from disk");
    Ok(JobStore::from_slice(&bytes)?)
}

/// Feed over HTTP, for deployments where the pipeline publishes elsewhere.
pub async fn fetch_feed(url: &str) -> Result<JobStore, FeedSourceError> {
    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;
    info!(%url, bytes = bytes.len(), "feed fetched");
    Ok(JobStore::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_a_feed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master_jobs.json");
        tokio::fs::write(
            &path,
            r#"{"jobs": [{"job_title": "Registered Nurse", "location": "Lagos"}]}"#,
        )
        .await
        .unwrap();

        let store = read_feed(&path).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = read_feed(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, FeedSourceError::Io(_)));
    }

    #[tokio::test]
    async fn empty_feed_propagates_the_feed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        tokio::fs::write(&path, r#"{"jobs": []}"#).await.unwrap();

        let err = read_feed(&path).await.unwrap_err();
        assert!(matches!(err, FeedSourceError::Feed(FeedError::Empty)));
    }
}
