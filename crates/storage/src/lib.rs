pub mod feed;
pub mod saved;

pub use feed::{fetch_feed, read_feed, FeedSourceError};
pub use saved::{migrate_local_to_remote, LocalSavedStore, SavedJobsStore, SavedSummary};
