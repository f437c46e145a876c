pub mod controller;
pub mod detail;
pub mod filter;
pub mod history;
pub mod page;
pub mod state;
pub mod store;
pub mod urlstate;

pub use controller::BoardController;
pub use detail::{ApplyAction, DetailContent, DetailState};
pub use filter::FilterOutcome;
pub use page::{PageView, PAGE_SIZE};
pub use state::{FilterState, ALL_LOCATIONS};
pub use store::{Feed, FeedError, JobStore};
pub use urlstate::UrlState;
