//! The single owner of browsing state: filters, detail panel and the
//! history binding. Render layers read from it; user interaction and
//! navigation events are methods on it. One logical thread of control, no
//! ambient globals.

use crate::detail::{DetailContent, DetailRouter, DetailState};
use crate::filter::{self, FilterOutcome};
use crate::history::History;
use crate::page::{self, PageView};
use crate::state::FilterState;
use crate::store::JobStore;
use crate::urlstate::UrlState;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

pub struct BoardController {
    store: Arc<JobStore>,
    filters: FilterState,
    router: DetailRouter,
    history: History,
    today: NaiveDate,
}

impl BoardController {
    /// Hydrates state from whatever query string the page loaded with. A
    /// `job` slug that no longer resolves leaves the panel closed; it never
    /// faults.
    pub fn new(store: Arc<JobStore>, today: NaiveDate, initial_query: &str) -> Self {
        let url = UrlState::parse(initial_query);
        let filters = url.hydrate();
        let mut router = DetailRouter::default();
        if let Some(slug) = &url.job {
            if store.find_by_slug(slug).is_some() {
                router.open(slug.clone(), 0.0);
            } else {
                debug!(%slug, "deep-linked job not found, staying closed");
            }
        }
        let history = History::new(UrlState::capture(&filters, router.state()).to_query());
        Self {
            store,
            filters,
            router,
            history,
            today,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn detail_state(&self) -> &DetailState {
        self.router.state()
    }

    /// The shareable query string for the current state.
    pub fn current_query(&self) -> String {
        UrlState::capture(&self.filters, self.router.state()).to_query()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    //
    // Filter interactions: history replace, never push.
    //

    pub fn set_category(&mut self, category: &str) {
        self.filters.set_category(category);
        self.replace_url();
    }

    pub fn set_location(&mut self, location: &str) {
        self.filters.set_location(location);
        self.replace_url();
    }

    pub fn set_query(&mut self, query: &str) {
        self.filters.set_query(query);
        self.replace_url();
    }

    pub fn set_page(&mut self, page: usize) {
        self.filters.set_page(page);
    }

    //
    // Detail interactions: history push, so back/forward step through
    // detail views.
    //

    pub fn open_job(&mut self, slug: &str, scroll_offset: f64) {
        if self.store.find_by_slug(slug).is_none() {
            debug!(%slug, "open requested for unknown slug, ignoring");
            return;
        }
        self.router.open(slug, scroll_offset);
        self.push_url();
    }

    /// Close via button, overlay click or Escape. Returns the scroll offset
    /// to restore.
    pub fn close_detail(&mut self) -> Option<f64> {
        let restored = self.router.close();
        self.push_url();
        restored
    }

    /// Browser back. Re-applies whatever state the previous entry encodes;
    /// landing on a different slug repopulates the panel directly. When the
    /// step closed the panel, returns the scroll offset to restore.
    pub fn navigate_back(&mut self) -> Option<f64> {
        let target = self.history.back().map(str::to_string);
        target.and_then(|url| self.apply_url(&url))
    }

    /// Browser forward, same contract as `navigate_back`.
    pub fn navigate_forward(&mut self) -> Option<f64> {
        let target = self.history.forward().map(str::to_string);
        target.and_then(|url| self.apply_url(&url))
    }

    //
    // Views.
    //

    /// Filter chain plus counts. May reset a stale location selection.
    pub fn outcome(&mut self) -> FilterOutcome<'_> {
        filter::apply(self.store.jobs(), &mut self.filters, self.today)
    }

    /// The current page of visible jobs.
    pub fn visible_page(&self) -> PageView<'_> {
        let page = self.filters.page;
        let visible = filter::visible_jobs(self.store.jobs(), &self.filters, self.today);
        page::paginate(&visible, page)
    }

    /// View-model for the open detail panel; None while closed or when the
    /// slug vanished from the collection.
    pub fn detail_content(&self) -> Option<DetailContent> {
        let slug = self.router.current_slug()?;
        self.store.find_by_slug(slug).map(DetailContent::for_job)
    }

    fn replace_url(&mut self) {
        self.history.replace(self.current_query());
    }

    fn push_url(&mut self) {
        self.history.push(self.current_query());
    }

    fn apply_url(&mut self, query: &str) -> Option<f64> {
        let url = UrlState::parse(query);
        self.filters = url.hydrate();
        match url.job {
            Some(slug) if self.store.find_by_slug(&slug).is_some() => {
                self.router.navigate_to(slug);
                None
            }
            _ => self.router.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JobStore;
    use jobbermed_core::Job;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 23).unwrap()
    }

    fn store() -> Arc<JobStore> {
        let feed = serde_json::json!({"jobs": [
            {
                "job_title": "Registered Nurse",
                "company": "St. Mary Clinic",
                "location": "Lagos, Nigeria",
                "date_posted": "2026-01-10",
                "deadline": "2099-01-01",
            },
            {
                "job_title": "Medical Officer",
                "company": "Garki Hospital",
                "location": "Abuja, Nigeria",
                "date_posted": "2026-01-12",
                "deadline": "2099-01-01",
                "apply_url": "https://example.com/jobs/medical-officer-abuja",
            },
        ]});
        Arc::new(JobStore::from_slice(feed.to_string().as_bytes()).unwrap())
    }

    #[test]
    fn filter_changes_replace_detail_changes_push() {
        let mut board = BoardController::new(store(), today(), "");
        let initial_len = board.history().len();

        board.set_category("Doctors");
        board.set_query("abuja");
        assert_eq!(board.history().len(), initial_len);

        board.open_job("medical-officer-abuja", 250.0);
        assert_eq!(board.history().len(), initial_len + 1);
        assert!(board.current_query().contains("job=medical-officer-abuja"));

        board.close_detail();
        assert_eq!(board.history().len(), initial_len + 2);
        assert!(!board.current_query().contains("job="));
    }

    #[test]
    fn back_past_the_push_closes_the_panel() {
        let mut board = BoardController::new(store(), today(), "");
        board.open_job("medical-officer-abuja", 0.0);
        assert!(matches!(board.detail_state(), DetailState::Open { .. }));

        board.navigate_back();
        assert_eq!(board.detail_state(), &DetailState::Closed);

        board.navigate_forward();
        assert!(matches!(board.detail_state(), DetailState::Open { .. }));
        assert!(board.detail_content().is_some());
    }

    #[test]
    fn back_close_restores_the_recorded_scroll_offset() {
        let mut board = BoardController::new(store(), today(), "");
        board.open_job("medical-officer-abuja", 300.0);

        let restored = board.navigate_back();
        assert_eq!(board.detail_state(), &DetailState::Closed);
        assert_eq!(restored, Some(300.0));

        // Stepping forward reopens; nothing was closed, so nothing to restore.
        assert_eq!(board.navigate_forward(), None);
        assert!(matches!(board.detail_state(), DetailState::Open { .. }));
    }

    #[test]
    fn hydration_from_query_string() {
        let board =
            BoardController::new(store(), today(), "?category=Doctors&q=garki&job=medical-officer-abuja");
        assert_eq!(board.filters().category, "Doctors");
        assert_eq!(board.filters().query, "garki");
        assert!(matches!(board.detail_state(), DetailState::Open { .. }));

        let page = board.visible_page();
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn stale_deep_link_resolves_to_closed() {
        let board = BoardController::new(store(), today(), "?job=since-removed-job");
        assert_eq!(board.detail_state(), &DetailState::Closed);
        assert!(board.detail_content().is_none());
    }

    #[test]
    fn detail_round_trip_through_the_url() {
        let mut board = BoardController::new(store(), today(), "");
        board.open_job("medical-officer-abuja", 0.0);

        let query = board.current_query();
        let slug = UrlState::parse(&query).job.unwrap();
        let rehydrated = BoardController::new(store(), today(), &format!("?job={slug}"));
        let content = rehydrated.detail_content().unwrap();
        assert_eq!(content.title, "Medical Officer");
    }

    #[test]
    fn scenario_single_nurse_feed() {
        let feed = serde_json::json!([{
            "job_title": "Registered Nurse",
            "location": "Lagos, Nigeria",
            "deadline": "2099-01-01",
        }]);
        let store = Arc::new(JobStore::from_slice(feed.to_string().as_bytes()).unwrap());
        let job: &Job = &store.jobs()[0];
        assert_eq!(job.category, "Nurses & Midwives");
        assert_eq!(job.location_buckets, vec!["Lagos State"]);

        let mut board = BoardController::new(store.clone(), today(), "");
        assert_eq!(board.visible_page().items.len(), 1);

        board.set_location("Lagos State");
        assert_eq!(board.visible_page().items.len(), 1);

        let mut other = BoardController::new(store, today(), "");
        other.set_location("FCT");
        assert!(other.visible_page().items.is_empty());
    }
}
