//! The active filter state. One value per criterion, owned by the
//! controller and passed by reference into the filter engine, never held
//! in ambient globals.

use jobbermed_core::taxonomy::ALL_CATEGORY;

pub const ALL_LOCATIONS: &str = "All locations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub location: String,
    /// Lowercase, trimmed. Empty means no keyword filter.
    pub query: String,
    /// 1-based. Reset to 1 whenever any criterion changes.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            location: ALL_LOCATIONS.to_string(),
            query: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.page = 1;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn category_is_all(&self) -> bool {
        self.category == ALL_CATEGORY
    }

    pub fn location_is_all(&self) -> bool {
        self.location == ALL_LOCATIONS
    }
}
