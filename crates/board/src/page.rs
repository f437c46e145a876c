//! Fixed-size pagination over the filtered list.

use jobbermed_core::Job;

pub const PAGE_SIZE: usize = 12;

#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Job>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageView<'_> {
    /// Zero or one pages means no pagination controls at all.
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slice `[(page-1)*size, page*size)`, clamped by length. An out-of-range
/// page yields an empty slice; resetting to page 1 on criterion changes is
/// the filter engine's job, not this one's.
pub fn paginate<'a>(jobs: &[&'a Job], page: usize) -> PageView<'a> {
    let page = page.max(1);
    let total = jobs.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(total);
    let end = (start + PAGE_SIZE).min(total);
    PageView {
        items: jobs[start..end].to_vec(),
        page,
        total,
        total_pages,
    }
}
