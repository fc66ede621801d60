use serde::Deserialize;

/// Fixed page size for every paginated endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter, defaulting to the first page.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Slice one page out of an in-memory result set.
///
/// Pages are 1-based; values below 1 are clamped to 1. A page past the end of
/// the data yields an empty slice, which endpoints return as an empty list
/// alongside the real totals.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1) * QUESTIONS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
