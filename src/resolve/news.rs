//! News and application lookup and listing pagination.

use crate::content::NewsItem;

/// Items per listing page.
pub const PAGE_SIZE: usize = 10;

/// First item with `slug`. Slugs are expected to be unique per collection;
/// duplicates are reported by `content::validate`.
pub fn resolve_by_slug<'a>(items: &'a [NewsItem], slug: &str) -> Option<&'a NewsItem> {
    items.iter().find(|item| item.slug == slug)
}

/// One page of a newest-first listing.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a NewsItem>,
    /// Clamped page number, always `>= 1`.
    pub page: usize,
    /// Page number as requested (may be zero, negative or past the end).
    pub requested: i64,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_> {
    /// The caller must redirect to [`Page::canonical_path`] when true.
    pub fn needs_redirect(&self) -> bool {
        self.requested != self.page as i64
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Canonical URL path of this page under `base` (e.g. `/news/articles`).
    pub fn canonical_path(&self, base: &str) -> String {
        page_path(base, self.page)
    }
}

/// `base` for page 1, `base?page=N` otherwise.
pub fn page_path(base: &str, page: usize) -> String {
    if page <= 1 {
        base.to_owned()
    } else {
        format!("{base}?page={page}")
    }
}

/// Sort `items` newest first and cut out page `requested`.
///
/// `total_pages = ceil(n / page_size)`, the page is clamped into
/// `1..=total_pages` (page 1 for an empty collection). Items sharing a date
/// keep content order.
pub fn paginate(items: &[NewsItem], requested: i64, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let mut sorted: Vec<&NewsItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.published_date.cmp(&a.published_date));

    let total_items = sorted.len();
    let total_pages = total_items.div_ceil(page_size);
    let page = requested.clamp(1, total_pages.max(1) as i64) as usize;

    let items = sorted
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        requested,
        total_pages,
        total_items,
    }
}
