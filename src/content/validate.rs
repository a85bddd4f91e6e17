//! Content integrity checks run by `brochure check` and before `build`.
//!
//! None of these conditions breaks rendering: dangling products are skipped
//! from listings and duplicate slugs resolve to the first match. They are
//! reported so the content file can be fixed before it ships.

use super::{
    store::ContentStore,
    types::{Category, NewsItem, NewsKind},
};
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single integrity problem in the content file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("product `{product}` references unknown category {category_id}")]
    DanglingCategory { product: String, category_id: u32 },

    #[error("product id `{0}` is used more than once")]
    DuplicateProductId(String),

    #[error("{collection} category {what} `{value}` is used more than once")]
    DuplicateCategory {
        collection: &'static str,
        what: &'static str,
        value: String,
    },

    #[error("{} slug `{slug}` is used more than once; only the first item is reachable", .kind.segment())]
    DuplicateSlug { kind: NewsKind, slug: String },

    #[error("{} `{slug}` has an invalid publishedDate: {reason}", .kind.segment())]
    InvalidDate {
        kind: NewsKind,
        slug: String,
        reason: String,
    },

    #[error("{what} `{value}` is a relative path segment and cannot be routed")]
    UnsafeSegment { what: String, value: String },
}

impl ContentIssue {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::DanglingCategory { .. } => Severity::Warning,
            Self::DuplicateProductId(_)
            | Self::DuplicateCategory { .. }
            | Self::DuplicateSlug { .. }
            | Self::InvalidDate { .. }
            | Self::UnsafeSegment { .. } => Severity::Error,
        }
    }
}

/// `.` and `..` would step out of their route directory once written to disk.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

fn check_segment(what: impl FnOnce() -> String, value: &str, issues: &mut Vec<ContentIssue>) {
    if is_dot_segment(value) {
        issues.push(ContentIssue::UnsafeSegment {
            what: what(),
            value: value.to_owned(),
        });
    }
}

/// Run every integrity check over the store.
pub fn validate(store: &ContentStore) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    check_categories("product", store.product_categories(), &mut issues);
    check_categories("solution", store.solution_categories(), &mut issues);

    let mut ids = FxHashSet::default();
    for product in store.products() {
        if !ids.insert(product.id.as_str()) {
            issues.push(ContentIssue::DuplicateProductId(product.id.clone()));
        }
        check_segment(|| "product id".into(), &product.id, &mut issues);
        if store.category_of(product).is_none() {
            issues.push(ContentIssue::DanglingCategory {
                product: product.id.clone(),
                category_id: product.category_id,
            });
        }
    }

    for kind in NewsKind::ALL {
        check_news(kind, store.news(kind), &mut issues);
    }

    issues
}

fn check_categories(collection: &'static str, categories: &[Category], issues: &mut Vec<ContentIssue>) {
    let mut ids = FxHashSet::default();
    let mut slugs = FxHashSet::default();
    for category in categories {
        if !ids.insert(category.id) {
            issues.push(ContentIssue::DuplicateCategory {
                collection,
                what: "id",
                value: category.id.to_string(),
            });
        }
        if !slugs.insert(category.slug.as_str()) {
            issues.push(ContentIssue::DuplicateCategory {
                collection,
                what: "slug",
                value: category.slug.clone(),
            });
        }
        check_segment(|| format!("{collection} category slug"), &category.slug, issues);
    }
}

fn check_news(kind: NewsKind, items: &[NewsItem], issues: &mut Vec<ContentIssue>) {
    let mut slugs = FxHashSet::default();
    for item in items {
        if !slugs.insert(item.slug.as_str()) {
            issues.push(ContentIssue::DuplicateSlug {
                kind,
                slug: item.slug.clone(),
            });
        }
        check_segment(|| format!("{} slug", kind.segment()), &item.slug, issues);
        if let Err(err) = item.published_date.validate() {
            issues.push(ContentIssue::InvalidDate {
                kind,
                slug: item.slug.clone(),
                reason: err.to_string(),
            });
        }
    }
}
