//! Breadcrumb trails.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_current_page: bool,
}

/// Builds a trail starting at Home and ending at the current page.
///
/// ```ignore
/// let trail = Breadcrumbs::home()
///     .link("Products", "/products")
///     .current("Ventilators");
/// ```
#[derive(Debug, Default)]
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumbs {
    pub fn home() -> Self {
        Self::default().link("Home", "/")
    }

    pub fn link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.items.push(BreadcrumbItem {
            label: label.into(),
            href: Some(href.into()),
            is_current_page: false,
        });
        self
    }

    /// Close the trail with the current page (no link).
    pub fn current(mut self, label: impl Into<String>) -> Vec<BreadcrumbItem> {
        self.items.push(BreadcrumbItem {
            label: label.into(),
            href: None,
            is_current_page: true,
        });
        self.items
    }
}
