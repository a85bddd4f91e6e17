//! The loaded content file.
//!
//! The JSON document is parsed once, the entity collections are deserialized
//! into typed vectors, and the raw `pages` tree is kept for the
//! dot-path [`Accessor`]. The store is never mutated after loading; share it
//! by reference.

use super::{
    accessor::Accessor,
    types::{Category, NewsItem, NewsKind, Product},
};
use crate::resolve::catalog::{find_category_by_id, find_category_by_slug};
use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Content loading errors.
///
/// A missing or malformed entity collection fails the load; free-form
/// sections are only checked when accessed.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("content schema error: {0}")]
    Schema(#[source] serde_json::Error),
}

// ============================================================================
// Schema
// ============================================================================

#[derive(Deserialize)]
struct Document {
    pages: Pages,
}

#[derive(Deserialize)]
struct Pages {
    products: ProductsSection,
    solution: SolutionSection,
    news: NewsSection,
}

#[derive(Deserialize)]
struct ProductsSection {
    categories: Vec<Category>,
    items: Vec<Product>,
}

#[derive(Deserialize)]
struct SolutionSection {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct NewsSection {
    #[serde(default)]
    articles: Vec<NewsItem>,
    #[serde(default)]
    applications: Vec<NewsItem>,
}

// ============================================================================
// Store
// ============================================================================

/// Immutable, typed view of the content file.
#[derive(Debug)]
pub struct ContentStore {
    /// The `pages` subtree, for free-form sections.
    pages: Value,
    product_categories: Vec<Category>,
    products: Vec<Product>,
    solution_categories: Vec<Category>,
    articles: Vec<NewsItem>,
    applications: Vec<NewsItem>,
}

impl ContentStore {
    /// Load the content file from disk.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let root: Value = serde_json::from_str(&content)
            .map_err(|err| ContentError::Json(path.to_path_buf(), err))?;
        Self::from_value(root)
    }

    /// Build the store from an already parsed document.
    pub fn from_value(mut root: Value) -> Result<Self, ContentError> {
        let document = Document::deserialize(&root).map_err(ContentError::Schema)?;
        let pages = root
            .get_mut("pages")
            .map(Value::take)
            .unwrap_or_default();

        let Pages {
            products,
            solution,
            news,
        } = document.pages;

        Ok(Self {
            pages,
            product_categories: products.categories,
            products: products.items,
            solution_categories: solution.categories,
            articles: news.articles,
            applications: news.applications,
        })
    }

    /// Dot-path accessor rooted at `pages`.
    pub fn accessor(&self) -> Accessor<'_> {
        Accessor::new(&self.pages)
    }

    pub fn product_categories(&self) -> &[Category] {
        &self.product_categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn solution_categories(&self) -> &[Category] {
        &self.solution_categories
    }

    pub fn articles(&self) -> &[NewsItem] {
        &self.articles
    }

    pub fn applications(&self) -> &[NewsItem] {
        &self.applications
    }

    /// The collection backing `/news/{kind}`.
    pub fn news(&self, kind: NewsKind) -> &[NewsItem] {
        match kind {
            NewsKind::Article => &self.articles,
            NewsKind::Application => &self.applications,
        }
    }

    /// First product category with `id`.
    pub fn product_category(&self, id: u32) -> Option<&Category> {
        find_category_by_id(&self.product_categories, id)
    }

    pub fn product_category_by_slug(&self, slug: &str) -> Option<&Category> {
        find_category_by_slug(&self.product_categories, slug)
    }

    pub fn solution_category_by_slug(&self, slug: &str) -> Option<&Category> {
        find_category_by_slug(&self.solution_categories, slug)
    }

    /// Category of a product, `None` for a dangling `categoryId`.
    pub fn category_of(&self, product: &Product) -> Option<&Category> {
        self.product_category(product.category_id)
    }
}
