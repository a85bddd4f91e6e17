//! The site's URL surface as a typed route.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | `Home` |
//! | `/about`, `/contact`, `/customization` | static pages |
//! | `/products` | `Products` |
//! | `/products/{category}` | `ProductCategory` |
//! | `/products/{category}/{id}` | `Product` |
//! | `/solution`, `/solution/{category}` | `Solutions`, `SolutionCategory` |
//! | `/news` | `News` |
//! | `/news/{articles,applications}[?page=N]` | `NewsList` |
//! | `/news/{articles,applications}/{slug}` | `NewsDetail` |
//!
//! Anything else is `NotFound`.

use crate::{content::NewsKind, utils::url::encode_segment};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Customization,
    Products,
    ProductCategory { category: String },
    Product { category: String, id: String },
    Solutions,
    SolutionCategory { category: String },
    News,
    NewsList { kind: NewsKind, page: i64 },
    NewsDetail { kind: NewsKind, slug: String },
    NotFound { path: String },
}

impl Route {
    /// Parse a request path with optional query string.
    ///
    /// A missing or non-numeric `page` parameter means page 1.
    pub fn parse(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let segments: Vec<Cow<'_, str>> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).unwrap_or(Cow::Borrowed(s)))
            .collect();
        let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["customization"] => Self::Customization,
            ["products"] => Self::Products,
            ["products", category] => Self::ProductCategory {
                category: (*category).to_owned(),
            },
            ["products", category, id] => Self::Product {
                category: (*category).to_owned(),
                id: (*id).to_owned(),
            },
            ["solution"] => Self::Solutions,
            ["solution", category] => Self::SolutionCategory {
                category: (*category).to_owned(),
            },
            ["news"] => Self::News,
            ["news", kind] => match NewsKind::from_segment(kind) {
                Some(kind) => Self::NewsList {
                    kind,
                    page: page_param(query),
                },
                None => Self::not_found(path),
            },
            ["news", kind, slug] => match NewsKind::from_segment(kind) {
                Some(kind) => Self::NewsDetail {
                    kind,
                    slug: (*slug).to_owned(),
                },
                None => Self::not_found(path),
            },
            _ => Self::not_found(path),
        }
    }

    fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_owned(),
        }
    }

    /// Canonical path; listings on page 1 carry no `page` parameter.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::About => "/about".into(),
            Self::Contact => "/contact".into(),
            Self::Customization => "/customization".into(),
            Self::Products => "/products".into(),
            Self::ProductCategory { category } => category_path(category),
            Self::Product { category, id } => product_path(category, id),
            Self::Solutions => "/solution".into(),
            Self::SolutionCategory { category } => solution_path(category),
            Self::News => "/news".into(),
            Self::NewsList { kind, page } => {
                super::news::page_path(&news_list_path(*kind), (*page).max(1) as usize)
            }
            Self::NewsDetail { kind, slug } => news_detail_path(*kind, slug),
            Self::NotFound { path } => path.clone(),
        }
    }
}

/// `page` query parameter, defaulting to 1.
fn page_param(query: &str) -> i64 {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(1)
}

pub fn category_path(category_slug: &str) -> String {
    format!("/products/{}", encode_segment(category_slug))
}

pub fn product_path(category_slug: &str, id: &str) -> String {
    format!(
        "/products/{}/{}",
        encode_segment(category_slug),
        encode_segment(id)
    )
}

pub fn solution_path(category_slug: &str) -> String {
    format!("/solution/{}", encode_segment(category_slug))
}

pub fn news_list_path(kind: NewsKind) -> String {
    format!("/news/{}", kind.segment())
}

pub fn news_detail_path(kind: NewsKind, slug: &str) -> String {
    format!("/news/{}/{}", kind.segment(), encode_segment(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/contact"), Route::Contact);
        assert_eq!(Route::parse("/customization"), Route::Customization);
        assert_eq!(Route::parse("/products"), Route::Products);
        assert_eq!(Route::parse("/solution"), Route::Solutions);
        assert_eq!(Route::parse("/news"), Route::News);
    }

    #[test]
    fn test_parse_product_routes() {
        assert_eq!(
            Route::parse("/products/ventilators"),
            Route::ProductCategory {
                category: "ventilators".into()
            }
        );
        assert_eq!(
            Route::parse("/products/ventilators/vx-100"),
            Route::Product {
                category: "ventilators".into(),
                id: "vx-100".into()
            }
        );
        assert_eq!(
            Route::parse("/solution/command-system"),
            Route::SolutionCategory {
                category: "command-system".into()
            }
        );
    }

    #[test]
    fn test_parse_news_routes() {
        assert_eq!(
            Route::parse("/news/articles"),
            Route::NewsList {
                kind: NewsKind::Article,
                page: 1
            }
        );
        assert_eq!(
            Route::parse("/news/applications?page=3"),
            Route::NewsList {
                kind: NewsKind::Application,
                page: 3
            }
        );
        assert_eq!(
            Route::parse("/news/articles/article-01"),
            Route::NewsDetail {
                kind: NewsKind::Article,
                slug: "article-01".into()
            }
        );
    }

    #[test]
    fn test_parse_page_param() {
        assert_eq!(page_param(""), 1);
        assert_eq!(page_param("page=0"), 0);
        assert_eq!(page_param("page=-2"), -2);
        assert_eq!(page_param("utm_source=x&page=4"), 4);
        assert_eq!(page_param("page=abc"), 1);
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(
            Route::parse("/news/events"),
            Route::NotFound {
                path: "/news/events".into()
            }
        );
        assert!(matches!(Route::parse("/a/b/c/d"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("/blog"), Route::NotFound { .. }));
    }

    #[test]
    fn test_parse_decodes_segments() {
        assert_eq!(
            Route::parse("/products/x%20ray"),
            Route::ProductCategory {
                category: "x ray".into()
            }
        );
    }

    #[test]
    fn test_path_is_canonical() {
        assert_eq!(Route::parse("/news/articles?page=1").path(), "/news/articles");
        assert_eq!(Route::parse("/news/articles?page=2").path(), "/news/articles?page=2");
        assert_eq!(Route::parse("/products/x%20ray/").path(), "/products/x%20ray");
        assert_eq!(Route::Home.path(), "/");
    }
}
