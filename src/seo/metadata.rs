//! Per-page metadata records.
//!
//! [`SeoGenerator::build_metadata`] turns a page type, its resolved entity
//! and caller overrides into everything an HTML head needs: title,
//! description, keywords, canonical URL, Open Graph and Twitter fields,
//! robots directives and JSON-LD.

use super::{PageType, jsonld, keywords::merge_keywords, template};
use crate::{
    config::SiteConfig,
    content::{Category, NewsItem, NewsKind, Product},
    resolve::BreadcrumbItem,
    utils::date::PublishedDate,
};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

// ============================================================================
// Input
// ============================================================================

/// The content entity a page is about.
#[derive(Debug, Clone, Copy)]
pub enum PageEntity<'a> {
    Product {
        product: &'a Product,
        category: &'a Category,
    },
    /// Product or solution category.
    Category(&'a Category),
    News {
        item: &'a NewsItem,
        kind: NewsKind,
    },
}

impl<'a> PageEntity<'a> {
    fn title(&self) -> &'a str {
        match self {
            Self::Product { product, .. } => product.title(),
            Self::Category(category) => &category.title,
            Self::News { item, .. } => &item.title,
        }
    }

    fn description(&self) -> Option<String> {
        match self {
            Self::Product { product, .. } => Some(product.description()),
            Self::Category(_) => None,
            Self::News { item, .. } => Some(item.description.clone()),
        }
    }

    /// Value of `{category}` and the category-derived keyword.
    fn category(&self) -> Option<&'a str> {
        match self {
            Self::Product { category, .. } => Some(&category.title),
            Self::Category(category) => Some(&category.title),
            Self::News { kind, .. } => Some(kind.category()),
        }
    }

    fn images(&self) -> Vec<&'a str> {
        match self {
            Self::Product { product, .. } => std::iter::once(&product.image)
                .chain(&product.gallery)
                .map(String::as_str)
                .collect(),
            Self::Category(_) => Vec::new(),
            Self::News { item, .. } => vec![&item.image],
        }
    }

    fn image_alt(&self) -> &'a str {
        match self {
            Self::Product { product, .. } if !product.alt.is_empty() => &product.alt,
            Self::News { item, .. } if !item.alt.is_empty() => &item.alt,
            _ => self.title(),
        }
    }

    fn published(&self) -> Option<PublishedDate> {
        match self {
            Self::News { item, .. } => Some(item.published_date),
            _ => None,
        }
    }
}

/// Caller-supplied adjustments.
///
/// `title` and `description` replace the rendered template output;
/// `keywords` are merged after the page-type set.
#[derive(Debug, Clone, Default)]
pub struct MetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structured_data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<OgArticle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgArticle {
    pub published_time: String,
    pub author: String,
    pub section: &'static str,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
}

impl RobotsDirectives {
    pub const INDEX: Self = Self {
        index: true,
        follow: true,
    };
    pub const NOINDEX: Self = Self {
        index: false,
        follow: true,
    };
}

impl fmt::Display for RobotsDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        write!(f, "{index}, {follow}")
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Builds metadata records against one site configuration.
#[derive(Debug, Clone, Copy)]
pub struct SeoGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> SeoGenerator<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Metadata for the page at `path`.
    ///
    /// A detail page type without its entity yields the not-found record.
    pub fn build_metadata(
        &self,
        page_type: PageType,
        path: &str,
        entity: Option<&PageEntity>,
        overrides: &MetaOverrides,
    ) -> MetadataRecord {
        match entity {
            None if page_type.requires_entity() => self.not_found(page_type, path),
            entity => self.render(page_type, path, entity, overrides),
        }
    }

    /// Fixed record for an entity that could not be resolved.
    pub fn not_found(&self, page_type: PageType, path: &str) -> MetadataRecord {
        let (title, description) = page_type.not_found_text();
        let canonical = self.config.url_for(path);
        let image = self.og_image(&self.config.seo.image, title);

        MetadataRecord {
            title: title.to_owned(),
            description: description.to_owned(),
            keywords: merge_keywords(self.config.seo.keywords.iter().map(String::as_str)),
            canonical: canonical.clone(),
            open_graph: OpenGraph {
                og_type: "website",
                title: title.to_owned(),
                description: description.to_owned(),
                url: canonical,
                site_name: self.config.base.title.clone(),
                images: vec![image.clone()],
                locale: self.config.base.locale.clone(),
                article: None,
            },
            twitter: self.twitter(title, description, vec![image.url]),
            robots: RobotsDirectives::NOINDEX,
            structured_data: Vec::new(),
        }
    }

    fn render(
        &self,
        page_type: PageType,
        path: &str,
        entity: Option<&PageEntity>,
        overrides: &MetaOverrides,
    ) -> MetadataRecord {
        let config = self.config;
        let canonical = config.url_for(path);

        let entity_description = entity.and_then(PageEntity::description);
        let vars = template::TemplateVars {
            title: entity.map(PageEntity::title),
            description: Some(
                entity_description
                    .as_deref()
                    .unwrap_or(&config.base.description),
            ),
            category: entity.and_then(PageEntity::category),
            site: Some(&config.base.title),
        };

        let (default_title, default_description) = page_type.templates();
        let custom = config.template_override(page_type);
        let title_template = custom
            .and_then(|t| t.title.as_deref())
            .unwrap_or(default_title);
        let description_template = custom
            .and_then(|t| t.description.as_deref())
            .unwrap_or(default_description);

        let title = overrides
            .title
            .clone()
            .unwrap_or_else(|| template::fill(title_template, &vars));
        let description = overrides
            .description
            .clone()
            .unwrap_or_else(|| template::fill(description_template, &vars));

        let keywords = merge_keywords(
            config
                .seo
                .keywords
                .iter()
                .map(String::as_str)
                .chain(page_type.keywords().iter().copied())
                .chain(overrides.keywords.iter().map(String::as_str))
                .chain(vars.category),
        );

        let alt = entity.map_or(title.as_str(), PageEntity::image_alt);
        let mut images: Vec<OgImage> = entity
            .map(PageEntity::images)
            .unwrap_or_default()
            .into_iter()
            .map(|image| self.og_image(image, alt))
            .collect();
        if images.is_empty() {
            let fallback = overrides.image.as_deref().unwrap_or(&config.seo.image);
            images.push(self.og_image(fallback, alt));
        }

        let article = entity
            .and_then(PageEntity::published)
            .filter(|_| page_type.og_type() == "article")
            .map(|date| OgArticle {
                published_time: date.to_rfc3339(),
                author: config.base.author.clone(),
                section: vars.category.and_then(section_label).unwrap_or("News"),
                tags: keywords.clone(),
            });

        let structured_data = self.structured_data(page_type, entity, overrides, &canonical);
        let robots = if page_type == PageType::NotFound {
            RobotsDirectives::NOINDEX
        } else {
            RobotsDirectives::INDEX
        };

        MetadataRecord {
            twitter: self.twitter(
                &title,
                &description,
                images.iter().take(1).map(|image| image.url.clone()).collect(),
            ),
            open_graph: OpenGraph {
                og_type: page_type.og_type(),
                title: title.clone(),
                description: description.clone(),
                url: canonical.clone(),
                site_name: config.base.title.clone(),
                images,
                locale: config.base.locale.clone(),
                article,
            },
            title,
            description,
            keywords,
            canonical,
            robots,
            structured_data,
        }
    }

    fn structured_data(
        &self,
        page_type: PageType,
        entity: Option<&PageEntity>,
        overrides: &MetaOverrides,
        canonical: &str,
    ) -> Vec<Value> {
        let config = self.config;
        let mut data = Vec::new();

        match (page_type, entity) {
            (PageType::Home | PageType::About | PageType::Contact, _) => {
                data.push(jsonld::organization(config));
            }
            (PageType::ProductDetail, Some(PageEntity::Product { product, category })) => {
                data.push(jsonld::product(config, product, category, canonical));
            }
            (
                PageType::ArticleDetail | PageType::ApplicationDetail,
                Some(PageEntity::News { item, kind }),
            ) => {
                data.push(jsonld::article(config, item, *kind, canonical));
            }
            _ => {}
        }

        if !overrides.breadcrumbs.is_empty() {
            data.push(jsonld::breadcrumb_list(
                config,
                &overrides.breadcrumbs,
                canonical,
            ));
        }
        data
    }

    fn og_image(&self, image: &str, alt: &str) -> OgImage {
        OgImage {
            url: self.config.url_for(image),
            alt: alt.to_owned(),
        }
    }

    fn twitter(&self, title: &str, description: &str, images: Vec<String>) -> TwitterCard {
        TwitterCard {
            card: "summary_large_image",
            site: self.config.seo.twitter.clone(),
            title: title.to_owned(),
            description: description.to_owned(),
            images,
        }
    }
}

/// `article:section` for the news category labels.
fn section_label(category: &str) -> Option<&'static str> {
    NewsKind::ALL
        .into_iter()
        .map(NewsKind::category)
        .find(|label| *label == category)
}

// ============================================================================
// Tests
// ============================================================================
