//! Page types and their fixed SEO text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of page the site renders.
///
/// Used as `[seo.templates.<page-type>]` key in brochure.toml (kebab-case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    Home,
    About,
    Contact,
    Customization,
    Products,
    ProductCategory,
    ProductDetail,
    Solutions,
    SolutionCategory,
    News,
    Articles,
    Applications,
    ArticleDetail,
    ApplicationDetail,
    NotFound,
}

impl PageType {
    /// Kebab-case name, as used in `[seo.templates.<page-type>]`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Customization => "customization",
            Self::Products => "products",
            Self::ProductCategory => "product-category",
            Self::ProductDetail => "product-detail",
            Self::Solutions => "solutions",
            Self::SolutionCategory => "solution-category",
            Self::News => "news",
            Self::Articles => "articles",
            Self::Applications => "applications",
            Self::ArticleDetail => "article-detail",
            Self::ApplicationDetail => "application-detail",
            Self::NotFound => "not-found",
        }
    }

    /// Default `(title, description)` templates.
    pub const fn templates(self) -> (&'static str, &'static str) {
        match self {
            Self::Home => ("{site}", "{description}"),
            Self::About => (
                "About Us | {site}",
                "Learn about {site}: our history, certifications, industries and production lines.",
            ),
            Self::Contact => (
                "Contact Us | {site}",
                "Get in touch with {site} for quotes, technical support and partnerships.",
            ),
            Self::Customization => (
                "Custom Solutions | {site}",
                "From consultation to delivery: how {site} builds equipment to your requirements.",
            ),
            Self::Products => (
                "Products | {site}",
                "Browse the full product catalog of {site}.",
            ),
            Self::ProductCategory => ("{title} | Products | {site}", "{title} from {site}. {description}"),
            Self::ProductDetail => ("{title} - {category} | {site}", "{description}"),
            Self::Solutions => (
                "Solutions | {site}",
                "Integrated solutions from {site} for hospitals and emergency services.",
            ),
            Self::SolutionCategory => ("{title} | Solutions | {site}", "{description}"),
            Self::News => ("News | {site}", "Company news and application cases from {site}."),
            Self::Articles => ("Company News | {site}", "The latest company news from {site}."),
            Self::Applications => (
                "Application Cases | {site}",
                "How customers use equipment from {site} in the field.",
            ),
            Self::ArticleDetail => ("{title} | News | {site}", "{description}"),
            Self::ApplicationDetail => ("{title} | Application Cases | {site}", "{description}"),
            Self::NotFound => ("Page Not Found | {site}", "The page you are looking for does not exist."),
        }
    }

    /// Keywords added for every page of this type.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["medical equipment manufacturer", "medical solutions"],
            Self::About => &["company profile", "certifications", "production lines"],
            Self::Contact => &["contact", "quote", "technical support"],
            Self::Customization => &["custom equipment", "OEM", "ODM"],
            Self::Products | Self::ProductCategory | Self::ProductDetail => {
                &["products", "medical devices"]
            }
            Self::Solutions | Self::SolutionCategory => &["solutions", "command system"],
            Self::News | Self::Articles | Self::ArticleDetail => &["news", "company news"],
            Self::Applications | Self::ApplicationDetail => &["application cases", "case studies"],
            Self::NotFound => &[],
        }
    }

    /// `og:type`
    pub const fn og_type(self) -> &'static str {
        match self {
            Self::ArticleDetail | Self::ApplicationDetail => "article",
            Self::ProductDetail => "product",
            _ => "website",
        }
    }

    /// Detail pages render nothing useful without their entity.
    pub const fn requires_entity(self) -> bool {
        matches!(
            self,
            Self::ProductCategory
                | Self::ProductDetail
                | Self::SolutionCategory
                | Self::ArticleDetail
                | Self::ApplicationDetail
        )
    }

    /// Fixed `(title, description)` when the entity cannot be resolved.
    pub const fn not_found_text(self) -> (&'static str, &'static str) {
        match self {
            Self::ProductCategory => (
                "Category Not Found",
                "The requested product category does not exist.",
            ),
            Self::ProductDetail => (
                "Product Not Found",
                "The requested product does not exist or has been removed.",
            ),
            Self::SolutionCategory => (
                "Solution Not Found",
                "The requested solution does not exist.",
            ),
            Self::ArticleDetail => (
                "Article Not Found",
                "The requested article does not exist or has been removed.",
            ),
            Self::ApplicationDetail => (
                "Application Case Not Found",
                "The requested application case does not exist or has been removed.",
            ),
            _ => ("Page Not Found", "The page you are looking for does not exist."),
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
