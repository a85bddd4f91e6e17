//! `[seo]` section configuration.
//!
//! Global keywords, the default social image, the organization behind the
//! site (used for JSON-LD) and per-page-type template overrides.

use super::defaults;
use crate::seo::PageType;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[seo]` section in brochure.toml.
///
/// # Example
/// ```toml
/// [seo]
/// keywords = ["medical equipment", "hospital solutions"]
/// image = "/images/og-default.jpg"
/// twitter = "@acme"
///
/// [seo.organization]
/// name = "Acme Medical Co., Ltd."
/// phone = "+86-21-0000-0000"
///
/// [seo.templates.product-detail]
/// title = "{title} | {category} | {site}"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Primary keywords prepended to every page's keyword list.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Fallback social preview image (relative paths resolve against `[base].url`).
    #[serde(default = "defaults::seo::image")]
    #[educe(Default = defaults::seo::image())]
    pub image: String,

    /// Twitter handle for `twitter:site`.
    #[serde(default)]
    pub twitter: Option<String>,

    #[serde(default)]
    pub organization: OrganizationConfig,

    /// Title/description template overrides keyed by page type.
    #[serde(default)]
    pub templates: BTreeMap<PageType, TemplateOverride>,
}

/// `[seo.organization]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OrganizationConfig {
    /// Legal name; falls back to `[base].title`.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "defaults::seo::organization::logo")]
    #[educe(Default = defaults::seo::organization::logo())]
    pub logo: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Social profile URLs (`sameAs`).
    #[serde(default)]
    pub same_as: Vec<String>,
}

/// `[seo.templates.<page-type>]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateOverride {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::seo::PageType;

    #[test]
    fn test_seo_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.seo.keywords.is_empty());
        assert_eq!(config.seo.image, "/images/og-default.jpg");
        assert_eq!(config.seo.organization.logo, "/images/logo.png");
        assert!(config.seo.organization.name.is_none());
        assert!(config.seo.templates.is_empty());
    }

    #[test]
    fn test_seo_template_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [seo]
            keywords = ["ventilator", "monitor"]

            [seo.organization]
            name = "Acme Medical Co., Ltd."
            same_as = ["https://www.linkedin.com/company/acme"]

            [seo.templates.product-detail]
            title = "{title} - {site}"

            [seo.templates.article-detail]
            description = "{description}"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.seo.keywords, ["ventilator", "monitor"]);
        assert_eq!(
            config.seo.organization.name.as_deref(),
            Some("Acme Medical Co., Ltd.")
        );
        let product = &config.seo.templates[&PageType::ProductDetail];
        assert_eq!(product.title.as_deref(), Some("{title} - {site}"));
        assert!(product.description.is_none());
        assert!(config.seo.templates.contains_key(&PageType::ArticleDetail));
    }

    #[test]
    fn test_seo_template_unknown_page_type() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [seo.templates.blog]
            title = "{title}"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
