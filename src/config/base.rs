//! `[base]` section configuration.
//!
//! Contains basic site information like title, description and base URL.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in brochure.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Acme Medical"
/// description = "Medical equipment manufacturer"
/// url = "https://www.acme-medical.com"
/// locale = "en_US"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site name, used as `og:site_name` and the `{site}` placeholder.
    pub title: String,

    /// Default description for pages without their own.
    pub description: String,

    /// Absolute base URL for canonical links, sitemap and social images.
    #[serde(default)]
    pub url: String,

    /// Byline attached to synthesized news and application pages.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Open Graph locale (e.g., "en_US", "zh_CN").
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Acme Medical"
            description = "Medical equipment"
            url = "https://www.acme-medical.com"
            author = "Acme Newsroom"
            locale = "zh_CN"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Acme Medical");
        assert_eq!(config.base.url, "https://www.acme-medical.com");
        assert_eq!(config.base.author, "Acme Newsroom");
        assert_eq!(config.base.locale, "zh_CN");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "Editorial Team");
        assert_eq!(config.base.locale, "en_US");
        assert_eq!(config.base.url, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
            language = "en"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
