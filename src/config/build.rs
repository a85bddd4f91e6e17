//! `[build]` section configuration.
//!
//! Contains the content file location and the output artifacts to generate.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in brochure.toml - build output configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "data/content.json"
/// output = "public"
///
/// [build.sitemap]
/// enable = true
///
/// [build.manifest]
/// dir = "pages"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Content file (the JSON document with the `pages` root).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// robots.txt generation settings.
    #[serde(default)]
    pub robots: RobotsConfig,

    /// Page manifest (metadata + breadcrumbs + body per route) settings.
    #[serde(default)]
    pub manifest: ManifestConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to `[build].output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.robots]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to `[build].output`.
    #[serde(default = "defaults::build::robots::path")]
    #[educe(Default = defaults::build::robots::path())]
    pub path: PathBuf,
}

/// `[build.manifest]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Directory for `<route>/index.json` files, relative to `[build].output`.
    #[serde(default = "defaults::build::manifest::dir")]
    #[educe(Default = defaults::build::manifest::dir())]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("content.json"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(config.build.robots.enable);
        assert_eq!(config.build.robots.path, PathBuf::from("robots.txt"));
        assert!(config.build.manifest.enable);
        assert_eq!(config.build.manifest.dir, PathBuf::from("pages"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build]
            content = "data/site.json"
            output = "dist"

            [build.sitemap]
            enable = false

            [build.manifest]
            dir = "meta"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("data/site.json"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert_eq!(config.build.manifest.dir, PathBuf::from("meta"));
    }

    #[test]
    fn test_build_config_unknown_field() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [build.sitemap]
            changefreq = "daily"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
