//! Site configuration management for `brochure.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[base]`    | Site metadata (title, description, url, locale)    |
//! | `[build]`   | Content file, output dir, sitemap/robots/manifest  |
//! | `[seo]`     | Keywords, social image, organization, templates    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Acme Medical"
//! description = "Medical equipment manufacturer"
//! url = "https://www.acme-medical.com"
//!
//! [build]
//! content = "content.json"
//! output = "public"
//!
//! [seo]
//! keywords = ["medical equipment"]
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod seo;

pub use error::ConfigError;
pub use seo::TemplateOverride;

use base::BaseConfig;
use build::BuildConfig;
use seo::SeoConfig;

use crate::{
    cli::{Cli, Commands},
    seo::{PageType, template},
    utils::url::absolute_url,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing brochure.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set from CLI `--root`)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// SEO defaults and template overrides
    #[serde(default)]
    pub seo: SeoConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.url.trim_end_matches('/')
    }

    /// Absolute URL for a site path or asset path.
    pub fn url_for(&self, path: &str) -> String {
        absolute_url(self.base_url(), path)
    }

    /// Organization name for JSON-LD, falling back to the site title.
    pub fn organization_name(&self) -> &str {
        self.seo
            .organization
            .name
            .as_deref()
            .unwrap_or(&self.base.title)
    }

    /// Title/description templates configured for a page type, if any.
    pub fn template_override(&self, page_type: PageType) -> Option<&TemplateOverride> {
        self.seo.templates.get(&page_type)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.base.url, cli.base_url.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
            Self::update_option(&mut self.build.robots.enable, build_args.robots.as_ref());
            Self::update_option(&mut self.build.manifest.enable, build_args.manifest.as_ref());
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();

        let content = shellexpand::tilde(&self.build.content.to_string_lossy()).into_owned();
        self.build.content = Self::normalize_path(&root.join(content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before any content is resolved
    pub fn validate(&self) -> Result<()> {
        if self.base.url.is_empty() {
            bail!(ConfigError::Validation(
                "[base.url] is required for canonical and social URLs".into()
            ));
        }
        if !(self.base.url.starts_with("http://") || self.base.url.starts_with("https://")) {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }
        if self.base.title.trim().is_empty() {
            bail!(ConfigError::Validation("[base.title] must not be empty".into()));
        }

        Ok(())
    }

    /// Template overrides referencing placeholders that are never substituted.
    ///
    /// Returns `(page type, placeholder)` pairs; these are warnings, the
    /// placeholder is rendered verbatim.
    pub fn template_warnings(&self) -> Vec<(PageType, String)> {
        self.seo
            .templates
            .iter()
            .flat_map(|(page_type, templates)| {
                [&templates.title, &templates.description]
                    .into_iter()
                    .flatten()
                    .flat_map(|t| template::unknown_placeholders(t))
                    .map(move |name| (*page_type, name))
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
