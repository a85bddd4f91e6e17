//! Sitemap generation.
//!
//! Enumerates every resolvable page of the site into [`SitemapRecord`]s and
//! renders them as sitemap.xml.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentStore, NewsKind},
    log,
    resolve::route::{category_path, news_detail_path, product_path, solution_path},
    utils::{date::PublishedDate, escape::escape},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `(path, changefreq, priority)` of the pages that exist regardless of content.
const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 9] = [
    ("/", ChangeFrequency::Daily, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/customization", ChangeFrequency::Monthly, 0.7),
    ("/products", ChangeFrequency::Weekly, 0.9),
    ("/solution", ChangeFrequency::Weekly, 0.9),
    ("/news", ChangeFrequency::Daily, 0.8),
    ("/news/articles", ChangeFrequency::Daily, 0.8),
    ("/news/applications", ChangeFrequency::Weekly, 0.8),
];

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapRecord {
    /// Site path the record was built from, e.g. `/products/ventilators`.
    #[serde(skip)]
    pub path: String,
    pub url: String,
    #[serde(serialize_with = "iso_date")]
    pub last_modified: PublishedDate,
    pub change_frequency: ChangeFrequency,
    /// `0.0..=1.0`
    pub priority: f32,
}

fn iso_date<S: serde::Serializer>(date: &PublishedDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_iso())
}

/// Sitemap data structure
#[derive(Debug, Default)]
pub struct Sitemap {
    pub records: Vec<SitemapRecord>,
}

// ============================================================================
// Public API
// ============================================================================

/// Build and write sitemap.xml if enabled in config.
pub fn write_sitemap(config: &SiteConfig, store: &ContentStore, build_time: PublishedDate) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = build_sitemap(config, store, build_time);
        log!("sitemap"; "{} urls", sitemap.len());
        sitemap.write(config)?;
    }
    Ok(())
}

/// Enumerate every page in a fixed order: static routes, product categories,
/// solution categories, products, articles, applications.
///
/// Products whose category does not resolve are skipped. Undated pages use
/// `build_time` as `lastmod`.
pub fn build_sitemap(config: &SiteConfig, store: &ContentStore, build_time: PublishedDate) -> Sitemap {
    let mut sitemap = Sitemap::default();
    let mut push = |path: String, last_modified, change_frequency, priority| {
        sitemap.records.push(SitemapRecord {
            url: config.url_for(&path),
            path,
            last_modified,
            change_frequency,
            priority,
        });
    };

    for (path, freq, priority) in STATIC_ROUTES {
        push(path.to_owned(), build_time, freq, priority);
    }

    for category in store.product_categories() {
        push(category_path(&category.slug), build_time, ChangeFrequency::Weekly, 0.8);
    }
    for category in store.solution_categories() {
        push(solution_path(&category.slug), build_time, ChangeFrequency::Monthly, 0.7);
    }

    for product in store.products() {
        let Some(category) = store.category_of(product) else {
            continue;
        };
        push(
            product_path(&category.slug, &product.id),
            build_time,
            ChangeFrequency::Monthly,
            0.7,
        );
    }

    for kind in NewsKind::ALL {
        for item in store.news(kind) {
            push(
                news_detail_path(kind, &item.slug),
                item.published_date,
                ChangeFrequency::Monthly,
                0.6,
            );
        }
    }

    sitemap
}

impl Sitemap {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Generate sitemap XML string.
    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for record in self.records {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape(&record.url)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", record.last_modified.to_iso()));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                record.change_frequency.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", record.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to `[build].output` / `[build.sitemap].path`.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let xml = self.into_xml();
        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
