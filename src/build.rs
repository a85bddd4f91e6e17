//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── manifest_routes() ──► every sitemap route + listing pages 2..N
//!     │
//!     ├── write_sitemap() ─┐
//!     ├── write_robots() ──┘ (rayon::join)
//!     │
//!     └── write_manifests() ──► pages/<route>/index.json (par_iter)
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentStore, NewsKind},
    generator::{build_sitemap, write_robots, write_sitemap},
    log,
    page::{Resolved, resolve_page},
    resolve::{PAGE_SIZE, Route},
    utils::date::PublishedDate,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write sitemap.xml, robots.txt and page manifests.
///
/// Returns the number of manifests written.
pub fn build_site(config: &SiteConfig, store: &ContentStore) -> Result<usize> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let build_time = PublishedDate::today();
    let routes = manifest_routes(config, store, build_time);

    let (files_result, manifests_result) = rayon::join(
        || {
            let (sitemap, robots) = rayon::join(
                || write_sitemap(config, store, build_time),
                || write_robots(config),
            );
            sitemap.and(robots)
        },
        || write_manifests(config, store, &routes),
    );

    files_result?;
    let written = manifests_result?;
    log!("build"; "{} manifests in {}", written, output.display());
    Ok(written)
}

/// Every route with a page of its own: the sitemap's routes plus listing
/// pages past the first.
pub fn manifest_routes(config: &SiteConfig, store: &ContentStore, build_time: PublishedDate) -> Vec<Route> {
    let mut routes: Vec<Route> = build_sitemap(config, store, build_time)
        .records
        .iter()
        .map(|record| Route::parse(&record.path))
        .collect();

    for kind in NewsKind::ALL {
        let total_pages = store.news(kind).len().div_ceil(PAGE_SIZE);
        routes.extend((2..=total_pages).map(|page| Route::NewsList {
            kind,
            page: page as i64,
        }));
    }
    routes
}

fn write_manifests(config: &SiteConfig, store: &ContentStore, routes: &[Route]) -> Result<usize> {
    if !config.build.manifest.enable {
        return Ok(0);
    }
    let dir = config.build.output.join(&config.build.manifest.dir);

    let written = routes
        .par_iter()
        .map(|route| write_manifest(config, store, &dir, route))
        .collect::<Result<Vec<bool>>>()?;

    Ok(written.into_iter().filter(|w| *w).count())
}

/// Write one manifest; `false` when the route does not resolve to a page.
fn write_manifest(config: &SiteConfig, store: &ContentStore, dir: &Path, route: &Route) -> Result<bool> {
    match resolve_page(config, store, route) {
        Resolved::Page(manifest) => {
            let Some(path) = manifest_path(dir, route) else {
                log!("warn"; "{} has a relative path segment, skipped", route.path());
                return Ok(false);
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(&path, json)
                .with_context(|| format!("Failed to write manifest {}", path.display()))?;
            Ok(true)
        }
        Resolved::Redirect { location } => {
            log!("warn"; "{} redirects to {location}", route.path());
            Ok(false)
        }
        Resolved::NotFound(_) => {
            log!("warn"; "{} did not resolve", route.path());
            Ok(false)
        }
    }
}

/// `/` -> `index.json`, `/news/articles?page=2` -> `news/articles/page/2/index.json`
///
/// `None` when a segment is `.` or `..`, which would land outside the
/// route's own directory.
pub fn manifest_path(dir: &Path, route: &Route) -> Option<PathBuf> {
    let path = route.path();
    let path = path.split_once('?').map_or(path.as_str(), |(path, _)| path);

    let mut out = dir.to_path_buf();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if matches!(segment, "." | "..") {
            return None;
        }
        out.push(segment);
    }
    if let Route::NewsList { page, .. } = route {
        if *page > 1 {
            out.push("page");
            out.push(page.to_string());
        }
    }
    Some(out.join("index.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    const BUILD_TIME: PublishedDate = PublishedDate::from_ymd(2025, 1, 1);

    #[test]
    fn test_manifest_routes_include_later_pages() {
        let store = fixtures::store();
        let routes = manifest_routes(&fixtures::config(), &store, BUILD_TIME);

        assert!(routes.contains(&Route::NewsList {
            kind: NewsKind::Article,
            page: 2
        }));
        assert!(!routes.contains(&Route::NewsList {
            kind: NewsKind::Application,
            page: 2
        }));
        assert!(!routes.iter().any(|r| matches!(r, Route::NotFound { .. })));
    }

    #[test]
    fn test_manifest_path() {
        let dir = Path::new("/out/pages");
        assert_eq!(manifest_path(dir, &Route::Home), Some(dir.join("index.json")));
        assert_eq!(
            manifest_path(dir, &Route::parse("/products/ventilators/vx-100")),
            Some(dir.join("products/ventilators/vx-100/index.json"))
        );
        assert_eq!(
            manifest_path(dir, &Route::parse("/news/articles?page=2")),
            Some(dir.join("news/articles/page/2/index.json"))
        );
    }

    #[test]
    fn test_manifest_path_rejects_dot_segments() {
        let dir = Path::new("/out/pages");
        let escaping = Route::Product {
            category: "ventilators".into(),
            id: "..".into(),
        };
        assert_eq!(manifest_path(dir, &escaping), None);
        assert_eq!(manifest_path(dir, &Route::parse("/news/articles/.")), None);
        assert_eq!(
            manifest_path(dir, &Route::parse("/products/ventilators/..vx")),
            Some(dir.join("products/ventilators/..vx/index.json"))
        );
    }

    #[test]
    fn test_build_site_skips_dot_segment_product() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixtures::config();
        config.build.output = dir.path().to_path_buf();
        let mut content = fixtures::content_value();
        content["pages"]["products"]["items"][0]["id"] = serde_json::json!("..");
        let store = ContentStore::from_value(content).unwrap();

        let written = build_site(&config, &store).unwrap();

        assert_eq!(written, manifest_routes(&config, &store, BUILD_TIME).len() - 1);
        let list = fs::read_to_string(dir.path().join("pages/products/index.json")).unwrap();
        let list: serde_json::Value = serde_json::from_str(&list).unwrap();
        assert_eq!(list["pageType"], "products");
        assert!(list["data"]["categories"].is_array());
        let category = fs::read_to_string(dir.path().join("pages/products/ventilators/index.json")).unwrap();
        let category: serde_json::Value = serde_json::from_str(&category).unwrap();
        assert_eq!(category["pageType"], "product-category");
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixtures::config();
        config.build.output = dir.path().to_path_buf();
        let store = fixtures::store();

        let written = build_site(&config, &store).unwrap();

        assert_eq!(written, manifest_routes(&config, &store, BUILD_TIME).len());
        assert!(dir.path().join("sitemap.xml").exists());
        assert!(dir.path().join("robots.txt").exists());

        let manifest = fs::read_to_string(dir.path().join("pages/news/articles/article-01/index.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(manifest["pageType"], "article-detail");
        assert!(manifest["body"].as_str().unwrap().starts_with("<p>"));
    }

    #[test]
    fn test_build_site_respects_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixtures::config();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = false;
        config.build.manifest.enable = false;

        assert_eq!(build_site(&config, &fixtures::store()).unwrap(), 0);
        assert!(!dir.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("pages").exists());
        assert!(dir.path().join("robots.txt").exists());
    }
}
