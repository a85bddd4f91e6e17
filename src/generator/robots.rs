//! robots.txt generation.
//!
//! The rule table is fixed; only the sitemap URL and host come from config.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

/// `(user agent, allow, disallow)`
const RULES: &[(&str, &[&str], &[&str])] = &[
    ("*", &["/"], &["/api/", "/_next/", "/admin/", "/*?page="]),
    ("Googlebot", &["/"], &["/api/", "/admin/"]),
    ("Bingbot", &["/"], &["/api/", "/admin/"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: &'static str,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    /// Absolute sitemap URL.
    pub sitemap: String,
    pub host: String,
}

pub fn build_robots(config: &SiteConfig) -> RobotsPolicy {
    let sitemap_path = config.build.sitemap.path.to_string_lossy();
    RobotsPolicy {
        rules: RULES
            .iter()
            .map(|&(user_agent, allow, disallow)| RobotsRule {
                user_agent,
                allow,
                disallow,
            })
            .collect(),
        sitemap: config.url_for(&sitemap_path),
        host: config.base_url().to_owned(),
    }
}

/// Build and write robots.txt if enabled in config.
pub fn write_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let path = config.build.output.join(&config.build.robots.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, build_robots(config).to_txt())
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

impl RobotsPolicy {
    pub fn to_txt(&self) -> String {
        let mut txt = String::new();
        for rule in &self.rules {
            txt.push_str(&format!("User-agent: {}\n", rule.user_agent));
            for path in rule.allow {
                txt.push_str(&format!("Allow: {path}\n"));
            }
            for path in rule.disallow {
                txt.push_str(&format!("Disallow: {path}\n"));
            }
            txt.push('\n');
        }
        txt.push_str(&format!("Sitemap: {}\n", self.sitemap));
        txt.push_str(&format!("Host: {}\n", self.host));
        txt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    #[test]
    fn test_build_robots() {
        let policy = build_robots(&fixtures::config());

        assert_eq!(policy.rules.len(), RULES.len());
        assert_eq!(policy.rules[0].user_agent, "*");
        assert_eq!(policy.sitemap, "https://www.acme-medical.com/sitemap.xml");
        assert_eq!(policy.host, "https://www.acme-medical.com");
    }

    #[test]
    fn test_to_txt() {
        let txt = build_robots(&fixtures::config()).to_txt();

        assert!(txt.starts_with("User-agent: *\nAllow: /\nDisallow: /api/\n"));
        assert!(txt.contains("User-agent: Googlebot\n"));
        assert!(txt.ends_with(
            "Sitemap: https://www.acme-medical.com/sitemap.xml\nHost: https://www.acme-medical.com\n"
        ));
    }

    #[test]
    fn test_write_robots_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixtures::config();
        config.build.output = dir.path().to_path_buf();
        config.build.robots.enable = false;

        write_robots(&config).unwrap();
        assert!(!dir.path().join("robots.txt").exists());

        config.build.robots.enable = true;
        write_robots(&config).unwrap();
        assert!(dir.path().join("robots.txt").exists());
    }
}
