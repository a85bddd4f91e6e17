//! Brochure - content resolution, sitemap and SEO metadata for a JSON-backed
//! corporate website.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod page;
mod resolve;
mod seo;
mod synth;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{ContentStore, Severity};
use page::resolve_page;
use resolve::Route;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Check => check(&config).map(|_| ()),
        Commands::Build { .. } => {
            let store = check(&config)?;
            build_site(&config, &store).map(|_| ())
        }
        Commands::Meta { route } => meta(&config, route),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Load the content file and report integrity problems.
///
/// Warnings are logged; any error-level issue fails the command.
fn check(config: &SiteConfig) -> Result<ContentStore> {
    let store = ContentStore::from_path(&config.build.content)?;

    for (page_type, name) in config.template_warnings() {
        log!("warn"; "[seo.templates.{page_type}] unknown placeholder `{{{name}}}` is rendered verbatim");
    }

    let issues = content::validate(&store);
    let mut errors = 0;
    for issue in &issues {
        match issue.severity() {
            Severity::Warning => log!("warn"; "{issue}"),
            Severity::Error => {
                errors += 1;
                log!("error"; "{issue}");
            }
        }
    }
    if errors > 0 {
        bail!("content check failed with {errors} error(s)");
    }

    log!(
        "check";
        "{} products, {} categories, {} articles, {} applications",
        store.products().len(),
        store.product_categories().len() + store.solution_categories().len(),
        store.articles().len(),
        store.applications().len()
    );
    Ok(store)
}

/// Print the resolved manifest for one URL as JSON on stdout.
fn meta(config: &SiteConfig, route: &str) -> Result<()> {
    let store = ContentStore::from_path(&config.build.content)?;
    let resolved = resolve_page(config, &store, &Route::parse(route));
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
