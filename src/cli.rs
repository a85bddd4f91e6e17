//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Content resolution, sitemap and SEO metadata for a JSON-backed website
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: brochure.toml)
    #[arg(short = 'C', long, default_value = "brochure.toml")]
    pub config: PathBuf,

    /// Content JSON file path (relative to project root)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override base URL for the site.
    ///
    /// Useful for staging deployments where the public URL differs from production.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output toggles for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// enable robots.txt generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,

    /// enable per-route page manifests
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub manifest: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate config and content, report dangling references and duplicate slugs
    Check,

    /// Write sitemap.xml, robots.txt and page manifests to the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the resolved page manifest for a single URL
    Meta {
        /// URL path, optionally with `?page=N` (e.g. `/news/articles?page=2`)
        route: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from(["brochure", "--base-url", "https://x.com", "build", "--sitemap=false"]);
        assert_eq!(cli.base_url.as_deref(), Some("https://x.com"));
        match cli.command {
            Commands::Build { build_args } => {
                assert_eq!(build_args.sitemap, Some(false));
                assert_eq!(build_args.robots, None);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_parse_meta_route() {
        let cli = Cli::parse_from(["brochure", "-C", "site.toml", "meta", "/news/articles?page=2"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Meta { ref route } if route == "/news/articles?page=2"));
    }
}
