//! Site-wide output files: sitemap.xml and robots.txt.

pub mod robots;
pub mod sitemap;

pub use robots::write_robots;
pub use sitemap::{build_sitemap, write_sitemap};
