//! The content store: the site's single JSON document, loaded once.
//!
//! # Layout
//!
//! ```text
//! pages
//! ├── navigation                      (free-form, via Accessor)
//! ├── products
//! │   ├── categories  [Category]      (typed)
//! │   ├── items       [Product]       (typed)
//! │   └── standardProductOverview     (free-form)
//! ├── solution
//! │   ├── categories  [Category]      (typed)
//! │   └── commandSystem, ...          (free-form, keyed by camelCased slug)
//! ├── news
//! │   ├── articles     [NewsItem]     (typed)
//! │   └── applications [NewsItem]     (typed)
//! ├── aboutUs.{features, industries, productionLines}
//! └── customization.process.steps
//! ```

mod accessor;
#[cfg(test)]
pub mod fixtures;
mod store;
mod types;
mod validate;

pub use store::ContentStore;
pub use types::{Category, ContentSection, NewsItem, NewsKind, Product};
pub use validate::{Severity, validate};
