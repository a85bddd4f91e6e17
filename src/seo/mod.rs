//! SEO metadata: page types, templates, keywords, JSON-LD and the
//! per-page metadata record.

mod jsonld;
mod keywords;
mod metadata;
mod page_type;
pub mod template;

pub use metadata::{MetaOverrides, MetadataRecord, PageEntity, SeoGenerator};
#[cfg(test)]
pub use metadata::RobotsDirectives;
pub use page_type::PageType;
