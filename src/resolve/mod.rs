//! Entity resolvers: map URL parameters to content entities.
//!
//! Everything here is a pure function over the loaded store. Unknown slugs
//! and ids resolve to `None`; the caller decides how a miss is rendered.

pub mod breadcrumb;
pub mod catalog;
pub mod news;
pub mod route;

pub use breadcrumb::{BreadcrumbItem, Breadcrumbs};
pub use catalog::{RELATED_LIMIT, SHOWCASE_LIMIT, products_by_category, related_products, showcase};
pub use news::{PAGE_SIZE, Page, paginate, resolve_by_slug};
pub use route::Route;
