//! Route resolution into page manifests.
//!
//! A manifest is everything a renderer needs for one URL: the metadata
//! record, the breadcrumb trail, an optional pre-rendered HTML body and the
//! resolved content as JSON.

use crate::{
    config::SiteConfig,
    content::{ContentStore, NewsItem, NewsKind, Product},
    resolve::{
        BreadcrumbItem, Breadcrumbs, PAGE_SIZE, Page, RELATED_LIMIT, Route, SHOWCASE_LIMIT,
        news::page_path,
        paginate, products_by_category, related_products, resolve_by_slug,
        route::{category_path, news_detail_path, news_list_path, product_path, solution_path},
        showcase,
    },
    seo::{MetaOverrides, MetadataRecord, PageEntity, PageType, SeoGenerator},
    synth::{detail_view, render_sections},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Number of items in the "latest" rails on the home and news pages.
const LATEST_LIMIT: usize = 3;

/// `products.standardProductOverview`: intro block of the products page.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Overview {
    title: String,
    description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageManifest {
    /// Canonical site path.
    pub route: String,
    pub page_type: PageType,
    pub metadata: MetadataRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breadcrumbs: Vec<BreadcrumbItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub data: Value,
}

/// Outcome of resolving a route.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Resolved {
    Page(PageManifest),
    /// Out-of-range listing page; `location` is the clamped canonical path.
    Redirect { location: String },
    /// Unknown route or unresolvable entity. Carries the not-found metadata.
    NotFound(PageManifest),
}

/// Page type rendered for `route`.
pub fn page_type(route: &Route) -> PageType {
    match route {
        Route::Home => PageType::Home,
        Route::About => PageType::About,
        Route::Contact => PageType::Contact,
        Route::Customization => PageType::Customization,
        Route::Products => PageType::Products,
        Route::ProductCategory { .. } => PageType::ProductCategory,
        Route::Product { .. } => PageType::ProductDetail,
        Route::Solutions => PageType::Solutions,
        Route::SolutionCategory { .. } => PageType::SolutionCategory,
        Route::News => PageType::News,
        Route::NewsList {
            kind: NewsKind::Article,
            ..
        } => PageType::Articles,
        Route::NewsList {
            kind: NewsKind::Application,
            ..
        } => PageType::Applications,
        Route::NewsDetail {
            kind: NewsKind::Article,
            ..
        } => PageType::ArticleDetail,
        Route::NewsDetail {
            kind: NewsKind::Application,
            ..
        } => PageType::ApplicationDetail,
        Route::NotFound { .. } => PageType::NotFound,
    }
}

/// Resolve `route` against the loaded content.
pub fn resolve_page(config: &SiteConfig, store: &ContentStore, route: &Route) -> Resolved {
    let resolver = PageResolver {
        config,
        store,
        seo: SeoGenerator::new(config),
    };
    resolver.resolve(route)
}

struct PageResolver<'a> {
    config: &'a SiteConfig,
    store: &'a ContentStore,
    seo: SeoGenerator<'a>,
}

/// Parts of a page assembled before the metadata is built.
struct Draft<'a> {
    entity: Option<PageEntity<'a>>,
    overrides: MetaOverrides,
    body: Option<String>,
    data: Value,
}

impl<'a> Draft<'a> {
    fn new(breadcrumbs: Vec<BreadcrumbItem>, data: Value) -> Self {
        Self {
            entity: None,
            overrides: MetaOverrides {
                breadcrumbs,
                ..Default::default()
            },
            body: None,
            data,
        }
    }

    fn entity(mut self, entity: PageEntity<'a>) -> Self {
        self.entity = Some(entity);
        self
    }
}

impl<'a> PageResolver<'a> {
    fn resolve(&self, route: &Route) -> Resolved {
        let page_type = page_type(route);
        let path = route.path();

        let draft = match route {
            Route::Home => Some(self.home()),
            Route::About => Some(self.about()),
            Route::Contact => Some(self.contact()),
            Route::Customization => Some(self.customization()),
            Route::Products => Some(self.products()),
            Route::ProductCategory { category } => self.product_category(category),
            Route::Product { category, id } => self.product(category, id),
            Route::Solutions => Some(self.solutions()),
            Route::SolutionCategory { category } => self.solution_category(category),
            Route::News => Some(self.news()),
            Route::NewsList { kind, page } => {
                let listing = paginate(self.store.news(*kind), *page, PAGE_SIZE);
                let base = news_list_path(*kind);
                if listing.needs_redirect() {
                    return Resolved::Redirect {
                        location: listing.canonical_path(&base),
                    };
                }
                Some(self.news_list(*kind, &listing, &base))
            }
            Route::NewsDetail { kind, slug } => self.news_detail(*kind, slug),
            Route::NotFound { .. } => None,
        };

        match draft {
            Some(draft) => Resolved::Page(self.finish(page_type, path, draft)),
            None => Resolved::NotFound(self.not_found(page_type, path)),
        }
    }

    fn finish(&self, page_type: PageType, path: String, draft: Draft) -> PageManifest {
        let metadata =
            self.seo
                .build_metadata(page_type, &path, draft.entity.as_ref(), &draft.overrides);
        PageManifest {
            route: path,
            page_type,
            metadata,
            breadcrumbs: draft.overrides.breadcrumbs,
            body: draft.body,
            data: draft.data,
        }
    }

    fn not_found(&self, page_type: PageType, path: String) -> PageManifest {
        let metadata = match page_type {
            PageType::NotFound => self.seo.build_metadata(
                page_type,
                &path,
                None,
                &MetaOverrides::default(),
            ),
            _ => self.seo.not_found(page_type, &path),
        };
        PageManifest {
            route: path,
            page_type,
            metadata,
            breadcrumbs: Vec::new(),
            body: None,
            data: Value::Null,
        }
    }

    // ------------------------------------------------------------------------
    // Static pages
    // ------------------------------------------------------------------------

    fn home(&self) -> Draft<'a> {
        let latest = paginate(self.store.articles(), 1, LATEST_LIMIT);
        Draft::new(
            Vec::new(),
            json!({
                "navigation": self.store.accessor().get("navigation"),
                "productCategories": self.store.product_categories(),
                "solutionCategories": self.store.solution_categories(),
                "latestNews": self.news_links(NewsKind::Article, &latest.items),
            }),
        )
    }

    fn about(&self) -> Draft<'a> {
        let accessor = self.store.accessor();
        Draft::new(
            Breadcrumbs::home().current("About Us"),
            json!({
                "features": accessor.get_array("aboutUs.features"),
                "industries": accessor.get_array("aboutUs.industries"),
                "productionLines": accessor.get_array("aboutUs.productionLines"),
            }),
        )
    }

    fn contact(&self) -> Draft<'a> {
        let org = &self.config.seo.organization;
        Draft::new(
            Breadcrumbs::home().current("Contact Us"),
            json!({
                "name": self.config.organization_name(),
                "email": org.email,
                "phone": org.phone,
                "address": org.address,
            }),
        )
    }

    fn customization(&self) -> Draft<'a> {
        Draft::new(
            Breadcrumbs::home().current("Custom Solutions"),
            json!({
                "steps": self.store.accessor().get_array("customization.process.steps"),
            }),
        )
    }

    // ------------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------------

    fn products(&self) -> Draft<'a> {
        let categories: Vec<Value> = self
            .store
            .product_categories()
            .iter()
            .map(|category| {
                json!({
                    "category": category,
                    "href": category_path(&category.slug),
                    "count": products_by_category(self.store.products(), category.id).len(),
                })
            })
            .collect();

        Draft::new(
            Breadcrumbs::home().current("Products"),
            json!({
                "categories": categories,
                "standardProductOverview": self
                    .store
                    .accessor()
                    .get_or_default::<Overview>("products.standardProductOverview"),
            }),
        )
    }

    fn product_category(&self, slug: &str) -> Option<Draft<'a>> {
        let category = self.store.product_category_by_slug(slug)?;
        let products = products_by_category(self.store.products(), category.id);

        let draft = Draft::new(
            Breadcrumbs::home()
                .link("Products", "/products")
                .current(category.title.as_str()),
            json!({
                "category": category,
                "products": self.product_links(&category.slug, &products),
            }),
        );
        Some(draft.entity(PageEntity::Category(category)))
    }

    fn product(&self, category_slug: &str, id: &str) -> Option<Draft<'a>> {
        let store = self.store;
        let category = store.product_category_by_slug(category_slug)?;
        let siblings = products_by_category(store.products(), category.id);
        let index = siblings.iter().position(|p| p.id == id)?;
        let product = siblings[index];

        let related = related_products(store.products(), product, RELATED_LIMIT);
        let neighbors = showcase(&siblings, index, SHOWCASE_LIMIT);

        let mut draft = Draft::new(
            Breadcrumbs::home()
                .link("Products", "/products")
                .link(category.title.as_str(), category_path(&category.slug))
                .current(product.title()),
            json!({
                "product": product,
                "category": category,
                "related": self.product_links(&category.slug, &related),
                "showcase": self.product_links(&category.slug, &neighbors),
            }),
        );
        if !product.details.is_empty() {
            draft.body = Some(render_sections(&product.details));
        }
        Some(draft.entity(PageEntity::Product { product, category }))
    }

    fn product_links(&self, category_slug: &str, products: &[&Product]) -> Vec<Value> {
        products
            .iter()
            .map(|product| {
                json!({
                    "id": product.id,
                    "title": product.title(),
                    "image": product.image,
                    "alt": product.alt,
                    "href": product_path(category_slug, &product.id),
                })
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Solutions
    // ------------------------------------------------------------------------

    fn solutions(&self) -> Draft<'a> {
        let categories: Vec<Value> = self
            .store
            .solution_categories()
            .iter()
            .map(|category| json!({ "category": category, "href": solution_path(&category.slug) }))
            .collect();

        Draft::new(
            Breadcrumbs::home().current("Solutions"),
            json!({ "categories": categories }),
        )
    }

    /// The section body lives at `solution.<camelCased slug>`.
    fn solution_category(&self, slug: &str) -> Option<Draft<'a>> {
        let category = self.store.solution_category_by_slug(slug)?;
        let accessor = self.store.accessor();
        let key = format!("solution.{}", camel_case(&category.slug));
        let section = accessor.get(&key);

        let mut draft = Draft::new(
            Breadcrumbs::home()
                .link("Solutions", "/solution")
                .current(category.title.as_str()),
            json!({ "category": category, "section": section }),
        );
        draft.overrides.description = section
            .map(|_| accessor.get_str(&format!("{key}.description")))
            .filter(|description| !description.is_empty())
            .map(str::to_owned);
        Some(draft.entity(PageEntity::Category(category)))
    }

    // ------------------------------------------------------------------------
    // News
    // ------------------------------------------------------------------------

    fn news(&self) -> Draft<'a> {
        let articles = paginate(self.store.articles(), 1, LATEST_LIMIT);
        let applications = paginate(self.store.applications(), 1, LATEST_LIMIT);
        Draft::new(
            Breadcrumbs::home().current("News"),
            json!({
                "articles": self.news_links(NewsKind::Article, &articles.items),
                "applications": self.news_links(NewsKind::Application, &applications.items),
            }),
        )
    }

    fn news_list(&self, kind: NewsKind, listing: &Page, base: &str) -> Draft<'a> {
        let prev = listing
            .has_prev()
            .then(|| page_path(base, listing.page - 1));
        let next = listing
            .has_next()
            .then(|| page_path(base, listing.page + 1));

        Draft::new(
            Breadcrumbs::home().link("News", "/news").current(kind.label()),
            json!({
                "items": self.news_links(kind, &listing.items),
                "page": listing.page,
                "totalPages": listing.total_pages,
                "totalItems": listing.total_items,
                "prev": prev,
                "next": next,
            }),
        )
    }

    fn news_detail(&self, kind: NewsKind, slug: &str) -> Option<Draft<'a>> {
        let item = resolve_by_slug(self.store.news(kind), slug)?;
        let view = detail_view(item, kind, &self.config.base.author);

        let mut draft = Draft::new(
            Breadcrumbs::home()
                .link("News", "/news")
                .link(kind.label(), news_list_path(kind))
                .current(item.title.as_str()),
            json!({
                "item": view.item,
                "category": view.category,
                "author": view.author,
            }),
        );
        draft.body = Some(view.html);
        Some(draft.entity(PageEntity::News { item, kind }))
    }

    fn news_links(&self, kind: NewsKind, items: &[&NewsItem]) -> Vec<Value> {
        items
            .iter()
            .map(|item| {
                json!({
                    "title": item.title,
                    "description": item.description,
                    "image": item.image,
                    "publishedDate": item.published_date.to_iso(),
                    "href": news_detail_path(kind, &item.slug),
                })
            })
            .collect()
    }
}

/// `command-system` -> `commandSystem`
fn camel_case(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut upper = false;
    for c in slug.chars() {
        if c == '-' || c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
