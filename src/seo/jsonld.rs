//! JSON-LD structured data (schema.org).
//!
//! Product and Article nodes embed the Organization node inline as their
//! `manufacturer` / `publisher`.

use crate::{
    config::SiteConfig,
    content::{Category, NewsItem, NewsKind, Product},
    resolve::BreadcrumbItem,
};
use serde_json::{Map, Value, json};

const CONTEXT: &str = "https://schema.org";

/// Top-level Organization document.
pub fn organization(config: &SiteConfig) -> Value {
    with_context(organization_node(config))
}

/// Organization node without `@context`, for embedding.
pub fn organization_node(config: &SiteConfig) -> Value {
    let org = &config.seo.organization;
    let mut node = Map::new();
    node.insert("@type".into(), "Organization".into());
    node.insert("name".into(), config.organization_name().into());
    node.insert("url".into(), config.url_for("/").into());
    node.insert("logo".into(), config.url_for(&org.logo).into());

    if let Some(email) = &org.email {
        node.insert("email".into(), email.as_str().into());
    }
    if let Some(phone) = &org.phone {
        node.insert("telephone".into(), phone.as_str().into());
    }
    if let Some(address) = &org.address {
        node.insert("address".into(), address.as_str().into());
    }
    if !org.same_as.is_empty() {
        node.insert("sameAs".into(), org.same_as.clone().into());
    }
    Value::Object(node)
}

pub fn product(config: &SiteConfig, product: &Product, category: &Category, url: &str) -> Value {
    let images: Vec<String> = std::iter::once(&product.image)
        .chain(&product.gallery)
        .map(|image| config.url_for(image))
        .collect();

    let properties: Vec<Value> = product
        .specifications
        .iter()
        .map(|(name, value)| json!({ "@type": "PropertyValue", "name": name, "value": value }))
        .collect();

    let mut node = json!({
        "@type": "Product",
        "name": product.title(),
        "description": product.description(),
        "image": images,
        "url": url,
        "sku": product.model().unwrap_or(&product.id),
        "category": category.title,
        "brand": { "@type": "Brand", "name": config.organization_name() },
        "manufacturer": organization_node(config),
    });
    if !properties.is_empty() {
        node["additionalProperty"] = properties.into();
    }
    with_context(node)
}

pub fn article(config: &SiteConfig, item: &NewsItem, kind: NewsKind, url: &str) -> Value {
    let published = item.published_date.to_rfc3339();
    with_context(json!({
        "@type": "Article",
        "headline": item.title,
        "description": item.description,
        "image": [config.url_for(&item.image)],
        "datePublished": published,
        "dateModified": published,
        "articleSection": kind.category(),
        "author": { "@type": "Organization", "name": config.base.author },
        "publisher": organization_node(config),
        "mainEntityOfPage": { "@type": "WebPage", "@id": url },
    }))
}

/// The current page (no `href`) is listed under `canonical`.
pub fn breadcrumb_list(config: &SiteConfig, items: &[BreadcrumbItem], canonical: &str) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let url = match &item.href {
                Some(href) => config.url_for(href),
                None => canonical.to_owned(),
            };
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.label,
                "item": url,
            })
        })
        .collect();

    with_context(json!({
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    }))
}

fn with_context(node: Value) -> Value {
    let mut doc = Map::new();
    doc.insert("@context".into(), CONTEXT.into());
    if let Value::Object(fields) = node {
        doc.extend(fields);
    }
    Value::Object(doc)
}
