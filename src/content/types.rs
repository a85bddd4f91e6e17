//! Content entities deserialized from the content file.
//!
//! Field names follow the JSON (`camelCase`); every type is immutable once
//! the store is loaded.

use crate::utils::date::PublishedDate;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

/// A product or solution category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub slug: String,
}

// ============================================================================
// Products
// ============================================================================

/// A catalog product. Variant-specific fields live in [`ProductKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub category_id: u32,
    pub image: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub details: Vec<ContentSection>,
    #[serde(flatten)]
    pub kind: ProductKind,
}

/// `productType` tagged union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "productType")]
pub enum ProductKind {
    /// In-house developed product with its own marketing copy.
    #[serde(rename = "independent-rd")]
    IndependentRd { title: String, description: String },
    /// Standard-range product identified by model number.
    #[serde(rename = "standard", rename_all = "camelCase")]
    Standard {
        model: String,
        standard_category: String,
    },
}

impl Product {
    /// Display title: `title` for R&D products, `model` for standard ones.
    pub fn title(&self) -> &str {
        match &self.kind {
            ProductKind::IndependentRd { title, .. } => title,
            ProductKind::Standard { model, .. } => model,
        }
    }

    /// Display description; standard products describe themselves by range.
    pub fn description(&self) -> String {
        match &self.kind {
            ProductKind::IndependentRd { description, .. } => description.clone(),
            ProductKind::Standard {
                model,
                standard_category,
            } => format!("{model} - {standard_category}"),
        }
    }

    /// Model number, used as JSON-LD `sku`.
    pub fn model(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Standard { model, .. } => Some(model),
            ProductKind::IndependentRd { .. } => None,
        }
    }
}

/// Ordered `label -> value` pairs. JSON object order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specifications(Vec<(String, String)>);

impl Specifications {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for Specifications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = Specifications;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of specification labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, serde_json::Value>()? {
                    let value = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    pairs.push((label, value));
                }
                Ok(Specifications(pairs))
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

// ============================================================================
// News & Applications
// ============================================================================

/// A news article or application case; both collections share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub slug: String,
    pub image: String,
    #[serde(default)]
    pub alt: String,
    pub published_date: PublishedDate,
    pub title: String,
    pub description: String,
}

/// Which news collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Article,
    Application,
}

impl NewsKind {
    pub const ALL: [NewsKind; 2] = [NewsKind::Article, NewsKind::Application];

    /// URL segment under `/news/`.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::Application => "applications",
        }
    }

    /// Listing label used in breadcrumbs and headings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Article => "Articles",
            Self::Application => "Applications",
        }
    }

    /// Presentation-time category attached to detail pages.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Article => "Company News",
            Self::Application => "Application Case",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == segment)
    }
}

// ============================================================================
// Content sections
// ============================================================================

/// Block of rich content inside `Product.details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentSection {
    Heading {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Paragraph {
        content: String,
    },
    Image {
        #[serde(default)]
        content: String,
        #[serde(default)]
        image: String,
        #[serde(default)]
        alt: String,
    },
    List {
        #[serde(default)]
        content: String,
        #[serde(default)]
        items: Vec<String>,
    },
}

/// Accept `"id": "x-100"` and `"id": 42` alike.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
