//! Dot-path access to free-form content sections.
//!
//! Entity collections are typed on the store; everything else in the content
//! file (navigation labels, `aboutUs.features`, `customization.process.steps`,
//! ...) is reached by path:
//!
//! ```ignore
//! let steps = store.accessor().get_array("customization.process.steps");
//! let overview: Overview = store.accessor().get_or_default("products.standardProductOverview");
//! ```
//!
//! A missing path is an expected condition (optional page sections): it is
//! logged and resolves to an absent value or the type's default. Lookups
//! never fail.

use crate::log;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Borrowed walker over the `pages` subtree.
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'a> {
    root: &'a Value,
}

impl<'a> Accessor<'a> {
    pub const fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Walk `path` key by key. `None` (and a log line) when a key is absent
    /// or an intermediate node is not an object.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        let mut node = self.root;
        for key in path.split('.') {
            let next = match node {
                Value::Object(map) => map.get(key),
                _ => None,
            };
            match next {
                Some(value) => node = value,
                None => {
                    log!("content"; "`{path}` not found (no key `{key}`)");
                    return None;
                }
            }
        }
        Some(node)
    }

    /// Deserialize the value at `path`, or `T::default()` when it is missing
    /// or has the wrong shape.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, path: &str) -> T {
        let Some(value) = self.get(path) else {
            return T::default();
        };
        T::deserialize(value).unwrap_or_else(|err| {
            log!("content"; "`{path}` has unexpected shape: {err}");
            T::default()
        })
    }

    /// String at `path`, empty when missing or not a string.
    pub fn get_str(&self, path: &str) -> &'a str {
        match self.get(path) {
            Some(Value::String(s)) => s,
            Some(_) => {
                log!("content"; "`{path}` is not a string");
                ""
            }
            None => "",
        }
    }

    /// Array at `path`, empty when missing or not an array.
    pub fn get_array(&self, path: &str) -> &'a [Value] {
        match self.get(path) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                log!("content"; "`{path}` is not an array");
                &[]
            }
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn pages() -> Value {
        json!({
            "navigation": { "home": "Home", "products": "Products" },
            "aboutUs": {
                "features": [{ "title": "ISO 13485" }, { "title": "CE" }],
                "intro": "Founded in 1998"
            },
            "customization": { "process": { "steps": ["Consult", "Design", "Deliver"] } }
        })
    }

    #[test]
    fn test_get_existing_paths() {
        let root = pages();
        let accessor = Accessor::new(&root);

        assert_eq!(accessor.get("navigation.home"), Some(&json!("Home")));
        assert_eq!(
            accessor.get("customization.process.steps"),
            Some(&json!(["Consult", "Design", "Deliver"]))
        );
        assert_eq!(accessor.get("aboutUs").unwrap()["intro"], "Founded in 1998");
    }

    #[test]
    fn test_get_missing_paths() {
        let root = pages();
        let accessor = Accessor::new(&root);

        assert_eq!(accessor.get("navigation.contact"), None);
        assert_eq!(accessor.get("solution.commandSystem"), None);
        assert_eq!(accessor.get(""), None);
    }

    #[test]
    fn test_get_through_non_object_is_absent() {
        let root = pages();
        let accessor = Accessor::new(&root);

        // "Home" is a string; there is no legacy "return the path" fallback
        assert_eq!(accessor.get("navigation.home.label"), None);
        // arrays are not keyed
        assert_eq!(accessor.get("aboutUs.features.0"), None);
    }

    #[test]
    fn test_get_str() {
        let root = pages();
        let accessor = Accessor::new(&root);

        assert_eq!(accessor.get_str("aboutUs.intro"), "Founded in 1998");
        assert_eq!(accessor.get_str("aboutUs.features"), "");
        assert_eq!(accessor.get_str("aboutUs.missing"), "");
    }

    #[test]
    fn test_get_array() {
        let root = pages();
        let accessor = Accessor::new(&root);

        assert_eq!(accessor.get_array("aboutUs.features").len(), 2);
        assert!(accessor.get_array("aboutUs.intro").is_empty());
        assert!(accessor.get_array("aboutUs.industries").is_empty());
    }

    #[test]
    fn test_get_or_default() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        struct Feature {
            title: String,
        }

        let root = pages();
        let accessor = Accessor::new(&root);

        let features: Vec<Feature> = accessor.get_or_default("aboutUs.features");
        assert_eq!(features.len(), 2);
        assert_eq!(features[1].title, "CE");

        let steps: Vec<String> = accessor.get_or_default("customization.process.steps");
        assert_eq!(steps, ["Consult", "Design", "Deliver"]);

        // wrong shape and missing path both fall back
        let wrong: Vec<Feature> = accessor.get_or_default("aboutUs.intro");
        assert!(wrong.is_empty());
        let missing: Vec<Feature> = accessor.get_or_default("aboutUs.productionLines");
        assert!(missing.is_empty());
    }
}
