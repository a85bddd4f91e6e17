//! Named-placeholder formatting for title and description templates.
//!
//! `{title}`, `{description}`, `{category}` and `{site}` are substituted;
//! anything else (or a placeholder without a value) stays verbatim.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([A-Za-z_]+)\}").unwrap());

/// Placeholders the formatter knows how to fill.
pub const KNOWN: &[&str] = &["title", "description", "category", "site"];

/// Values available to a template. `None` leaves the placeholder in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateVars<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub site: Option<&'a str>,
}

impl TemplateVars<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title,
            "description" => self.description,
            "category" => self.category,
            "site" => self.site,
            _ => None,
        }
    }
}

/// Substitute placeholders in `template`. Substituted values are not rescanned.
pub fn fill(template: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.lookup(&caps[1]).unwrap_or(&caps[0]).to_owned()
        })
        .into_owned()
}

/// Placeholder names in `template` that [`fill`] will never substitute.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_owned())
        .filter(|name| !KNOWN.contains(&name.as_str()))
        .collect()
}
