//! Detail page bodies.
//!
//! News and application items only store a one-paragraph description. Detail
//! pages wrap it in a fixed HTML template whose section headers and bullet
//! lists depend on the collection. Product `details` sections are rendered
//! to HTML here as well.

use crate::{
    content::{ContentSection, NewsItem, NewsKind},
    utils::escape::escape,
};
use serde::Serialize;

/// `(heading, bullets)` pairs appended after the description.
type Boilerplate = &'static [(&'static str, &'static [&'static str])];

const ARTICLE_SECTIONS: Boilerplate = &[
    (
        "Background",
        &[
            "Continued investment in research and development",
            "Close cooperation with hospitals and clinical partners",
            "Quality management certified to international standards",
        ],
    ),
    (
        "Highlights",
        &[
            "New capabilities for our product portfolio",
            "Improved service coverage for customers",
            "Stronger presence in domestic and overseas markets",
        ],
    ),
    (
        "Looking Ahead",
        &[
            "Further product upgrades are planned",
            "Follow our news page for the latest updates",
        ],
    ),
];

const APPLICATION_SECTIONS: Boilerplate = &[
    (
        "Customer Challenge",
        &[
            "Growing patient volume with limited staff",
            "Legacy equipment that could not be networked",
            "Strict requirements on reliability and uptime",
        ],
    ),
    (
        "Our Solution",
        &[
            "Site survey and requirements analysis",
            "Customized equipment configuration and installation",
            "On-site training for clinical and technical staff",
        ],
    ),
    (
        "Results",
        &[
            "Shorter response times",
            "Higher equipment utilization",
            "Continuous after-sales support",
        ],
    ),
];

/// Synthesize the HTML body of a news or application detail page.
pub fn synthesize(item: &NewsItem, kind: NewsKind) -> String {
    let sections = match kind {
        NewsKind::Article => ARTICLE_SECTIONS,
        NewsKind::Application => APPLICATION_SECTIONS,
    };

    let mut html = String::with_capacity(1024);
    html.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
    for (heading, bullets) in sections {
        html.push_str(&format!("<h2>{heading}</h2>\n<ul>\n"));
        for bullet in *bullets {
            html.push_str(&format!("  <li>{bullet}</li>\n"));
        }
        html.push_str("</ul>\n");
    }
    html
}

/// Detail page payload with presentation-time fields attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    pub item: &'a NewsItem,
    pub category: &'static str,
    pub author: &'a str,
    pub html: String,
}

pub fn detail_view<'a>(item: &'a NewsItem, kind: NewsKind, author: &'a str) -> DetailView<'a> {
    DetailView {
        item,
        category: kind.category(),
        author,
        html: synthesize(item, kind),
    }
}

/// Render product `details` sections to HTML. Heading levels are clamped to 1..=4.
pub fn render_sections(sections: &[ContentSection]) -> String {
    let mut html = String::new();
    for section in sections {
        match section {
            ContentSection::Heading { content, level } => {
                let level = level.unwrap_or(2).clamp(1, 4);
                html.push_str(&format!("<h{level}>{}</h{level}>\n", escape(content)));
            }
            ContentSection::Paragraph { content } => {
                html.push_str(&format!("<p>{}</p>\n", escape(content)));
            }
            ContentSection::Image { content, image, .. } if image.is_empty() => {
                if !content.is_empty() {
                    html.push_str(&format!("<p>{}</p>\n", escape(content)));
                }
            }
            ContentSection::Image {
                content,
                image,
                alt,
            } => {
                html.push_str(&format!(
                    "<figure><img src=\"{}\" alt=\"{}\">",
                    escape(image),
                    escape(alt)
                ));
                if !content.is_empty() {
                    html.push_str(&format!("<figcaption>{}</figcaption>", escape(content)));
                }
                html.push_str("</figure>\n");
            }
            ContentSection::List { content, items } => {
                if !content.is_empty() {
                    html.push_str(&format!("<p>{}</p>\n", escape(content)));
                }
                html.push_str("<ul>\n");
                for item in items {
                    html.push_str(&format!("  <li>{}</li>\n", escape(item)));
                }
                html.push_str("</ul>\n");
            }
        }
    }
    html
}
