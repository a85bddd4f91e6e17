//! Shared test fixtures: a small content file and a matching config.
//!
//! | Collection | Items |
//! |------------|-------|
//! | product categories | `ventilators` (1), `monitors` (2), `infusion-pumps` (3, empty) |
//! | products | `vx-100`..`vx-500` in category 1, `m-17` in category 2, `orphan-1` dangling (42) |
//! | solution categories | `command-system`, `medical-treatment` |
//! | articles | 12, `article-01`..`article-12`, unsorted dates |
//! | applications | 3 |

use super::store::ContentStore;
use crate::config::SiteConfig;
use serde_json::Value;

pub const CONTENT: &str = r##"{
  "pages": {
    "navigation": {
      "home": "Home",
      "products": "Products",
      "solution": "Solutions",
      "news": "News",
      "aboutUs": "About Us",
      "contact": "Contact"
    },
    "products": {
      "categories": [
        {
          "id": 1,
          "title": "Ventilators",
          "slug": "ventilators"
        },
        {
          "id": 2,
          "title": "Patient Monitors",
          "slug": "monitors"
        },
        {
          "id": 3,
          "title": "Infusion Pumps",
          "slug": "infusion-pumps"
        }
      ],
      "items": [
        {
          "id": "vx-100",
          "categoryId": 1,
          "productType": "independent-rd",
          "image": "/images/products/vx-100.jpg",
          "alt": "VX-100",
          "title": "VX-100 Ventilator",
          "description": "Ventilator model 1.",
          "gallery": [
            "/images/products/vx-100-side.jpg",
            "/images/products/vx-100-back.jpg"
          ],
          "specifications": {
            "Weight": "12 kg",
            "Tidal volume": "20-2000 ml",
            "Screen": "12.1 in"
          },
          "details": [
            {
              "type": "heading",
              "content": "Overview",
              "level": 2
            },
            {
              "type": "paragraph",
              "content": "Designed for ICU & transport."
            },
            {
              "type": "list",
              "content": "Highlights",
              "items": [
                "Turbine driven",
                "6 h battery"
              ]
            }
          ]
        },
        {
          "id": "vx-200",
          "categoryId": 1,
          "productType": "independent-rd",
          "image": "/images/products/vx-200.jpg",
          "alt": "VX-200",
          "title": "VX-200 Ventilator",
          "description": "Ventilator model 2."
        },
        {
          "id": "m-17",
          "categoryId": 2,
          "productType": "standard",
          "image": "/images/products/m-17.jpg",
          "alt": "M-17",
          "model": "M-17",
          "standardCategory": "Patient Monitor"
        },
        {
          "id": "vx-300",
          "categoryId": 1,
          "productType": "independent-rd",
          "image": "/images/products/vx-300.jpg",
          "alt": "VX-300",
          "title": "VX-300 Ventilator",
          "description": "Ventilator model 3."
        },
        {
          "id": "vx-400",
          "categoryId": 1,
          "productType": "independent-rd",
          "image": "/images/products/vx-400.jpg",
          "alt": "VX-400",
          "title": "VX-400 Ventilator",
          "description": "Ventilator model 4."
        },
        {
          "id": "vx-500",
          "categoryId": 1,
          "productType": "independent-rd",
          "image": "/images/products/vx-500.jpg",
          "alt": "VX-500",
          "title": "VX-500 Ventilator",
          "description": "Ventilator model 5."
        },
        {
          "id": "orphan-1",
          "categoryId": 42,
          "productType": "standard",
          "image": "/images/products/orphan.jpg",
          "alt": "Orphan",
          "model": "OR-1",
          "standardCategory": "Legacy"
        }
      ],
      "standardProductOverview": {
        "title": "Standard Range",
        "description": "Certified standard equipment."
      }
    },
    "solution": {
      "categories": [
        {
          "id": 1,
          "title": "Command System",
          "slug": "command-system"
        },
        {
          "id": 2,
          "title": "Medical Treatment",
          "slug": "medical-treatment"
        }
      ],
      "commandSystem": {
        "title": "Command System",
        "sections": [
          {
            "title": "Dispatch"
          }
        ]
      }
    },
    "news": {
      "articles": [
        {
          "id": 1,
          "slug": "article-01",
          "image": "/images/news/article-01.jpg",
          "alt": "Article 1",
          "publishedDate": {
            "year": 2024,
            "month": 3,
            "day": 15
          },
          "title": "Article 1",
          "description": "Summary of article 1."
        },
        {
          "id": 2,
          "slug": "article-02",
          "image": "/images/news/article-02.jpg",
          "alt": "Article 2",
          "publishedDate": {
            "year": 2023,
            "month": 11,
            "day": 2
          },
          "title": "Article 2",
          "description": "Summary of article 2."
        },
        {
          "id": 3,
          "slug": "article-03",
          "image": "/images/news/article-03.jpg",
          "alt": "Article 3",
          "publishedDate": {
            "year": 2024,
            "month": 1,
            "day": 20
          },
          "title": "Article 3",
          "description": "Summary of article 3."
        },
        {
          "id": 4,
          "slug": "article-04",
          "image": "/images/news/article-04.jpg",
          "alt": "Article 4",
          "publishedDate": {
            "year": 2022,
            "month": 6,
            "day": 30
          },
          "title": "Article 4",
          "description": "Summary of article 4."
        },
        {
          "id": 5,
          "slug": "article-05",
          "image": "/images/news/article-05.jpg",
          "alt": "Article 5",
          "publishedDate": {
            "year": 2024,
            "month": 5,
            "day": 1
          },
          "title": "Article 5",
          "description": "Summary of article 5."
        },
        {
          "id": 6,
          "slug": "article-06",
          "image": "/images/news/article-06.jpg",
          "alt": "Article 6",
          "publishedDate": {
            "year": 2023,
            "month": 7,
            "day": 7
          },
          "title": "Article 6",
          "description": "Summary of article 6."
        },
        {
          "id": 7,
          "slug": "article-07",
          "image": "/images/news/article-07.jpg",
          "alt": "Article 7",
          "publishedDate": {
            "year": 2023,
            "month": 1,
            "day": 9
          },
          "title": "Article 7",
          "description": "Summary of article 7."
        },
        {
          "id": 8,
          "slug": "article-08",
          "image": "/images/news/article-08.jpg",
          "alt": "Article 8",
          "publishedDate": {
            "year": 2024,
            "month": 2,
            "day": 28
          },
          "title": "Article 8",
          "description": "Summary of article 8."
        },
        {
          "id": 9,
          "slug": "article-09",
          "image": "/images/news/article-09.jpg",
          "alt": "Article 9",
          "publishedDate": {
            "year": 2021,
            "month": 12,
            "day": 24
          },
          "title": "Article 9",
          "description": "Summary of article 9."
        },
        {
          "id": 10,
          "slug": "article-10",
          "image": "/images/news/article-10.jpg",
          "alt": "Article 10",
          "publishedDate": {
            "year": 2023,
            "month": 9,
            "day": 18
          },
          "title": "Article 10",
          "description": "Summary of article 10."
        },
        {
          "id": 11,
          "slug": "article-11",
          "image": "/images/news/article-11.jpg",
          "alt": "Article 11",
          "publishedDate": {
            "year": 2022,
            "month": 10,
            "day": 5
          },
          "title": "Article 11",
          "description": "Summary of article 11."
        },
        {
          "id": 12,
          "slug": "article-12",
          "image": "/images/news/article-12.jpg",
          "alt": "Article 12",
          "publishedDate": {
            "year": 2024,
            "month": 4,
            "day": 12
          },
          "title": "Article 12",
          "description": "Summary of article 12."
        }
      ],
      "applications": [
        {
          "id": "app-1",
          "slug": "icu-upgrade",
          "image": "/images/cases/icu.jpg",
          "alt": "ICU upgrade",
          "publishedDate": {
            "year": 2024,
            "month": 2,
            "day": 10
          },
          "title": "ICU Upgrade at City Hospital",
          "description": "A 40-bed ICU moved to networked ventilation."
        },
        {
          "id": "app-2",
          "slug": "field-hospital",
          "image": "/images/cases/field.jpg",
          "alt": "Field hospital",
          "publishedDate": {
            "year": 2023,
            "month": 8,
            "day": 21
          },
          "title": "Rapid Field Hospital Deployment",
          "description": "Mobile command system rolled out in 72 hours."
        },
        {
          "id": "app-3",
          "slug": "clinic-monitoring",
          "image": "https://cdn.example.org/cases/clinic.jpg",
          "alt": "Clinic",
          "publishedDate": {
            "year": 2024,
            "month": 6,
            "day": 3
          },
          "title": "Clinic Monitoring Network",
          "description": "Patient monitors linked to a central station."
        }
      ]
    },
    "aboutUs": {
      "features": [
        {
          "title": "ISO 13485"
        }
      ],
      "industries": [
        {
          "title": "Hospitals"
        }
      ],
      "productionLines": []
    },
    "customization": {
      "process": {
        "steps": [
          {
            "title": "Consult"
          },
          {
            "title": "Design"
          },
          {
            "title": "Deliver"
          }
        ]
      }
    }
  }
}"##;

pub const CONFIG: &str = r#"
[base]
title = "Acme Medical"
description = "Medical equipment manufacturer"
url = "https://www.acme-medical.com"
author = "Acme Newsroom"

[seo]
keywords = ["medical equipment", "Acme"]
twitter = "@acme"

[seo.organization]
name = "Acme Medical Co., Ltd."
email = "info@acme-medical.com"
same_as = ["https://www.linkedin.com/company/acme-medical"]
"#;

pub fn content_value() -> Value {
    serde_json::from_str(CONTENT).unwrap()
}

pub fn store() -> ContentStore {
    ContentStore::from_value(content_value()).unwrap()
}

pub fn config() -> SiteConfig {
    SiteConfig::from_str(CONFIG).unwrap()
}
