//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn author() -> String {
        "Editorial Team".into()
    }

    pub fn locale() -> String {
        "en_US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content.json".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod robots {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "robots.txt".into()
        }
    }

    pub mod manifest {
        use std::path::PathBuf;

        pub fn dir() -> PathBuf {
            "pages".into()
        }
    }
}

// ============================================================================
// [seo] Section Defaults
// ============================================================================

pub mod seo {
    pub fn image() -> String {
        "/images/og-default.jpg".into()
    }

    pub mod organization {
        pub fn logo() -> String {
            "/images/logo.png".into()
        }
    }
}
