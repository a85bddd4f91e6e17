//! Escaping for text interpolated into HTML and XML.

/// Escape special HTML/XML characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello"), "hello");
    }

    #[test]
    fn test_escape_combined() {
        assert_eq!(
            escape("<a href=\"x\">R&D 'lab'</a>"),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &apos;lab&apos;&lt;/a&gt;"
        );
    }
}
