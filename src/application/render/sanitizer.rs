//! Ammonia-backed sanitisation with a card-content allow list.

use std::{collections::HashSet, sync::Arc};

use ammonia::Builder as AmmoniaBuilder;
use once_cell::sync::Lazy;

use super::types::{SanitizeError, SanitizeService};

/// Default sanitiser wrapping an [`ammonia::Builder`] allow list tuned for
/// card content: text markup, lists, tables, and images, with URL schemes
/// restricted and link targets hardened.
pub struct AmmoniaSanitizer {
    builder: AmmoniaBuilder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        Self {
            builder: card_builder(),
        }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizeService for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, SanitizeError> {
        Ok(self.builder.clean(html).to_string())
    }
}

static SANITIZE_SERVICE: Lazy<Arc<AmmoniaSanitizer>> =
    Lazy::new(|| Arc::new(AmmoniaSanitizer::new()));

/// Access the shared sanitiser instance, initialised on first use.
pub fn sanitize_service() -> Arc<AmmoniaSanitizer> {
    Arc::clone(&SANITIZE_SERVICE)
}

fn card_builder() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "a",
        "abbr",
        "b",
        "blockquote",
        "br",
        "code",
        "dd",
        "del",
        "div",
        "dl",
        "dt",
        "em",
        "figcaption",
        "figure",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "i",
        "img",
        "ins",
        "kbd",
        "li",
        "mark",
        "ol",
        "p",
        "pre",
        "s",
        "section",
        "small",
        "span",
        "strong",
        "sub",
        "sup",
        "table",
        "tbody",
        "td",
        "th",
        "thead",
        "tr",
        "u",
        "ul",
    ]);
    builder.tags(tags);

    let generic: HashSet<&'static str> = HashSet::from([
        "class",
        "id",
        "title",
        "lang",
        "dir",
        "aria-hidden",
        "aria-label",
        "role",
    ]);
    builder.generic_attributes(generic);

    builder.add_tag_attributes("a", &["target"]);
    builder.add_tag_attributes("img", &["loading", "decoding"]);
    builder.add_tag_attributes("th", &["align", "colspan", "rowspan", "scope"]);
    builder.add_tag_attributes("td", &["align", "colspan", "rowspan"]);

    builder.add_url_schemes(["http", "https", "mailto", "tel"].iter().copied());
    builder.link_rel(Some("noopener noreferrer"));
    builder.strip_comments(true);

    builder
}

#[cfg(test)]
mod tests {
    use super::{AmmoniaSanitizer, sanitize_service};
    use crate::application::render::types::SanitizeService;

    #[test]
    fn benign_markup_passes_through_unchanged() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer.sanitize("<b>hi</b>").unwrap();

        assert_eq!(html, "<b>hi</b>");
    }

    #[test]
    fn script_tags_are_removed_with_their_content() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer
            .sanitize("<p>ok</p><script>alert(1)</script>")
            .unwrap();

        assert_eq!(html, "<p>ok</p>");
    }

    #[test]
    fn event_handler_attributes_are_stripped() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer
            .sanitize("<img src=x onerror=alert(1)>")
            .unwrap();

        assert!(html.contains("<img"));
        assert!(!html.contains("onerror"));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn script_url_schemes_are_dropped() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer
            .sanitize("<a href=\"javascript:alert(1)\">x</a>")
            .unwrap();

        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn links_gain_hardened_rel() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer
            .sanitize("<a href=\"https://example.com\">x</a>")
            .unwrap();

        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn table_markup_is_preserved() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer
            .sanitize("<table><thead><tr><th>h</th></tr></thead><tbody><tr><td>c</td></tr></tbody></table>")
            .unwrap();

        assert!(html.contains("<th>h</th>"));
        assert!(html.contains("<td>c</td>"));
    }

    #[test]
    fn comments_are_stripped() {
        let sanitizer = AmmoniaSanitizer::new();
        let html = sanitizer.sanitize("<p>a<!-- note --></p>").unwrap();

        assert_eq!(html, "<p>a</p>");
    }

    #[test]
    fn shared_instance_is_reused() {
        let first = sanitize_service();
        let second = sanitize_service();

        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }
}
