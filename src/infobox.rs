//! Infobox isolation and text cleanup
//!
//! Turns raw page HTML into the plain text of its first summary box, the
//! source of every extracted field.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::FactboxError;

static INFOBOX: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".infobox").unwrap());

static DISAMBIG: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#disambigbox, .dmbox").unwrap());

static DUP_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(" +").unwrap());
static DUP_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new("\n+").unwrap());

/// Extract the text of the first infobox on the page.
pub fn first_infobox_text(html: &str) -> Result<String, FactboxError> {
    let document = Html::parse_document(html);
    let infobox = document
        .select(&INFOBOX)
        .next()
        .ok_or(FactboxError::NoInfobox)?;
    Ok(infobox.text().collect())
}

/// Whether the page is a disambiguation page rather than an article.
pub fn is_disambiguation(html: &str) -> bool {
    Html::parse_document(html).select(&DISAMBIG).next().is_some()
}

/// Replace non-printable and non-ASCII characters with spaces, then collapse
/// runs of spaces and runs of newlines. Field regexes run over this form.
pub fn clean_text(text: &str) -> String {
    let only_ascii: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() || c.is_ascii_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let no_dup_spaces = DUP_SPACES.replace_all(&only_ascii, " ");
    DUP_NEWLINES.replace_all(&no_dup_spaces, "\n").into_owned()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_infobox_text_selects_first() {
        let html = r#"
            <html><body>
            <table class="infobox"><tr><td>Born</td><td>1643-01-04</td></tr></table>
            <table class="infobox"><tr><td>second box</td></tr></table>
            </body></html>
        "#;
        let text = first_infobox_text(html).unwrap();
        assert!(text.contains("Born"));
        assert!(text.contains("1643-01-04"));
        assert!(!text.contains("second box"));
    }

    #[test]
    fn test_missing_infobox_is_an_error() {
        let html = "<html><body><p>plain article</p></body></html>";
        assert!(matches!(
            first_infobox_text(html),
            Err(FactboxError::NoInfobox)
        ));
    }

    #[test]
    fn test_disambiguation_detection() {
        let page = r#"<html><body><div id="disambigbox">may refer to:</div></body></html>"#;
        assert!(is_disambiguation(page));

        let dmbox = r#"<html><body><div class="dmbox">may refer to:</div></body></html>"#;
        assert!(is_disambiguation(dmbox));

        let article = r#"<html><body><table class="infobox"></table></body></html>"#;
        assert!(!is_disambiguation(article));
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("a   b\n\n\nc"), "a b\nc");
    }

    #[test]
    fn test_clean_text_replaces_non_ascii() {
        assert_eq!(clean_text("100\u{2060}km"), "100 km");
        assert_eq!(clean_text("caf\u{e9}"), "caf ");
    }
}
