//! Markdown-to-plain-text normalization for result excerpts.

use pulldown_cmark::{html, Options, Parser};
use scraper::Html;

/// Renders a markdown snippet to readable plain text.
///
/// The input is rendered as CommonMark with smart punctuation (typographic
/// replacements and smart quotes), then the resulting HTML is stripped back
/// to text with entities decoded and whitespace collapsed. Pure function,
/// invoked once per result item.
pub fn render_excerpt(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    let parser = Parser::new_ext(markdown, options);

    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    html_to_text(&rendered)
}

fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");

    // Collapse runs of whitespace left behind by block boundaries.
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::render_excerpt;

    #[test]
    fn strips_inline_markup() {
        assert_eq!(render_excerpt("**bold** and _em_"), "bold and em");
        assert_eq!(render_excerpt("a [link](https://example.com) here"), "a link here");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render_excerpt("hello world"), "hello world");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(render_excerpt(""), "");
    }

    #[test]
    fn applies_smart_punctuation() {
        assert_eq!(render_excerpt("\"hi\""), "\u{201c}hi\u{201d}");
        assert_eq!(render_excerpt("wait..."), "wait\u{2026}");
    }

    #[test]
    fn decodes_entities() {
        // `&` round-trips through the HTML entity the renderer emits.
        assert_eq!(render_excerpt("AT&T"), "AT&T");
        assert_eq!(render_excerpt("1 < 2"), "1 < 2");
    }

    #[test]
    fn collapses_block_boundaries() {
        assert_eq!(
            render_excerpt("first paragraph\n\nsecond paragraph"),
            "first paragraph second paragraph"
        );
        assert_eq!(render_excerpt("# Heading\n\nbody"), "Heading body");
    }
}
