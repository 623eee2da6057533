//! Rendering of the model's lightweight markup into HTML fragments.
//!
//! The answers API replies in a markdown-ish dialect; the UI only needs
//! bold, italics, and line breaks, so only those are translated. The
//! input is model output, not user HTML, and is escaped first.

use std::sync::OnceLock;

use regex::Regex;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap_or_else(|_| unreachable!()))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*([^*]+)\*").unwrap_or_else(|_| unreachable!()))
}

/// Converts `**bold**`, `*italic*`, and newlines into an HTML fragment.
#[must_use]
pub fn render_lightweight_markup(text: &str) -> String {
    let escaped = escape_html(text);
    let bolded = bold_re().replace_all(&escaped, "<strong>$1</strong>");
    let emphasized = italic_re().replace_all(&bolded, "<em>$1</em>");
    emphasized.replace('\n', "<br/>")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_italic_render_as_tags() {
        assert_eq!(
            render_lightweight_markup("la **inversión** fue *alta*"),
            "la <strong>inversión</strong> fue <em>alta</em>"
        );
    }

    #[test]
    fn bold_wins_over_italic_on_double_asterisks() {
        assert_eq!(
            render_lightweight_markup("**todo en negrita**"),
            "<strong>todo en negrita</strong>"
        );
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(
            render_lightweight_markup("línea uno\nlínea dos"),
            "línea uno<br/>línea dos"
        );
    }

    #[test]
    fn html_in_the_answer_is_escaped() {
        assert_eq!(
            render_lightweight_markup("<script> & más"),
            "&lt;script&gt; &amp; más"
        );
    }
}
