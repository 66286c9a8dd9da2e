//! Inline markup in bubbles and speaker names.
//!
//! Relays send HTML-bearing text (`<strong>ERROR</strong>`, `<em>`, `<br>`,
//! entities). Only bold, italic and line breaks are honoured; every other
//! tag is dropped and its text kept.

use eframe::egui::{self, Color32, RichText};
use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(/?)\s*([a-z][a-z0-9]*)[^>]*>|&(amp|lt|gt|quot|apos|nbsp|#39);")
        .expect("markup pattern is valid")
});

/// A run of text with uniform styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Split markup into styled spans.
pub(crate) fn parse_markup(input: &str) -> Vec<TextSpan> {
    let mut spans: Vec<TextSpan> = Vec::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut last = 0;

    let push = |spans: &mut Vec<TextSpan>, text: &str, bold: bool, italic: bool| {
        if text.is_empty() {
            return;
        }
        match spans.last_mut() {
            Some(prev) if prev.bold == bold && prev.italic == italic => prev.text.push_str(text),
            _ => spans.push(TextSpan {
                text: text.to_string(),
                bold,
                italic,
            }),
        }
    };

    for caps in MARKUP.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        push(&mut spans, &input[last..whole.start()], bold > 0, italic > 0);
        last = whole.end();

        if let Some(entity) = caps.get(3) {
            let decoded = match entity.as_str() {
                "amp" => "&",
                "lt" => "<",
                "gt" => ">",
                "quot" => "\"",
                "nbsp" => " ",
                _ => "'",
            };
            push(&mut spans, decoded, bold > 0, italic > 0);
            continue;
        }

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let tag = caps.get(2).map(|m| m.as_str().to_ascii_lowercase()).unwrap_or_default();
        let counter = match tag.as_str() {
            "strong" | "b" => &mut bold,
            "em" | "i" => &mut italic,
            "br" => {
                push(&mut spans, "\n", bold > 0, italic > 0);
                continue;
            }
            _ => continue,
        };
        if closing {
            *counter = counter.saturating_sub(1);
        } else {
            *counter += 1;
        }
    }
    push(&mut spans, &input[last..], bold > 0, italic > 0);
    spans
}

/// Markup reduced to plain text.
pub(crate) fn plain_text(input: &str) -> String {
    parse_markup(input).into_iter().map(|s| s.text).collect()
}

/// Render markup as wrapped rich text.
pub(crate) fn render_markup(ui: &mut egui::Ui, input: &str, color: Color32, size: f32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in parse_markup(input) {
            let mut text = RichText::new(span.text).size(size).color(color);
            if span.bold {
                text = text.strong();
            }
            if span.italic {
                text = text.italics();
            }
            ui.label(text);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, bold: bool, italic: bool) -> TextSpan {
        TextSpan {
            text: text.into(),
            bold,
            italic,
        }
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(parse_markup("hello world"), vec![span("hello world", false, false)]);
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            parse_markup("<strong>ERROR</strong>: <em>bad</em> thing"),
            vec![
                span("ERROR", true, false),
                span(": ", false, false),
                span("bad", false, true),
                span(" thing", false, false),
            ]
        );
    }

    #[test]
    fn test_entities_and_unknown_tags() {
        assert_eq!(plain_text("a &lt;b&gt; &amp; c"), "a <b> & c");
        assert_eq!(plain_text(r#"<span class="x">hi</span>"#), "hi");
        assert_eq!(plain_text("it&#39;s"), "it's");
    }

    #[test]
    fn test_line_break_and_stray_close() {
        assert_eq!(plain_text("one<br>two<br/>three"), "one\ntwo\nthree");
        // A closing tag without an opener must not underflow
        assert_eq!(parse_markup("</b>x"), vec![span("x", false, false)]);
    }
}
