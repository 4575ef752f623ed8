//! Lightweight message markup for the assistant chat.
//!
//! Rendering is HTML-escape first, then a fixed sequence of transforms:
//! bold, italic, fenced code block, inline code, list items, line breaks.
//! Fenced blocks are swapped out for placeholder tokens when they are
//! recognised and only put back after the list and line-break passes, so
//! their content is never touched by those passes.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"));
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+-]*)\n?(.*?)```").expect("code block pattern"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code pattern"));
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").expect("list item pattern"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}(\\d+)\u{E000}").expect("placeholder pattern"));

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            // Reserved for code block placeholders.
            '\u{E000}' => {}
            other => out.push(other),
        }
    }
    out
}

/// Render message text to safe HTML.
#[must_use]
pub fn render_markup(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>$1</em>");

    let mut blocks = Vec::new();
    let extracted = CODE_BLOCK.replace_all(&italic, |caps: &Captures| {
        let lang = &caps[1];
        let body = caps[2].trim_end_matches('\n');
        let html = if lang.is_empty() {
            format!("<pre><code>{body}</code></pre>")
        } else {
            format!("<pre><code class=\"language-{lang}\">{body}</code></pre>")
        };
        blocks.push(html);
        format!("\u{E000}{}\u{E000}", blocks.len() - 1)
    });

    let inline = INLINE_CODE.replace_all(&extracted, "<code>$1</code>");
    let listed = LIST_ITEM.replace_all(&inline, "<li>$1</li>");
    let broken = listed.replace('\n', "<br>");

    PLACEHOLDER
        .replace_all(&broken, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}
