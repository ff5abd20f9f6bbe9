//! HTML building blocks shared by the section formatters.
//!
//! Blocks are newline separated and rendered by the page inside a
//! `white-space: pre-wrap` container; colours are Tailwind classes.

use crate::content::Item;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_COLOR: &str = "text-gray-300";
pub const DEFAULT_GLYPH: &str = "-";
pub const INDENT: &str = "  ";

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("static url pattern"));

/// Map a palette key to its class; unknown or missing keys get the neutral one.
pub fn color_class(key: Option<&str>) -> &'static str {
    let Some(key) = key else {
        return DEFAULT_COLOR;
    };
    match key.trim().to_ascii_lowercase().as_str() {
        "green" => "text-green-400",
        "red" => "text-red-400",
        "blue" => "text-blue-400",
        "cyan" => "text-cyan-400",
        "yellow" => "text-yellow-400",
        "orange" => "text-orange-400",
        "purple" | "magenta" => "text-purple-400",
        "pink" => "text-pink-400",
        "white" => "text-white",
        "gray" | "grey" => "text-gray-400",
        _ => DEFAULT_COLOR,
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape plain text and turn its line breaks into `<br>`.
pub fn escape_with_breaks(s: &str) -> String {
    escape_html(s)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn anchor(url: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-400 underline\">{}</a>",
        escape_html(url),
        escape_html(text)
    )
}

/// Escape `text`, wrapping every absolute URL in an anchor.
pub fn linkify(text: &str) -> String {
    let mut out = String::new();
    let mut last = 0;
    for m in URL.find_iter(text) {
        // trailing punctuation belongs to the sentence, not the link
        let url = m
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']']);
        if url.ends_with("://") {
            continue;
        }
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(&anchor(url, url));
        last = m.start() + url.len();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

pub fn title(text: &str) -> String {
    format!(
        "<span class=\"font-bold text-green-400\">{}</span>",
        escape_html(text)
    )
}

/// `Label: value` line; `value` is plain text and gets linkified.
pub fn field(label: &str, value: &str) -> String {
    format!(
        "<span class=\"text-cyan-400\">{}:</span> {}",
        escape_html(label),
        linkify(value)
    )
}

pub fn glyph(icon: Option<&str>, color: Option<&str>) -> String {
    match icon.map(str::trim).filter(|i| !i.is_empty()) {
        Some(icon) => format!(
            "<span class=\"{}\">{}</span>",
            color_class(color),
            escape_html(icon)
        ),
        None => DEFAULT_GLYPH.to_string(),
    }
}

pub fn item_line(item: &Item, indent: &str) -> String {
    let mut body = String::new();
    if let Some(label) = item.label.as_deref().filter(|l| !l.is_empty()) {
        body.push_str(&format!(
            "<span class=\"text-gray-400\">{}:</span> ",
            escape_html(label)
        ));
    }
    match item.url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) if item.text.is_empty() => body.push_str(&anchor(url, url)),
        Some(url) if !item.text.contains(url) => body.push_str(&anchor(url, &item.text)),
        _ => body.push_str(&linkify(&item.text)),
    }
    format!(
        "{}{} {}",
        indent,
        glyph(item.icon.as_deref(), item.color.as_deref()),
        body
    )
}

/// Stand-in line for an empty list so the block keeps its shape.
pub fn placeholder(indent: &str) -> String {
    format!("{}{}", indent, DEFAULT_GLYPH)
}
