// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword highlighting.
//!
//! Every case-insensitive occurrence of a keyword is wrapped in a [`Marker`].
//! The matched text keeps its original casing: highlighting `"running"` in
//! `"Best Running Shoes"` yields `"Best <mark>Running</mark> Shoes"`.
//!
//! # Sequential substitution
//!
//! Keywords are applied one after another, each pass working on the output of
//! the previous one. A later keyword can therefore match inside text (or marker
//! markup) produced by an earlier pass:
//!
//! ```text
//! highlight("running shoes", ["running shoes", "shoes"])
//!   → "<mark>running <mark>shoes</mark></mark>"
//! ```
//!
//! Nested and doubled markers are the expected result of overlapping keywords.
//!
//! # Untrusted text
//!
//! [`highlight_with`] copies the text through as is. For text that ends up in
//! a page and did not come from the page author (model answers, user input),
//! use [`highlight_escaped`]: it escapes the text and leaves only the marker
//! markup live.

use regex::{Captures, Regex, RegexBuilder};

/// Open/close pair wrapped around each match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
    /// The marker is HTML markup, so the text around it must be escaped
    /// before it reaches a page.
    pub html: bool,
}

impl Marker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            html: false,
        }
    }

    /// An HTML open/close pair.
    pub fn html(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            html: true,
            ..Self::new(open, close)
        }
    }

    /// `<mark>…</mark>`
    pub fn mark() -> Self {
        Self::html("<mark>", "</mark>")
    }

    /// `<span class="{class}">…</span>`
    pub fn span(class: &str) -> Self {
        Self::html(format!("<span class=\"{}\">", escape_html(class)), "</span>")
    }

    /// Wrap `text` in this marker.
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + text.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
        out
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::mark()
    }
}

/// Highlight `keywords` in `text` with the default `<mark>` marker.
///
/// ```
/// let html = seomark::highlight("Best Running Shoes", &["running"]);
/// assert_eq!(html, "Best <mark>Running</mark> Shoes");
/// ```
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    highlight_with(text, keywords, &Marker::default())
}

/// Highlight `keywords` in `text` with a custom marker.
///
/// Keywords are matched literally, so `"c++"` or `"50%"` highlight the text
/// they spell. Empty keywords are skipped.
pub fn highlight_with<S: AsRef<str>>(text: &str, keywords: &[S], marker: &Marker) -> String {
    let mut out = text.to_string();

    for pattern in keywords.iter().filter_map(|k| keyword_pattern(k.as_ref())) {
        out = pattern
            .replace_all(&out, |caps: &Captures| marker.wrap(&caps[0]))
            .into_owned();
    }

    out
}

/// Like [`highlight_with`], but every piece of `text` is HTML-escaped and
/// keywords never match inside marker markup added by an earlier keyword.
///
/// ```
/// use seomark::{highlight_escaped, Marker};
///
/// let html = highlight_escaped("<b>Shoes</b>", &["shoes"], &Marker::mark());
/// assert_eq!(html, "&lt;b&gt;<mark>Shoes</mark>&lt;/b&gt;");
/// ```
pub fn highlight_escaped<S: AsRef<str>>(text: &str, keywords: &[S], marker: &Marker) -> String {
    let mut pieces = vec![Piece::Text(text.to_string())];

    for pattern in keywords.iter().filter_map(|k| keyword_pattern(k.as_ref())) {
        pieces = pieces
            .into_iter()
            .flat_map(|piece| match piece {
                Piece::Text(text) => split_matches(&pattern, &text),
                marker_piece => vec![marker_piece],
            })
            .collect();
    }

    let mut out = String::with_capacity(text.len());
    for piece in &pieces {
        match piece {
            Piece::Text(text) => out.push_str(&escape_html(text)),
            Piece::Open => out.push_str(&marker.open),
            Piece::Close => out.push_str(&marker.close),
        }
    }
    out
}

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

enum Piece {
    Text(String),
    Open,
    Close,
}

fn split_matches(pattern: &Regex, text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for found in pattern.find_iter(text) {
        if found.start() > last {
            pieces.push(Piece::Text(text[last..found.start()].to_string()));
        }
        pieces.push(Piece::Open);
        pieces.push(Piece::Text(found.as_str().to_string()));
        pieces.push(Piece::Close);
        last = found.end();
    }
    if last < text.len() {
        pieces.push(Piece::Text(text[last..].to_string()));
    }
    pieces
}

/// Literal, case-insensitive pattern for `keyword`. `None` for empty keywords
/// and for keywords over the regex size limit.
fn keyword_pattern(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }

    match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!(keyword_len = keyword.len(), error = %e, "skipping unhighlightable keyword");
            None
        }
    }
}
