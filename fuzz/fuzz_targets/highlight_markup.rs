// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting must only ever add markers.
//!
//! Keywords are escaped before they reach the regex engine, so metacharacters
//! like `(`, `*` or `\` in a keyword must match literally and never panic.
//! Markers use control characters that cannot appear in the capped input, so
//! stripping them has to give back the original text byte for byte.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seomark::{escape_html, highlight_escaped, highlight_with, Marker};

const OPEN: char = '\u{1}';
const CLOSE: char = '\u{2}';

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    keywords: Vec<String>,
}

fuzz_target!(|input: Input| {
    let clean = |s: String| -> String {
        s.chars()
            .filter(|c| *c != OPEN && *c != CLOSE)
            .take(200)
            .collect()
    };
    let text = clean(input.text);
    let keywords: Vec<String> = input.keywords.into_iter().take(8).map(clean).collect();

    let marker = Marker::new(OPEN, CLOSE);
    let marked = highlight_with(&text, &keywords, &marker);

    // INVARIANT 1: Stripping markers restores the input
    let stripped: String = marked.chars().filter(|c| *c != OPEN && *c != CLOSE).collect();
    assert_eq!(stripped, text, "Highlighting changed the text");

    // INVARIANT 2: Markers are balanced
    let opens = marked.chars().filter(|c| *c == OPEN).count();
    let closes = marked.chars().filter(|c| *c == CLOSE).count();
    assert_eq!(opens, closes, "Unbalanced markers in {:?}", marked);

    // INVARIANT 3: No keywords, no markers
    if keywords.iter().all(|k| k.is_empty()) {
        assert_eq!(marked, text);
    }

    // INVARIANT 4: Escaped output carries no markup but the markers
    let escaped = highlight_escaped(&text, &keywords, &Marker::mark());
    let bare = escaped.replace("<mark>", "").replace("</mark>", "");
    assert!(!bare.contains('<') && !bare.contains('>'), "Live markup in {:?}", escaped);
    assert_eq!(bare, escape_html(&text), "Escaping changed the text");
});
