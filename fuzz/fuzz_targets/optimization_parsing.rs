// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Model answers are untrusted text.
//!
//! Whatever comes back from the completion endpoint, parsing must not panic,
//! and every recovered field must already be trimmed. Labels followed by
//! multi-byte characters are the interesting case for slicing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seomark::{highlight, parse_optimization, score};

fn is_trimmed(value: &str) -> bool {
    value.trim() == value
}

fuzz_target!(|data: &[u8]| {
    let answer = String::from_utf8_lossy(data);
    let seo = parse_optimization(&answer);

    // INVARIANT 1: Values carry no surrounding whitespace
    assert!(is_trimmed(&seo.title), "Untrimmed title {:?}", seo.title);
    assert!(is_trimmed(&seo.description), "Untrimmed description {:?}", seo.description);
    assert!(is_trimmed(&seo.alt_text), "Untrimmed alt text {:?}", seo.alt_text);

    // INVARIANT 2: No blank keywords
    for keyword in &seo.keywords {
        assert!(!keyword.is_empty(), "Blank keyword from {:?}", answer);
        assert!(is_trimmed(keyword));
    }

    // INVARIANT 3: Parsed output feeds the rest of the pipeline without panicking
    let combined = format!("{} {}", seo.title, seo.description);
    let _ = score(&combined, &seo.keywords);
    let _ = highlight(&seo.title, &seo.keywords);
});
