// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for score breakdowns and optimization reports.
//!
//! Colors come from a [`Palette`] picked once per process: OneDark on dark
//! backgrounds, One Light on light ones. `SEOMARK_THEME=light|dark` wins over
//! the `COLORFGBG` hint some terminals export. With `NO_COLOR` set, or when
//! stdout is piped, everything renders as plain text.

use seomark::{Marker, OptimizationReport, ScoreBreakdown, PREFERRED_LENGTH};
use std::sync::OnceLock;

/// Inner width of a report box, between the two `│` borders.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

type Rgb = (u8, u8, u8);

/// Colors by what they mean in a report, not by hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Scores that cover most keywords
    pub strong: Rgb,
    pub good: Rgb,
    pub weak: Rgb,
    pub bad: Rgb,
    /// Section labels
    pub label: Rgb,
    /// Borders and missing keywords
    pub muted: Rgb,
    /// Highlighted keywords in running text
    pub keyword: Rgb,
}

pub const ONE_DARK: Palette = Palette {
    strong: (166, 226, 46),
    good: (152, 195, 121),  // #98c379
    weak: (229, 192, 123),  // #e5c07b
    bad: (224, 108, 117),   // #e06c75
    label: (86, 182, 194),  // #56b6c2
    muted: (92, 99, 112),   // #5c6370
    keyword: (255, 215, 0),
};

pub const ONE_LIGHT: Palette = Palette {
    strong: (68, 140, 39),
    good: (80, 161, 79),    // #50a14f
    weak: (193, 132, 1),    // #c18401
    bad: (228, 86, 73),     // #e45649
    label: (1, 132, 188),   // #0184bc
    muted: (160, 161, 167), // #a0a1a7
    keyword: (152, 104, 1),
};

static PALETTE: OnceLock<Palette> = OnceLock::new();

fn light_background() -> bool {
    if let Ok(theme) = std::env::var("SEOMARK_THEME") {
        match theme.to_ascii_lowercase().as_str() {
            "light" => return true,
            "dark" => return false,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 or 15 means a light terminal
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg == 7 || bg == 15)
}

pub fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| if light_background() { ONE_LIGHT } else { ONE_DARK })
}

fn fg((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTING
// ═══════════════════════════════════════════════════════════════════════════

/// False under `NO_COLOR` or when stdout is not a terminal.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(color: Rgb, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, fg(color), text, RESET)
}

/// Printable width of `s`, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Consume through the terminating 'm'
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Keyword marker for terminal output: bold underlined color on a TTY,
/// `[brackets]` otherwise.
pub fn terminal_marker() -> Marker {
    if use_colors() {
        let open = format!("{}{}{}", BOLD, UNDERLINE, fg(palette().keyword));
        Marker::new(open, RESET)
    } else {
        Marker::new("[", "]")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    paint(palette().muted, false, s)
}

/// Horizontal rule with an optional label: `┌─ LABEL ───┐`.
fn rule(left: char, label: Option<&str>, right: char) {
    let label = label
        .map(|text| format!("─ {} ", paint(palette().label, true, text)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!(
        "{}{}{}",
        border(&left.to_string()),
        label.replacen('─', &border("─"), 1),
        border(&format!("{}{}", fill, right))
    );
}

pub fn section_top(label: &str) {
    rule('┌', Some(label), '┐');
}

pub fn section_mid(label: &str) {
    rule('├', Some(label), '┤');
}

pub fn section_bot() {
    rule('└', None, '┘');
}

/// One padded line inside a box.
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Greedy word wrap measured with [`visible_len`]. Words longer than `width`
/// get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && visible_len(&current) + 1 + visible_len(word) > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn paragraph(text: &str) {
    for line in wrap(text, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// Right-aligned score, colored by band.
pub fn score_value(score: u32) -> String {
    let p = palette();
    let color = match score {
        40.. => p.strong,
        20..=39 => p.good,
        6..=19 => p.weak,
        _ => p.muted,
    };
    paint(color, false, &format!("{:>4}", score))
}

/// Signed score change.
pub fn improvement(delta: i64) -> String {
    let p = palette();
    let color = match delta.signum() {
        1 => p.good,
        -1 => p.bad,
        _ => p.muted,
    };
    paint(color, delta != 0, &format!("{:+}", delta))
}

pub fn keyword_status(keyword: &str, matched: bool) -> String {
    let p = palette();
    if matched {
        format!("{} {}", paint(p.good, false, "✓"), keyword)
    } else {
        format!("{} {}", paint(p.bad, false, "✗"), paint(p.muted, false, keyword))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_breakdown(breakdown: &ScoreBreakdown) {
    let total_keywords = breakdown.matched.len() + breakdown.missing.len();

    section_top("SCORE");
    row(&format!(" Total         {}", score_value(breakdown.total)));
    row(&format!(
        " Coverage      {} of {} keywords",
        breakdown.coverage(),
        total_keywords
    ));
    row(&format!(
        " Length        {} chars (preferred {}-{}), bonus {}",
        breakdown.char_len,
        PREFERRED_LENGTH.start(),
        PREFERRED_LENGTH.end(),
        breakdown.length_bonus
    ));

    if total_keywords > 0 {
        section_mid("KEYWORDS");
        let statuses = breakdown
            .matched
            .iter()
            .map(|k| (k, true))
            .chain(breakdown.missing.iter().map(|k| (k, false)));
        for (keyword, matched) in statuses {
            row(&format!(" {}", keyword_status(keyword, matched)));
        }
    }
    section_bot();
}

/// Highlights in `report` are expected to use [`terminal_marker`].
pub fn print_report(report: &OptimizationReport) {
    section_top("OPTIMIZED TITLE");
    paragraph(&report.optimized_title);
    section_mid("OPTIMIZED DESCRIPTION");
    paragraph(&report.optimized_description);
    section_mid("ALT TEXT");
    paragraph(&report.alt_text);
    section_mid("KEYWORDS");
    paragraph(&report.keywords.join(", "));
    section_mid("SCORES");
    row(&format!(" Original      {}", score_value(report.original_score)));
    row(&format!(" Optimized     {}", score_value(report.optimized_score)));
    row(&format!(" Change        {}", improvement(report.improvement())));
    section_bot();
}
