//! Big-digit clock rendering.
//!
//! Each glyph is five rows tall. Digits are five columns wide and are
//! separated by a two-column gap; the colon carries its own padding, so no
//! gap is inserted on either side of it. Characters without a glyph are
//! skipped.

use std::time::Duration;

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

const DIGIT_GAP: usize = 2;
const SECONDS_PER_MINUTE: u64 = 60;

type Glyph = [&'static str; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["    █", "    █", "    █", "    █", "    █"],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", "█████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "    █", "    █", "    █"],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

const COLON: Glyph = ["   ", " █ ", "   ", " █ ", "   "];

fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        ':' => Some(&COLON),
        _ => c.to_digit(10).and_then(|d| DIGITS.get(d as usize)),
    }
}

fn gap_before(prev: char, cur: char) -> usize {
    if prev == ':' || cur == ':' { 0 } else { DIGIT_GAP }
}

/// Render digits and colons as rows of block characters.
pub fn big_digits(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    let mut prev = None;

    for c in text.chars() {
        let Some(glyph) = glyph(c) else {
            continue;
        };
        let gap = prev.map_or(0, |p| gap_before(p, c));
        prev = Some(c);

        for (row, line) in rows.iter_mut().zip(glyph) {
            row.extend(std::iter::repeat_n(' ', gap));
            row.push_str(line);
        }
    }

    rows
}

/// Format a duration as `M:SS`.
///
/// Countdowns round up so a fresh 10 second interval reads `0:10` for its
/// whole first second. Count-up values round down.
pub fn format_clock(duration: Duration, counts_up: bool) -> String {
    let mut total = duration.as_secs();
    if !counts_up && duration.subsec_nanos() > 0 {
        total = total.saturating_add(1);
    }
    format!("{}:{:02}", total / SECONDS_PER_MINUTE, total % SECONDS_PER_MINUTE)
}
