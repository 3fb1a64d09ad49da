//! Property-based invariant tests for line parsing and block composition.
//!
//! 1. A line always yields `form_feeds + 1` runs.
//! 2. Run y never decreases within a line.
//! 3. Emitted runs contain no layout control characters.
//! 4. Tab expansion yields `tabs + 1` runs per input run and keeps the text.
//! 5. Without form feeds, every run of line `n` sits at `start.y + n * line_height`.
//! 6. Composition is deterministic.

use anchortext_core::geometry::Point;
use anchortext_text::parse::{BACKSPACE, CARRIAGE_RETURN, FORM_FEED};
use anchortext_text::tabs::TAB;
use anchortext_text::{Composer, MonospaceMetrics, TabStops, TextRun, parse_line, split_lines};
use proptest::prelude::*;

const METRICS: MonospaceMetrics = MonospaceMetrics::new(6, 14);

// ── Helpers ─────────────────────────────────────────────────────────────

fn line_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::char::range('a', 'e'),
        1 => Just(BACKSPACE),
        1 => Just(CARRIAGE_RETURN),
        1 => Just(FORM_FEED),
        1 => Just(TAB),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn block_without_form_feeds() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'e'),
            1 => Just(BACKSPACE),
            1 => Just(CARRIAGE_RETURN),
            1 => Just(TAB),
            1 => Just('\n'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-100i32..=100, -100i32..=100).prop_map(|(x, y)| Point::new(x, y))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Line parser shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_run_per_form_feed_plus_one(line in line_strategy(), start in point_strategy()) {
        let parsed = parse_line(&line, start, &METRICS);
        let feeds = line.chars().filter(|&c| c == FORM_FEED).count();
        prop_assert_eq!(parsed.runs.len(), feeds + 1);
        prop_assert_eq!(parsed.runs[0].anchor, start);
    }

    #[test]
    fn y_never_decreases_within_line(line in line_strategy(), start in point_strategy()) {
        let parsed = parse_line(&line, start, &METRICS);
        for pair in parsed.runs.windows(2) {
            prop_assert!(pair[0].anchor.y <= pair[1].anchor.y);
        }
        prop_assert_eq!(parsed.runs.last().map(|r| r.anchor), Some(parsed.pen));
    }

    #[test]
    fn runs_hold_no_cursor_controls(line in line_strategy()) {
        let parsed = parse_line(&line, Point::ORIGIN, &METRICS);
        for run in &parsed.runs {
            prop_assert!(!run.text.contains([BACKSPACE, CARRIAGE_RETURN, FORM_FEED]));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Tab expansion conserves text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tab_expansion_conserves_text(
        text in "[a-c\t]{0,30}",
        start in point_strategy(),
        length in 1i32..=64,
    ) {
        let tabs = TabStops::fixed(length);
        let runs = tabs.expand_run(TextRun::new(text.clone(), start), &METRICS);
        let tab_count = text.chars().filter(|&c| c == TAB).count();
        prop_assert_eq!(runs.len(), tab_count + 1);

        let joined: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        prop_assert_eq!(joined.join("\t"), text);

        for pair in runs.windows(2) {
            prop_assert!(pair[1].anchor.x > pair[0].anchor.x);
            prop_assert_eq!(pair[1].anchor.y, start.y);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Composition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn line_n_sits_at_n_line_heights(
        text in block_without_form_feeds(),
        start in point_strategy(),
    ) {
        let composer = Composer::new(&METRICS, TabStops::fixed(20));
        let mut expected = Vec::new();
        for (n, line) in split_lines(&text).into_iter().enumerate() {
            let line_start = Point::new(start.x, start.y + n as i32 * 14);
            let parsed = composer.line(line, line_start);
            prop_assert_eq!(parsed.runs[0].anchor.x, start.x);
            for run in &parsed.runs {
                prop_assert_eq!(run.anchor.y, line_start.y);
            }
            expected.extend(parsed.runs);
        }

        prop_assert_eq!(composer.compose(&text, start), expected);
    }

    #[test]
    fn composition_is_deterministic(text in block_without_form_feeds(), start in point_strategy()) {
        let composer = Composer::with_measured_tabs(&METRICS);
        prop_assert_eq!(composer.compose(&text, start), composer.compose(&text, start));
    }
}
