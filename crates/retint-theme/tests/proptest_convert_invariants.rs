//! Property-based invariant tests for theme conversion.
//!
//! 1. Closure: every hex literal in the output is a palette color
//! 2. Text between literals passes through unchanged
//! 3. Determinism: same inputs yield the same output
//! 4. Literal case never changes the result
//! 5. Empty palette is a no-op for any theme
//! 6. Nearest search returns the first minimum in palette order
//! 7. Formats are self-consistent on channels
//! 8. Metrics are symmetric
//! 9. Decimal themes: surroundings survive and every replacement is a palette
//!    color rendered as a decimal

use std::collections::HashSet;

use proptest::prelude::*;
use retint_theme::{Color, ColorFormat, Metric, Palette, convert, nearest, replacements};

// ── Strategies ──────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop_oneof![
        Just(Metric::Euclidean),
        Just(Metric::Manhattan),
        Just(Metric::Uniform),
    ]
}

/// Palette colors; rendered as lowercase hex lines by `palette_text`.
fn palette_strategy() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
    prop::collection::vec(rgb_strategy(), 1..8)
}

/// Filler text that can never start a hex literal.
fn filler_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 <>/=\n\t]{0,12}"
}

/// A theme as alternating filler and colors: `filler (color filler)*`.
fn theme_parts_strategy() -> impl Strategy<Value = (String, Vec<((u8, u8, u8), String)>)> {
    (
        filler_strategy(),
        prop::collection::vec((rgb_strategy(), filler_strategy()), 0..10),
    )
}

/// Filler for decimal themes: no digits, and never starting or ending with
/// whitespace, so it cannot extend or merge neighbouring literals.
fn decimal_filler_strategy() -> impl Strategy<Value = String> {
    "[a-z<>/=;]([a-z<>/=; \n\t]{0,10}[a-z<>/=;])?"
}

/// A decimal theme as `filler (literal filler)*`, literals written as four
/// decimals with alpha `1`.
fn decimal_theme_parts_strategy() -> impl Strategy<Value = (String, Vec<((u8, u8, u8), String)>)> {
    (
        decimal_filler_strategy(),
        prop::collection::vec((rgb_strategy(), decimal_filler_strategy()), 0..10),
    )
}

fn decimal_literal(rgb: (u8, u8, u8)) -> String {
    format!("{} 1", ColorFormat::RgbaDecimal.stringify(rgb))
}

fn palette_text(colors: &[(u8, u8, u8)]) -> String {
    colors
        .iter()
        .map(|&(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn theme_text(head: &str, parts: &[((u8, u8, u8), String)], upper: bool) -> String {
    let mut text = head.to_owned();
    for (rgb, filler) in parts {
        let (r, g, b) = *rgb;
        if upper {
            text.push_str(&format!("#{r:02X}{g:02X}{b:02X}"));
        } else {
            text.push_str(&format!("#{r:02x}{g:02x}{b:02x}"));
        }
        text.push_str(filler);
    }
    text
}

fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::new(ColorFormat::Hex.stringify(rgb), ColorFormat::Hex).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Closure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn output_only_contains_palette_colors(
        theme_parts in theme_parts_strategy(),
        palette in palette_strategy(),
        metric in metric_strategy(),
    ) {
        let (head, parts) = theme_parts;
        let theme = theme_text(&head, &parts, false);
        let out = convert(&theme, ColorFormat::Hex, &palette_text(&palette), metric).unwrap();

        let allowed: HashSet<String> =
            palette.iter().map(|&rgb| ColorFormat::Hex.stringify(rgb)).collect();
        for literal in ColorFormat::Hex.literals(&out) {
            prop_assert!(allowed.contains(literal), "{literal} not in palette");
        }
        prop_assert_eq!(ColorFormat::Hex.literals(&out).count(), parts.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Surrounding text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_between_literals_is_preserved(
        theme_parts in theme_parts_strategy(),
        palette in palette_strategy(),
        metric in metric_strategy(),
    ) {
        let (head, parts) = theme_parts;
        let theme = theme_text(&head, &parts, false);
        let out = convert(&theme, ColorFormat::Hex, &palette_text(&palette), metric).unwrap();

        let pattern = ColorFormat::Hex.pattern();
        let before: Vec<&str> = pattern.split(&theme).collect();
        let after: Vec<&str> = pattern.split(&out).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(theme.len(), out.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Determinism, case, empty palette
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn conversion_is_deterministic(
        theme_parts in theme_parts_strategy(),
        palette in palette_strategy(),
        metric in metric_strategy(),
    ) {
        let (head, parts) = theme_parts;
        let theme = theme_text(&head, &parts, false);
        let palette = palette_text(&palette);
        let first = convert(&theme, ColorFormat::Hex, &palette, metric).unwrap();
        let second = convert(&theme, ColorFormat::Hex, &palette, metric).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn literal_case_does_not_matter(
        theme_parts in theme_parts_strategy(),
        palette in palette_strategy(),
        metric in metric_strategy(),
    ) {
        let (head, parts) = theme_parts;
        let palette = palette_text(&palette);
        let lower = convert(&theme_text(&head, &parts, false), ColorFormat::Hex, &palette, metric).unwrap();
        let upper = convert(&theme_text(&head, &parts, true), ColorFormat::Hex, &palette, metric).unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn empty_palette_is_identity(theme in ".{0,64}", metric in metric_strategy()) {
        for format in ColorFormat::ALL {
            prop_assert_eq!(convert(&theme, format, "", metric).unwrap(), theme.clone());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. First-minimum search
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nearest_is_first_minimum(
        palette in palette_strategy(),
        target in rgb_strategy(),
        metric in metric_strategy(),
    ) {
        let candidates: Vec<Color> = palette.iter().map(|&rgb| hex(rgb)).collect();
        let target = hex(target);

        let distances: Vec<f64> = candidates.iter().map(|c| metric.distance(&target, c)).collect();
        let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let expected = distances.iter().position(|&d| d == min).unwrap();

        let found = nearest(&candidates, &target, metric).unwrap();
        prop_assert!(std::ptr::eq(found, &candidates[expected]));

        let via_palette = Palette::from(candidates.clone());
        prop_assert_eq!(via_palette.nearest(&target, metric).unwrap().text(), candidates[expected].text());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7–8. Formats and metrics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn formats_are_self_consistent(rgb in rgb_strategy()) {
        for format in ColorFormat::ALL {
            prop_assert_eq!(format.parse(&format.stringify(rgb)).unwrap(), rgb);
        }
    }

    #[test]
    fn decimal_literals_are_self_consistent(
        literal in "[0-1](\\.[0-9]{1,6})? [0-1](\\.[0-9]{1,6})? [0-1](\\.[0-9]{1,6})? [0-1](\\.[0-9]{1,3})?",
    ) {
        let format = ColorFormat::RgbaDecimal;
        prop_assert!(format.pattern().is_match(&literal));
        let rgb = format.parse(&literal).unwrap();
        prop_assert_eq!(format.parse(&format.stringify(rgb)).unwrap(), rgb);
    }

    #[test]
    fn metrics_are_symmetric(a in rgb_strategy(), b in rgb_strategy(), metric in metric_strategy()) {
        let (a, b) = (hex(a), hex(b));
        prop_assert_eq!(metric.distance(&a, &b), metric.distance(&b, &a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Decimal themes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decimal_theme_rewrites_only_literals_to_palette_colors(
        theme_parts in decimal_theme_parts_strategy(),
        palette in palette_strategy(),
        metric in metric_strategy(),
    ) {
        let (head, parts) = theme_parts;
        let mut theme = head.clone();
        for (rgb, filler) in &parts {
            theme.push_str(&decimal_literal(*rgb));
            theme.push_str(filler);
        }
        let palette_text = palette_text(&palette);
        let format = ColorFormat::RgbaDecimal;

        let found: Vec<&str> = format.literals(&theme).collect();
        let expected_literals: Vec<String> = parts.iter().map(|(rgb, _)| decimal_literal(*rgb)).collect();
        prop_assert_eq!(&found, &expected_literals);

        let allowed: HashSet<String> = palette.iter().map(|&rgb| hex(rgb).render(format)).collect();
        let table = replacements(&theme, format, &palette_text, metric).unwrap();
        for replacement in table.values() {
            prop_assert!(allowed.contains(replacement), "{replacement} not a palette color");
        }

        let mut expected = head.clone();
        for (rgb, filler) in &parts {
            expected.push_str(&table[decimal_literal(*rgb).as_str()]);
            expected.push_str(filler);
        }
        let out = convert(&theme, format, &palette_text, metric).unwrap();
        prop_assert_eq!(out, expected);
    }
}
