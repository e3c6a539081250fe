//! Substitution engine — rewrite every color literal in a theme.
//!
//! # Conversion flow
//!
//! 1. Empty palette text → the theme comes back unchanged
//! 2. The palette is parsed as hex, one color per non-blank line
//! 3. The theme format's pattern collects the distinct literals in the theme
//! 4. Each distinct literal is searched once and its nearest palette color
//!    rendered back in the theme format
//! 5. One alternation of all distinct literals is scanned left to right and
//!    every match swapped through the lookup table
//!
//! Step 5 is a single pass over the original text. Replacing literals one
//! after another would let an earlier replacement be matched again as a
//! later literal.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::{debug, trace};

use retint_color::{Color, ColorFormat, Error, Metric, Result};

use crate::palette::Palette;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How a theme is read and matched: its literal format and the metric used
/// to pick palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub format: ColorFormat,
    pub metric: Metric,
}

impl Options {
    #[must_use]
    pub const fn new(format: ColorFormat, metric: Metric) -> Self {
        Self { format, metric }
    }

    /// Resolve names leniently: unknown format → hex, unknown metric →
    /// euclidean.
    #[must_use]
    pub fn named(format: &str, metric: &str) -> Self {
        Self::new(ColorFormat::lookup(format), Metric::lookup(metric))
    }

    /// Convert `theme` onto `palette` with these options.
    ///
    /// # Errors
    ///
    /// See [`convert`].
    pub fn convert(&self, theme: &str, palette: &str) -> Result<String> {
        convert(theme, self.format, palette, self.metric)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Rewrite every `format` literal in `theme` to its nearest `palette` color.
///
/// `palette` is newline-separated hex literals. Text outside the literals is
/// copied through byte for byte.
///
/// # Examples
///
/// ```
/// use retint_theme::{ColorFormat, Metric, convert};
///
/// let theme = "<c>#123456</c><c2>#654321</c2>";
/// let palette = "#ff0000\n#00ff00\n#0000ff";
/// let out = convert(theme, ColorFormat::Hex, palette, Metric::Euclidean).unwrap();
/// assert_eq!(out, "<c>#0000FF</c><c2>#FF0000</c2>");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if a palette line is not a hex literal, or if a
/// matched theme literal cannot be parsed.
pub fn convert(theme: &str, format: ColorFormat, palette: &str, metric: Metric) -> Result<String> {
    if palette.is_empty() {
        debug!(%format, %metric, "empty palette, theme left unchanged");
        return Ok(theme.to_owned());
    }

    let palette = Palette::parse(palette)?;
    if palette.is_empty() {
        debug!(%format, %metric, "palette has no colors, theme left unchanged");
        return Ok(theme.to_owned());
    }

    let table = replacement_table(theme, format, |target| palette.nearest(target, metric))?;
    debug!(
        %format,
        %metric,
        palette_len = palette.len(),
        distinct_literals = table.len(),
        "converting theme"
    );
    substitute(theme, &table)
}

/// [`convert`] with format and metric given by name.
///
/// Unknown or empty names fall back to `hex` and `euclidean`.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_named(
    theme: &str,
    format_name: &str,
    palette: &str,
    metric_name: &str,
) -> Result<String> {
    Options::named(format_name, metric_name).convert(theme, palette)
}

/// The `literal → replacement` table [`convert`] would apply, ordered by
/// literal text.
///
/// # Errors
///
/// See [`convert`].
pub fn replacements<'t>(
    theme: &'t str,
    format: ColorFormat,
    palette: &str,
    metric: Metric,
) -> Result<BTreeMap<&'t str, String>> {
    let palette = Palette::parse(palette)?;
    if palette.is_empty() {
        return Ok(BTreeMap::new());
    }
    replacement_table(theme, format, |target| palette.nearest(target, metric))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Map each distinct literal of `theme` to the rendering of `search`'s pick.
///
/// `search` runs once per distinct literal text, however often it repeats.
fn replacement_table<'t, 'p, F>(
    theme: &'t str,
    format: ColorFormat,
    mut search: F,
) -> Result<BTreeMap<&'t str, String>>
where
    F: FnMut(&Color) -> Result<&'p Color>,
{
    let mut table = BTreeMap::new();
    for literal in format.literals(theme) {
        if table.contains_key(literal) {
            continue;
        }
        let target = Color::new(literal, format)?;
        let replacement = search(&target)?.render(format);
        trace!(literal, %replacement, "nearest palette color");
        table.insert(literal, replacement);
    }
    Ok(table)
}

/// Replace every key of `table` in `theme` in a single left-to-right scan.
fn substitute(theme: &str, table: &BTreeMap<&str, String>) -> Result<String> {
    // An empty alternation would match the empty string everywhere.
    if table.is_empty() {
        return Ok(theme.to_owned());
    }

    let pattern = alternation(table.keys().copied())?;

    let mut out = String::with_capacity(theme.len());
    let mut last = 0;
    for found in pattern.find_iter(theme) {
        out.push_str(&theme[last..found.start()]);
        let literal = found.as_str();
        out.push_str(table.get(literal).map_or(literal, String::as_str));
        last = found.end();
    }
    out.push_str(&theme[last..]);
    Ok(out)
}

/// Build one pattern matching any of `literals` verbatim.
///
/// Longer literals come first so that a literal which is a prefix of
/// another never shadows it under leftmost-first matching.
fn alternation<'a>(literals: impl Iterator<Item = &'a str>) -> Result<Regex> {
    let mut literals: Vec<&str> = literals.collect();
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let source = literals
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&source).map_err(|err| Error::Pattern(err.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
