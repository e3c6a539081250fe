//! Palettes and nearest-color search.
//!
//! A palette is the fixed, ordered set of colors a theme is retargeted
//! onto. Palettes are always written as hex literals, one per line; the
//! line order is kept because it decides ties in [`nearest`].

use retint_color::{Color, ColorFormat, Error, Metric, Result};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered list of reference colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Parse palette text: one hex literal per line, blank lines skipped.
    ///
    /// Lines are trimmed, so CRLF input and indented lists both work.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for the first non-blank line that is not a
    /// hex literal.
    pub fn parse(text: &str) -> Result<Self> {
        let colors = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Color::new(line, ColorFormat::Hex))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in palette order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// The palette color closest to `target` under `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] if the palette has no colors.
    pub fn nearest(&self, target: &Color, metric: Metric) -> Result<&Color> {
        nearest(&self.colors, target, metric)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ---------------------------------------------------------------------------
// Nearest-color search
// ---------------------------------------------------------------------------

/// Find the candidate closest to `target` under `metric`.
///
/// A linear scan in candidate order; a candidate replaces the current best
/// only when it is strictly closer, so the first of several equidistant
/// candidates wins.
///
/// # Errors
///
/// Returns [`Error::EmptyPalette`] if `candidates` is empty.
pub fn nearest<'a>(candidates: &'a [Color], target: &Color, metric: Metric) -> Result<&'a Color> {
    let (first, rest) = candidates.split_first().ok_or(Error::EmptyPalette)?;

    let mut best = first;
    let mut best_distance = metric.distance(target, first);
    for candidate in rest {
        let distance = metric.distance(target, candidate);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    Ok(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
