// SPDX-License-Identifier: MIT
//
// Distance metrics over 8-bit channel triples.
//
// Every metric is a function of the signed channel differences only, so
// all of them are symmetric: d(a, b) == d(b, a).
//
//   euclidean  sqrt(Δr² + Δg² + Δb²)
//   manhattan  |Δr| + |Δg| + |Δb|
//   uniform    max(|Δr|, |Δg|, |Δb|)        (Chebyshev)

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{Error, Result};

// ─── Metric ──────────────────────────────────────────────────────────────────

/// A named distance function between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    Uniform,
}

impl Metric {
    /// Every metric, in the order the CLI runs them.
    pub const ALL: [Self; 3] = [Self::Euclidean, Self::Manhattan, Self::Uniform];

    /// Resolve a metric by name, falling back to [`Metric::Euclidean`].
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Uniform => "uniform",
        }
    }

    /// Distance between `a` and `b` under this metric.
    #[must_use]
    pub fn distance(self, a: &Color, b: &Color) -> f64 {
        let (dr, dg, db) = differences(a, b);
        match self {
            Self::Euclidean => f64::from(dr * dr + dg * dg + db * db).sqrt(),
            Self::Manhattan => f64::from(dr.abs() + dg.abs() + db.abs()),
            Self::Uniform => f64::from(dr.abs().max(dg.abs()).max(db.abs())),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_owned()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Signed channel differences `a - b`.
#[must_use]
pub fn differences(a: &Color, b: &Color) -> (i32, i32, i32) {
    let (ar, ag, ab) = a.rgb();
    let (br, bg, bb) = b.rgb();
    (
        i32::from(ar) - i32::from(br),
        i32::from(ag) - i32::from(bg),
        i32::from(ab) - i32::from(bb),
    )
}

/// Distance between `a` and `b` under the metric registered as `name`.
///
/// Unknown names use the euclidean metric.
///
/// ```
/// use retint_color::{Color, ColorFormat, metric};
///
/// let a = Color::new("#010101", ColorFormat::Hex).unwrap();
/// let b = Color::new("#000000", ColorFormat::Hex).unwrap();
/// assert_eq!(metric("manhattan", &a, &b), 3.0);
/// assert_eq!(metric("uniform", &a, &b), 1.0);
/// assert_eq!(metric("", &a, &b), 3.0_f64.sqrt());
/// ```
#[must_use]
pub fn metric(name: &str, a: &Color, b: &Color) -> f64 {
    Metric::lookup(name).distance(a, b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
