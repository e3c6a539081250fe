// SPDX-License-Identifier: MIT
//
// retint-color — color literals and distances for retint.
//
// Everything in here is a pure value: a format knows how to recognize,
// parse, and render one literal syntax; a color pairs the literal text
// with its 8-bit channels; a metric turns two colors into a scalar.
//
//   text ──format.pattern()──▶ literal ──format.parse()──▶ (r, g, b)
//   (r, g, b) ──format.stringify()──▶ text
//
// Format and metric names are resolved once, at the boundary, into the
// `ColorFormat` and `Metric` enums. Unknown names fall back to `hex` and
// `euclidean` through the lenient `lookup` constructors; the strict
// `FromStr` implementations are there for callers that want validation.

pub mod color;
pub mod distance;
pub mod error;
pub mod format;

pub use color::{Color, Rgb};
pub use distance::{Metric, metric};
pub use error::{Error, Result};
pub use format::ColorFormat;
