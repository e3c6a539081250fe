// SPDX-License-Identifier: MIT
//
// A color literal: the text it was written as, plus its 8-bit channels.
//
// Identity is numeric. `#abcdef`, `#ABCDEF`, and the decimal literal that
// rounds to the same channels are all the same color as far as `==` and
// `Hash` are concerned; the original text is kept only so callers can see
// what was matched.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::format::ColorFormat;

/// 8-bit sRGB channels `(r, g, b)`.
pub type Rgb = (u8, u8, u8);

// ─── Color ───────────────────────────────────────────────────────────────────

/// A parsed color literal.
///
/// # Examples
///
/// ```
/// use retint_color::{Color, ColorFormat};
///
/// let blue = Color::new("#0000ff", ColorFormat::Hex).unwrap();
/// assert_eq!(blue.rgb(), (0, 0, 255));
///
/// // Render through any format, not only the one it was parsed with.
/// assert_eq!(blue.render(ColorFormat::Hex), "#0000FF");
/// assert_eq!(blue.render(ColorFormat::RgbaDecimal), "0 0 1");
///
/// // Equality ignores the original text.
/// let same = Color::new("0 0 1 0.5", ColorFormat::RgbaDecimal).unwrap();
/// assert_eq!(blue, same);
/// ```
#[derive(Debug, Clone)]
pub struct Color {
    text: String,
    rgb: Rgb,
}

impl Color {
    /// Parse `text` as a literal of `format`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] if `text` is not a valid literal of
    /// `format`.
    pub fn new(text: impl Into<String>, format: ColorFormat) -> Result<Self> {
        let text = text.into();
        let rgb = format.parse(&text)?;
        Ok(Self { text, rgb })
    }

    /// Parse `text` with the format registered as `format_name`, falling
    /// back to hex for unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] if `text` is not a valid literal of
    /// the resolved format.
    pub fn named(text: impl Into<String>, format_name: &str) -> Result<Self> {
        Self::new(text, ColorFormat::lookup(format_name))
    }

    /// The literal text this color was parsed from.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Render the channels as a literal of `format`.
    #[must_use]
    pub fn render(&self, format: ColorFormat) -> String {
        format.stringify(self.rgb)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
