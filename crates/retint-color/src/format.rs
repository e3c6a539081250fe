// SPDX-License-Identifier: MIT
//
// Color formats — the grammars a color literal can be written in.
//
// A format bundles three things: a recognition pattern used to find
// literals inside arbitrary text, a parser from literal text to 8-bit
// channels, and a renderer back to text. Formats are not required to
// round-trip text exactly (`rgba_decimal` drops alpha and rounds), but
// they are self-consistent on channels:
//
//   parse(stringify(parse(x))) == parse(x)
//
// Supported grammars:
//
//   hex           #RRGGBB, digits case-insensitive, rendered uppercase
//   rgba_decimal  "R G B A" with each component a decimal in [0, 1],
//                 rendered as "R G B" (alpha is not reconstructed)

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;
use crate::error::{Error, Result};

const HEX: &str = "hex";
const RGBA_DECIMAL: &str = "rgba_decimal";

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("valid hex pattern"));

// One decimal token is a single digit with an optional fraction. Tokens are
// separated by any run of whitespace, line breaks included, the same split
// `parse` applies.
static RGBA_DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9](?:\.[0-9]+)?(?:\s+[0-9](?:\.[0-9]+)?){3}")
        .expect("valid rgba_decimal pattern")
});

// ─── ColorFormat ─────────────────────────────────────────────────────────────

/// A named color literal grammar.
///
/// # Examples
///
/// ```
/// use retint_color::ColorFormat;
///
/// let hex = ColorFormat::lookup("hex");
/// assert_eq!(hex.parse("#ff8000").unwrap(), (255, 128, 0));
/// assert_eq!(hex.stringify((255, 128, 0)), "#FF8000");
///
/// let rgba = ColorFormat::lookup("rgba_decimal");
/// assert_eq!(rgba.stringify((0, 0, 255)), "0 0 1");
///
/// // Unknown names fall back to hex.
/// assert_eq!(ColorFormat::lookup("hsl"), ColorFormat::Hex);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `#RRGGBB`.
    #[default]
    Hex,
    /// Four whitespace-separated decimals in `[0, 1]`; only RGB is used.
    RgbaDecimal,
}

impl ColorFormat {
    /// Every registered format, in registration order.
    pub const ALL: [Self; 2] = [Self::Hex, Self::RgbaDecimal];

    /// Resolve a format by name, falling back to [`ColorFormat::Hex`] for
    /// unknown or empty names.
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The registered name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => HEX,
            Self::RgbaDecimal => RGBA_DECIMAL,
        }
    }

    /// The pattern recognizing literals of this format inside larger text.
    #[must_use]
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::Hex => &HEX_PATTERN,
            Self::RgbaDecimal => &RGBA_DECIMAL_PATTERN,
        }
    }

    /// Every literal of this format in `text`, left to right, non-overlapping.
    pub fn literals(self, text: &str) -> impl Iterator<Item = &str> {
        self.pattern().find_iter(text).map(|found| found.as_str())
    }

    /// Parse literal text into 8-bit channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `text` does not have this format's shape.
    pub fn parse(self, text: &str) -> Result<Rgb> {
        match self {
            Self::Hex => parse_hex(text),
            Self::RgbaDecimal => parse_rgba_decimal(text),
        }
    }

    /// Render 8-bit channels as literal text.
    #[must_use]
    pub fn stringify(self, (r, g, b): Rgb) -> String {
        match self {
            Self::Hex => format!("#{r:02X}{g:02X}{b:02X}"),
            Self::RgbaDecimal => format!(
                "{} {} {}",
                to_unit(r),
                to_unit(g),
                to_unit(b)
            ),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_owned()))
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(text: &str) -> Result<Rgb> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| Error::parse(HEX, text, "missing leading '#'"))?;
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(Error::parse(HEX, text, "expected exactly 6 hex digits"));
    }

    let channel = |at: usize| {
        parse_hex_byte(bytes[at], bytes[at + 1])
            .ok_or_else(|| Error::parse(HEX, text, "non-hex digit"))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}

// ─── Decimal ─────────────────────────────────────────────────────────────────

fn parse_rgba_decimal(text: &str) -> Result<Rgb> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if !(3..=4).contains(&tokens.len()) {
        return Err(Error::parse(
            RGBA_DECIMAL,
            text,
            "expected 3 or 4 whitespace-separated components",
        ));
    }

    let mut channels = [0_u8; 3];
    for (index, token) in tokens.iter().enumerate() {
        let value = token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::parse(RGBA_DECIMAL, text, "component is not a decimal number"))?;
        // The alpha component is validated but otherwise ignored.
        if let Some(channel) = channels.get_mut(index) {
            *channel = to_u8(value);
        }
    }

    let [r, g, b] = channels;
    Ok((r, g, b))
}

/// Scale a unit value to 0–255, rounding half to even.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Scale an 8-bit channel to a unit value. `Display` on `f64` prints the
/// shortest decimal that round-trips, without trailing zeros.
#[inline]
fn to_unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

// ─── Tests ───────────────────────────────────────────────────────────────────
