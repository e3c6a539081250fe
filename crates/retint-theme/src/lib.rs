//! # retint-theme — retarget a theme onto a fixed palette
//!
//! Rewrites every color literal in a piece of text to the nearest color of
//! a palette, leaving everything around the literals untouched.
//!
//! # Architecture
//!
//! ```text
//! palette text ──palette.rs──▶ Palette (hex, input order)
//!                                  │
//! theme text ──format pattern──▶ distinct literals
//!                                  │
//!                                  ▼
//!                  palette.rs: nearest(literal) per distinct literal
//!                                  │
//!                                  ▼
//!                  convert.rs: literal → rendered replacement table
//!                                  │
//!                                  ▼
//!                  one alternation pass over the theme text
//! ```
//!
//! Format and metric are resolved once, up front, into
//! [`ColorFormat`] and [`Metric`]; [`convert_named`] is the lenient
//! string-keyed entry point for callers holding raw names.

pub mod convert;
pub mod palette;

pub use convert::{Options, convert, convert_named, replacements};
pub use palette::{Palette, nearest};

pub use retint_color::{Color, ColorFormat, Error, Metric, Result};
