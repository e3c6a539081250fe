// SPDX-License-Identifier: MIT
//
// Error type shared by retint-color and retint-theme.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Literal text does not have the shape the format's parser expects.
    #[error("invalid {format} color {literal:?}: {reason}")]
    Parse {
        format: &'static str,
        literal: String,
        reason: &'static str,
    },

    /// Nearest-color search was given no candidates.
    #[error("cannot search an empty palette")]
    EmptyPalette,

    /// The combined literal pattern failed to compile.
    #[error("cannot build literal pattern: {0}")]
    Pattern(String),

    #[error("unknown color format {0:?}")]
    UnknownFormat(String),

    #[error("unknown distance metric {0:?}")]
    UnknownMetric(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(format: &'static str, literal: &str, reason: &'static str) -> Self {
        Self::Parse {
            format,
            literal: literal.to_owned(),
            reason,
        }
    }
}
