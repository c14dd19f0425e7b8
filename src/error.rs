//! Crate-level error types.

use std::fmt;

/// Errors produced by the camrig crate.
///
/// Contract breaches in controller wiring (hooks called before
/// `initialize`) are not represented here; they fail fast with an
/// assertion.
#[derive(Debug)]
pub enum CamrigError {
    /// `look_at` was given an eye position equal to the target.
    DegenerateLookAt,
    /// `look_at` was given an up vector parallel to the view direction.
    DegenerateUp,
    /// A rotation axis of zero length was supplied.
    DegenerateAxis,
    /// A vector argument contained NaN or infinite components.
    NonFinite(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CamrigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLookAt => {
                write!(f, "look_at: eye and center coincide")
            }
            Self::DegenerateUp => {
                write!(f, "look_at: up vector is parallel to view direction")
            }
            Self::DegenerateAxis => write!(f, "rotation axis has zero length"),
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CamrigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamrigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
