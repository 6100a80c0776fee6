//! Warnings raised while resolving icons.
//!
//! None of these abort a build. The lookup warnings leave the single call
//! without a value; [`IconWarning::InvalidColor`] degrades to black and the
//! call still produces an image.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconWarning {
    /// The icon argument is not a usable identifier.
    #[error("icon {name:?} not found, the name is empty or misspelled")]
    Misspelled { name: String },

    /// No template is registered under this name.
    #[error("icon `{name}` does not exist")]
    NotFound { name: String },

    /// A color argument could not be understood.
    #[error("color value `{value}` is not valid, defaulting to black")]
    InvalidColor { value: String },
}

impl IconWarning {
    /// Returns true if the warning left the call without a value.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Misspelled { .. } | Self::NotFound { .. })
    }
}
