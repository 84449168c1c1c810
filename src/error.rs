//! Error taxonomy for ads and campaigns

use thiserror::Error;

use crate::formats::AdFormat;

pub type AdResult<T> = Result<T, AdError>;

#[derive(Debug, Error)]
pub enum AdError {
    #[error("Subtype '{subtype}' is not permitted for the {format} format")]
    InvalidSubtype { format: AdFormat, subtype: String },

    #[error("Campaign name is {length} characters long, maximum is {max}")]
    NameLengthExceeded { length: usize, max: usize },

    #[error("Unknown ad type: '{0}'")]
    UnknownAdType(String),

    #[error("No ad at index {index}, campaign has {len}")]
    AdIndexOutOfRange { index: usize, len: usize },

    #[error("{format} {operation} is not implemented yet")]
    NotImplemented {
        operation: &'static str,
        format: AdFormat,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdError {
    /// Rule violations, as opposed to malformed input or IO failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSubtype { .. } | Self::NameLengthExceeded { .. } | Self::UnknownAdType(_)
        )
    }
}
