use thiserror::Error;

use crate::{IdentifierError, SinkError};

/// Facade-level error: either a local validation failure raised before any
/// call crosses to the native layer, or a collaborator failure relayed
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TikTokBusinessError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl TikTokBusinessError {
    /// True when the native binding was unavailable, as opposed to a
    /// validation or delivery failure.
    pub fn is_not_linked(&self) -> bool {
        matches!(self, TikTokBusinessError::Sink(SinkError::NotLinked))
    }
}
