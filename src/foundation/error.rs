/// Convenience result type used across uiscale.
pub type UiScaleResult<T> = Result<T, UiScaleError>;

/// Error taxonomy for the tree boundary (loading, saving, node addressing).
///
/// Scaling itself never fails; these only surface from [`crate::UiTree`] helpers and
/// [`crate::TreeScaler::scale_subtree`].
#[derive(thiserror::Error, Debug)]
pub enum UiScaleError {
    /// Invalid caller-provided data (unknown node index, oversized tree, unreadable file).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing tree JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UiScaleError {
    /// Build a [`UiScaleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UiScaleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for UiScaleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
