/// Convenience result type used across flexlay.
pub type FlexResult<T> = Result<T, FlexError>;

/// Error taxonomy for the fallible surfaces around the layout core.
///
/// Laying out a tree never fails; these errors come from reading tree descriptions and from
/// debug rendering.
#[derive(thiserror::Error, Debug)]
pub enum FlexError {
    /// Invalid user-provided tree description data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing tree descriptions or layouts.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while producing debug SVG or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlexError {
    /// Build a [`FlexError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlexError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FlexError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
