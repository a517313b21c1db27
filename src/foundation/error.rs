/// Convenience result type used across mipchain.
pub type MipResult<T> = Result<T, MipError>;

/// Image axis a bilinear tap was taken along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleAxis {
    /// Horizontal (column) axis.
    X,
    /// Vertical (row) axis.
    Y,
}

impl std::fmt::Display for SampleAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Top-level error taxonomy used by mip generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum MipError {
    /// Zero-sized extent or a pixel buffer whose length is not `width * height * 4`.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A bilinear tap landed outside the source level under [`EdgePolicy::Strict`].
    ///
    /// [`EdgePolicy::Strict`]: crate::EdgePolicy::Strict
    #[error("out-of-bounds sample: {axis} tap {coord} outside 0..{extent}")]
    OutOfBoundsSample {
        /// Axis of the offending tap.
        axis: SampleAxis,
        /// Source texel coordinate that was requested.
        coord: i64,
        /// Source extent along `axis`.
        extent: u32,
    },

    /// Invalid user-provided options, chains or layer sets.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options and manifests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MipError {
    /// Build a [`MipError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`MipError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MipError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
