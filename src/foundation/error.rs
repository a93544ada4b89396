/// Convenience result type used across framepost.
pub type FramepostResult<T> = Result<T, FramepostError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramepostError {
    /// Bad invocation: missing inputs, paths that are not what they claim to be.
    #[error("usage error: {0}")]
    Usage(String),

    /// Inputs that parsed but violate a contract (mixed resolutions, bad crop box).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rotation-curve files with no usable data or unscalable values.
    #[error("curve error: {0}")]
    Curve(String),

    /// Raster layouts the GeoTIFF tools do not support.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramepostError {
    /// Build a [`FramepostError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`FramepostError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramepostError::Curve`] value.
    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    /// Build a [`FramepostError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
