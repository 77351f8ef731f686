use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Invalid {shape} parameter: {reason}")]
    InvalidParameter { shape: &'static str, reason: String },

    #[error("Invalid vertex list: {0}")]
    InvalidVertices(String),

    #[error("Invalid region configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown region type: {0}")]
    UnknownType(String),

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegionError {
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            shape,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegionError>;
