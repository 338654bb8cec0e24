pub type FramecraftResult<T> = Result<T, FramecraftError>;

#[derive(thiserror::Error, Debug)]
pub enum FramecraftError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("standard frame not found: {0}")]
    FrameNotFound(String),

    #[error("image decode error: {0}")]
    ImageDecode(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramecraftError {
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn frame_not_found(msg: impl Into<String>) -> Self {
        Self::FrameNotFound(msg.into())
    }

    pub fn image_decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
