use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not an image file (media type: {media_type})")]
    InvalidFileType { media_type: String },

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Service returned status {status}")]
    ServiceError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl ScanError {
    /// True for the failures an outbound classification request can end in.
    /// The UI treats all of them the same way.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure(_) | Self::ServiceError { .. } | Self::MalformedResponse(_)
        )
    }

    /// Short machine-friendly name of the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => "invalid_file_type",
            Self::NetworkFailure(_) => "network_failure",
            Self::ServiceError { .. } => "service_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Io(_) => "io",
            Self::Image(_) => "image",
            Self::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
