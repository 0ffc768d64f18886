/// Hosted inference endpoint used when no config overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://n4xtan-nsfw-classification.hf.space/predict";

/// Name of the multipart form field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Media type prefix every accepted selection must carry.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type reported for files whose type cannot be determined.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Delay before score bars are widened to their final size, so the
/// transition is visible.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 50;

/// Message shown to the user when any analysis request fails.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Analysis failed. Please check your internet connection or try again later.";

/// Message shown to the user when a non-image file is selected.
pub const INVALID_FILE_MESSAGE: &str = "Please upload an image file.";
