use reqwest::blocking::multipart::{Form, Part};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::consts::IMAGE_FIELD;
use crate::error::{Result, ScanError};
use crate::media::SelectedImage;
use crate::response::AnalysisResult;

/// Anything able to turn an image into an [`AnalysisResult`].
///
/// Implementations block until the outcome is known. Front ends call this
/// from a worker thread so the UI stays responsive.
pub trait Classifier: Send {
    fn classify(&self, image: &SelectedImage) -> Result<AnalysisResult>;
}

/// Classifier backed by the hosted inference service.
pub struct HttpClassifier {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScanError::NetworkFailure(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, image: &SelectedImage) -> Result<AnalysisResult> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.media_type())
            .map_err(|e| ScanError::NetworkFailure(format!("Failed to build request: {e}")))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        info!(
            selection = %image.id(),
            bytes = image.len(),
            endpoint = %self.endpoint,
            "Submitting image for classification"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| ScanError::NetworkFailure(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ScanError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .map_err(|e| ScanError::NetworkFailure(e.without_url().to_string()))?;
        debug!(len = body.len(), "Received classification response");

        AnalysisResult::from_json(&body)
    }
}
