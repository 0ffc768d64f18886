use safescan_core::config::ClientConfig;
use safescan_core::controller::AnalysisRequest;
use safescan_core::error::ScanError;
use safescan_core::media::{PickedFile, SelectionId};
use safescan_core::response::AnalysisResult;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Send the selected image to the classification service.
    Classify { request: AnalysisRequest },

    /// Rebuild the HTTP client with new settings.
    Configure { config: ClientConfig },
}

/// Results sent from worker (or dialog) threads back to UI thread.
pub enum WorkerResult {
    /// The request issued for `selection` resolved.
    AnalysisComplete {
        selection: SelectionId,
        outcome: Result<AnalysisResult, ScanError>,
    },

    /// A file was chosen in the browse dialog and read from disk.
    FilePicked { file: PickedFile },

    ConfigImported { config: ClientConfig },

    Error { message: String },

    Log { message: String },
}
