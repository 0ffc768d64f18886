//! Upload-analyze-display state machine.
//!
//! The controller owns the current selection, the last result and the id of
//! the one outstanding request. Front ends forward user events to it and hand
//! the [`AnalysisRequest`] it issues to a [`Classifier`](crate::client::Classifier),
//! then report the outcome back through [`UploadAnalyzeController::complete`].

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{Result, ScanError};
use crate::media::{PickedFile, SelectedImage, SelectionId};
use crate::response::AnalysisResult;

/// Controller state, derived from what is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NoImage,
    ImageSelected,
    Analyzing,
    ResultShown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImage => write!(f, "No image"),
            Self::ImageSelected => write!(f, "Image selected"),
            Self::Analyzing => write!(f, "Analyzing"),
            Self::ResultShown => write!(f, "Result shown"),
        }
    }
}

/// What the result area displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiState {
    Empty,
    Loading,
    Result,
}

/// One outbound classification request, tagged with the selection it was
/// issued for.
#[derive(Clone, Debug)]
pub struct AnalysisRequest {
    pub image: SelectedImage,
}

impl AnalysisRequest {
    pub fn selection(&self) -> SelectionId {
        self.image.id()
    }
}

/// How a reported outcome was applied.
#[derive(Debug)]
pub enum Completion {
    /// The result is now displayed.
    Shown,
    /// The request failed; the selection is kept and the user should be told.
    Failed(ScanError),
    /// The selection changed while the request was in flight; outcome dropped.
    Stale,
    /// No outstanding request matches; outcome dropped.
    Ignored,
}

#[derive(Default)]
pub struct UploadAnalyzeController {
    selected: Option<SelectedImage>,
    result: Option<AnalysisResult>,
    pending: Option<SelectionId>,
    next_id: u64,
}

impl UploadAnalyzeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected, &self.result) {
            (Some(image), _) if self.pending == Some(image.id()) => Phase::Analyzing,
            (Some(_), Some(_)) => Phase::ResultShown,
            (Some(_), None) => Phase::ImageSelected,
            (None, _) => Phase::NoImage,
        }
    }

    pub fn ui_state(&self) -> UiState {
        match self.phase() {
            Phase::Analyzing => UiState::Loading,
            Phase::ResultShown => UiState::Result,
            Phase::NoImage | Phase::ImageSelected => UiState::Empty,
        }
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// True while a request is outstanding, even one for a replaced selection.
    pub fn is_request_outstanding(&self) -> bool {
        self.pending.is_some()
    }

    /// The analyze trigger is enabled only with an image and no request in
    /// flight. This is the only guard against concurrent requests.
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && self.pending.is_none()
    }

    pub fn can_remove(&self) -> bool {
        matches!(self.phase(), Phase::ImageSelected | Phase::ResultShown)
    }

    /// Make `file` the current selection. A non-image file is rejected with
    /// [`ScanError::InvalidFileType`] and leaves everything as it was.
    pub fn select_file(&mut self, file: PickedFile) -> Result<SelectionId> {
        let id = SelectionId(self.next_id + 1);
        let image = SelectedImage::accept(id, file)?;
        self.next_id = id.0;

        if self.pending.is_some() {
            debug!(selection = %id, "Selection replaced while a request is outstanding");
        }
        info!(
            selection = %id,
            name = image.name(),
            media_type = image.media_type(),
            bytes = image.len(),
            "Image selected"
        );

        self.selected = Some(image);
        self.result = None;
        Ok(id)
    }

    /// Clear the selection and any result. Returns `false` when removal is
    /// not allowed in the current phase.
    pub fn remove_image(&mut self) -> bool {
        if !self.can_remove() {
            debug!(phase = %self.phase(), "Remove ignored");
            return false;
        }
        self.selected = None;
        self.result = None;
        debug!("Image removed");
        true
    }

    /// Start analysis of the current selection. Returns the request to send,
    /// or `None` when analysis is not possible right now.
    pub fn analyze(&mut self) -> Option<AnalysisRequest> {
        if !self.can_analyze() {
            debug!(phase = %self.phase(), "Analyze ignored");
            return None;
        }
        let image = self.selected.clone()?;
        self.result = None;
        self.pending = Some(image.id());
        debug!(selection = %image.id(), "Analysis started");
        Some(AnalysisRequest { image })
    }

    /// Apply the outcome of the request issued for `selection`.
    pub fn complete(
        &mut self,
        selection: SelectionId,
        outcome: Result<AnalysisResult>,
    ) -> Completion {
        if self.pending != Some(selection) {
            debug!(selection = %selection, "No outstanding request for this selection");
            return Completion::Ignored;
        }
        self.pending = None;

        if self.selected.as_ref().map(SelectedImage::id) != Some(selection) {
            debug!(selection = %selection, "Discarding response for a replaced selection");
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                info!(
                    selection = %selection,
                    category = %result.category,
                    confidence = result.confidence,
                    "Analysis complete"
                );
                self.result = Some(result);
                Completion::Shown
            }
            Err(err) => {
                match &err {
                    ScanError::ServiceError { status, body } => warn!(
                        selection = %selection,
                        kind = err.kind(),
                        status,
                        body = body.as_str(),
                        "Analysis failed"
                    ),
                    _ => warn!(
                        selection = %selection,
                        kind = err.kind(),
                        error = %err,
                        "Analysis failed"
                    ),
                }
                self.result = None;
                Completion::Failed(err)
            }
        }
    }
}
