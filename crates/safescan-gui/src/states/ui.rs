use std::collections::VecDeque;

use safescan_core::consts::{ANALYSIS_FAILED_MESSAGE, INVALID_FILE_MESSAGE};

/// Oldest log lines are dropped past this count.
const MAX_LOG_LINES: usize = 500;

/// Alert shown in a modal window until dismissed.
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn invalid_file() -> Self {
        Self {
            title: "Unsupported file",
            message: INVALID_FILE_MESSAGE.to_string(),
        }
    }

    pub fn analysis_failed() -> Self {
        Self {
            title: "Analysis failed",
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Overall UI state that is not owned by the controller.
#[derive(Default)]
pub struct UIState {
    /// Log messages, most recent last.
    pub log_messages: VecDeque<String>,

    /// Pending alert, if any.
    pub notice: Option<Notice>,

    /// Files are being dragged over the window.
    pub drag_hover: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        if self.log_messages.len() == MAX_LOG_LINES {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(msg);
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
