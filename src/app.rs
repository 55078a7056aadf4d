use crate::events::AppEvent;
use crate::models::AnalysisResult;

use chrono::{DateTime, Utc};
use tracing::error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some feedback to analyze.";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "An error occurred during analysis. Please check the console or try again.";

/// What the results pane is showing. Exactly one of these holds at a time;
/// starting a new analysis discards any prior Success or Error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

#[derive(Debug)]
pub struct App {
    pub state: UiState,
    pub feedback_input: String,
    pub scroll_offset: usize,
    pub show_help: bool,
    pub exit_pending: bool,
    pub should_quit: bool,
    pub model: String,
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl App {
    pub const fn new(model: String) -> Self {
        Self {
            state: UiState::Idle,
            feedback_input: String::new(),
            scroll_offset: 0,
            show_help: false,
            exit_pending: false,
            should_quit: false,
            model,
            analyzed_at: None,
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn is_loading(&self) -> bool {
        self.state == UiState::Loading
    }

    pub const fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub const fn scroll_to_bottom(&mut self) {
        // Clamped to the real maximum by the rendering code
        self.scroll_offset = usize::MAX;
    }

    pub fn push_input(&mut self, c: char) {
        self.feedback_input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.feedback_input.pop();
    }

    /// The analyze trigger. Validates locally, transitions to Loading, and
    /// returns the text to dispatch; `None` means no request should be made.
    ///
    /// A trigger while a request is already in flight is rejected outright:
    /// the UI offers no cancel affordance, so one analysis runs at a time.
    pub fn start_analysis(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        if self.feedback_input.trim().is_empty() {
            self.state = UiState::Error(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }

        // Discards any prior Success or Error
        self.state = UiState::Loading;
        self.scroll_offset = 0;
        Some(self.feedback_input.clone())
    }

    /// Applies the settlement of the in-flight request as a single state
    /// mutation. Settlement events arriving when nothing is in flight are
    /// dropped.
    pub fn finish_analysis(&mut self, event: AppEvent) {
        if !self.is_loading() {
            return;
        }

        match event {
            AppEvent::AnalysisComplete(result) => {
                self.analyzed_at = Some(Utc::now());
                self.state = UiState::Success(result);
            }
            AppEvent::AnalysisFailed(detail) => {
                // The cause never reaches the UI; it is only logged
                error!("analysis failed: {detail}");
                self.state = UiState::Error(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(String::new())
    }
}
