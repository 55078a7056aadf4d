// Event types for async communication

use crate::models::AnalysisResult;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Structured analysis returned by the service
    AnalysisComplete(AnalysisResult),
    /// Diagnostic detail of a failed analysis; logged, never rendered
    AnalysisFailed(String),
}
