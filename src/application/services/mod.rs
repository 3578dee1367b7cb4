mod intake_error;
mod intake_service;
mod llm_content_analyzer;

pub use intake_error::IntakeError;
pub use intake_service::{IntakeReport, IntakeService, validate_upload};
pub use llm_content_analyzer::{ANALYSIS_INSTRUCTION, LlmContentAnalyzer, parse_analysis};
