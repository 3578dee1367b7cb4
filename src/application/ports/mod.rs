mod content_analyzer;
mod file_loader;
mod llm_client;

pub use content_analyzer::{AnalysisError, ContentAnalyzer};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
