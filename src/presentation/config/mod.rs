mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ExtractionSettings, LlmSettings, LoggingSettings, OPENAI_API_KEY_VAR, OcrExtractionSettings,
    PdfExtractionSettings, ServerSettings, Settings,
};
