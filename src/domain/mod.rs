mod analysis;
mod document;
mod extracted_text;
mod uploaded_file;

pub use analysis::{
    AnalysisResult, FALLBACK_SCORE, FALLBACK_SUGGESTIONS, FALLBACK_TOPICS, MAX_SCORE, Sentiment,
};
pub use document::{ContentType, Document, DocumentId, ExtractionStrategy, MAX_UPLOAD_BYTES};
pub use extracted_text::{
    ExtractedText, MIN_READABLE_CHARS, PREVIEW_CHARS, PROMPT_CHARS, TRUNCATION_MARKER,
};
pub use uploaded_file::UploadedFile;
