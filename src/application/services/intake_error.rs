use crate::application::ports::FileLoaderError;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("no file uploaded")]
    MissingFile,
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("file too large: {size_bytes} bytes exceeds {limit_bytes}")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("pdf extraction: {0}")]
    PdfExtraction(#[source] FileLoaderError),
    #[error("ocr extraction: {0}")]
    OcrExtraction(#[source] FileLoaderError),
    #[error("no readable text ({char_count} chars)")]
    NoReadableText { char_count: usize },
    #[error("internal: {0}")]
    Internal(String),
}

impl IntakeError {
    /// Stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile => "missing_file",
            Self::UnsupportedType(_) => "unsupported_type",
            Self::FileTooLarge { .. } => "file_too_large",
            Self::PdfExtraction(_) => "pdf_extraction",
            Self::OcrExtraction(_) => "ocr_extraction",
            Self::NoReadableText { .. } => "no_readable_text",
            Self::Internal(_) => "internal",
        }
    }

    /// Validation and extraction failures are the client's problem; everything else is ours.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
