use axum::http::StatusCode;

use crate::application::services::IntakeError;

pub const MISSING_FILE_MESSAGE: &str = "No file uploaded";
pub const UNSUPPORTED_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload PDF or image files (PNG, JPG, JPEG, TIFF, BMP).";
pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large. Please upload files smaller than 10MB.";
pub const PDF_EXTRACTION_MESSAGE: &str =
    "Failed to extract text from PDF. The file may be corrupted or password-protected.";
pub const OCR_EXTRACTION_MESSAGE: &str =
    "Failed to extract text from image. Please ensure the image is clear and readable.";
pub const NO_READABLE_TEXT_MESSAGE: &str =
    "No readable text found in the file. Please upload a file with clear text content.";

pub const INTERNAL_PDF_MESSAGE: &str = "Failed to process PDF file. Please ensure it's a valid PDF.";
pub const INTERNAL_IMAGE_MESSAGE: &str = "Failed to process image. Please try a clearer image.";
pub const INTERNAL_AI_MESSAGE: &str =
    "AI analysis service is temporarily unavailable. Please try again later.";
pub const INTERNAL_STORAGE_MESSAGE: &str = "Server storage is full. Please try again later.";
pub const INTERNAL_TIMEOUT_MESSAGE: &str =
    "Request timed out. Please try again with a smaller file.";
pub const INTERNAL_GENERIC_MESSAGE: &str =
    "An unexpected error occurred while processing your file. Please try again.";

// First match wins.
const INTERNAL_CLASSES: [(&[&str], &str); 5] = [
    (&["pdf"], INTERNAL_PDF_MESSAGE),
    (&["image", "ocr", "tesseract"], INTERNAL_IMAGE_MESSAGE),
    (&["openai", "api key", "completion"], INTERNAL_AI_MESSAGE),
    (&["no space", "enospc", "storage"], INTERNAL_STORAGE_MESSAGE),
    (&["timeout", "timed out"], INTERNAL_TIMEOUT_MESSAGE),
];

pub fn status_for(error: &IntakeError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn user_message(error: &IntakeError) -> &'static str {
    match error {
        IntakeError::MissingFile => MISSING_FILE_MESSAGE,
        IntakeError::UnsupportedType(_) => UNSUPPORTED_TYPE_MESSAGE,
        IntakeError::FileTooLarge { .. } => FILE_TOO_LARGE_MESSAGE,
        IntakeError::PdfExtraction(_) => PDF_EXTRACTION_MESSAGE,
        IntakeError::OcrExtraction(_) => OCR_EXTRACTION_MESSAGE,
        IntakeError::NoReadableText { .. } => NO_READABLE_TEXT_MESSAGE,
        IntakeError::Internal(detail) => classify_internal_error(detail),
    }
}

/// Picks a canned sentence for an unexpected failure by looking at its text.
pub fn classify_internal_error(detail: &str) -> &'static str {
    let lowered = detail.to_lowercase();

    INTERNAL_CLASSES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, message)| *message)
        .unwrap_or(INTERNAL_GENERIC_MESSAGE)
}
