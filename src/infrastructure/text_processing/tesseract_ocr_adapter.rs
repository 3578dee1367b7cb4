use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractionStrategy};

pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const DEFAULT_OCR_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the `tesseract` executable over an image and reads the text from stdout.
pub struct TesseractOcrAdapter {
    binary: String,
    language: String,
    timeout: Duration,
}

impl TesseractOcrAdapter {
    pub fn new(binary: &str, language: &str, timeout: Duration) -> Self {
        Self {
            binary: binary.to_string(),
            language: language.to_string(),
            timeout,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for TesseractOcrAdapter {
    fn default() -> Self {
        Self::new("tesseract", DEFAULT_OCR_LANGUAGE, DEFAULT_OCR_TIMEOUT)
    }
}

#[async_trait]
impl FileLoader for TesseractOcrAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            language = %self.language,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.strategy() != ExtractionStrategy::Ocr {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let suffix = format!(".{}", document.content_type.extension());
        let mut temp_file = tempfile::Builder::new()
            .suffix(&suffix)
            .tempfile()
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.binary)
                .arg(temp_file.path())
                .arg("stdout")
                .arg("-l")
                .arg(&self.language)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| FileLoaderError::Timeout(self.timeout.as_secs()))?
        .map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("{} failed to start: {e}", self.binary))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FileLoaderError::ExtractionFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("OCR output is not UTF-8: {e}"))
        })?;

        tracing::info!(chars = text.trim().chars().count(), "OCR complete");

        Ok(text)
    }
}
