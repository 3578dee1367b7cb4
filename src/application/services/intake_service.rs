use std::sync::Arc;

use crate::application::ports::{ContentAnalyzer, FileLoader};
use crate::domain::{
    AnalysisResult, ContentType, Document, ExtractedText, ExtractionStrategy, MAX_UPLOAD_BYTES,
    UploadedFile,
};

use super::intake_error::IntakeError;

/// Everything produced by one successful pass through the pipeline.
#[derive(Debug, Clone)]
pub struct IntakeReport {
    pub document: Document,
    pub text: ExtractedText,
    pub analysis: AnalysisResult,
}

/// Checks presence, then type, then size. The order is observable through the error.
pub fn validate_upload(upload: Option<&UploadedFile>) -> Result<Document, IntakeError> {
    let upload = upload.ok_or(IntakeError::MissingFile)?;

    let content_type = ContentType::from_mime(&upload.declared_mime)
        .ok_or_else(|| IntakeError::UnsupportedType(upload.declared_mime.clone()))?;

    let size_bytes = upload.size_bytes();
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(IntakeError::FileTooLarge {
            size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    Ok(Document::new(
        upload.filename.clone(),
        content_type,
        upload.declared_mime.clone(),
        size_bytes,
    ))
}

pub struct IntakeService<F, A>
where
    F: FileLoader + ?Sized,
    A: ContentAnalyzer + ?Sized,
{
    file_loader: Arc<F>,
    analyzer: Arc<A>,
}

impl<F, A> IntakeService<F, A>
where
    F: FileLoader + ?Sized,
    A: ContentAnalyzer + ?Sized,
{
    pub fn new(file_loader: Arc<F>, analyzer: Arc<A>) -> Self {
        Self {
            file_loader,
            analyzer,
        }
    }

    #[tracing::instrument(
        skip(self, data, document),
        fields(
            document_id = %document.id.as_uuid(),
            strategy = document.strategy().as_str(),
        )
    )]
    pub async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, IntakeError> {
        let raw = self
            .file_loader
            .extract_text(data, document)
            .await
            .map_err(|e| match document.strategy() {
                ExtractionStrategy::Pdf => IntakeError::PdfExtraction(e),
                ExtractionStrategy::Ocr => IntakeError::OcrExtraction(e),
            })?;

        let text = ExtractedText::new(&raw);
        if !text.is_readable() {
            return Err(IntakeError::NoReadableText {
                char_count: text.char_len(),
            });
        }

        tracing::debug!(chars = text.char_len(), "Text extracted");
        Ok(text)
    }

    /// Never fails: any analyzer error is replaced by the fallback analysis here.
    pub async fn analyze(&self, text: &ExtractedText) -> AnalysisResult {
        match self.analyzer.analyze(text.prompt_excerpt()).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "Content analysis unavailable, using fallback");
                AnalysisResult::fallback()
            }
        }
    }

    #[tracing::instrument(skip(self, upload))]
    pub async fn process(&self, upload: Option<UploadedFile>) -> Result<IntakeReport, IntakeError> {
        let document = validate_upload(upload.as_ref())?;
        let data = upload.map(|u| u.data).unwrap_or_default();

        tracing::info!(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            content_type = document.content_type.as_mime(),
            size_bytes = document.size_bytes,
            "Upload validated"
        );

        let text = self.extract(&data, &document).await?;
        let analysis = self.analyze(&text).await;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            text_length = text.char_len(),
            engagement_score = analysis.engagement_score,
            sentiment = analysis.sentiment.as_str(),
            "Upload analyzed"
        );

        Ok(IntakeReport {
            document,
            text,
            analysis,
        })
    }
}
