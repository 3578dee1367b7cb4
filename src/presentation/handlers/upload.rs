use std::time::Duration;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{ContentAnalyzer, FileLoader};
use crate::application::services::{IntakeError, IntakeReport};
use crate::domain::{AnalysisResult, MAX_UPLOAD_BYTES, UploadedFile};
use crate::presentation::state::AppState;

use super::error_message::{status_for, user_message};

pub const FILE_FIELD: &str = "file";
pub const SUPPORTED_FORMATS: [&str; 6] = ["PDF", "PNG", "JPG", "JPEG", "TIFF", "BMP"];
pub const MAX_FILE_SIZE_LABEL: &str = "10MB";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file: FileMetadata,
    pub extracted_text: String,
    pub analysis: AnalysisResult,
    pub text_length: usize,
}

#[derive(Serialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}

impl From<IntakeReport> for UploadResponse {
    fn from(report: IntakeReport) -> Self {
        Self {
            success: true,
            extracted_text: report.text.preview(),
            text_length: report.text.char_len(),
            file: FileMetadata {
                name: report.document.filename,
                mime_type: report.document.declared_mime,
                size: report.document.size_bytes,
            },
            analysis: report.analysis,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInfoResponse {
    pub message: &'static str,
    pub endpoints: UploadEndpoints,
    pub supported_formats: [&'static str; 6],
    pub max_file_size: &'static str,
}

#[derive(Serialize)]
pub struct UploadEndpoints {
    #[serde(rename = "POST")]
    pub post: &'static str,
    #[serde(rename = "GET")]
    pub get: &'static str,
}

/// `POST /upload`: validate, extract, analyze, answer with one JSON envelope.
///
/// The whole exchange, body read included, runs under the configured request
/// timeout so an expiry still produces the JSON error envelope.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, A>(
    State(state): State<AppState<F, A>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    A: ContentAnalyzer + ?Sized + 'static,
{
    let timeout_secs = state.settings.server.request_timeout_secs;

    match tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        handle_upload(&state, multipart),
    )
    .await
    {
        Ok(Ok(report)) => (StatusCode::OK, Json(UploadResponse::from(report))).into_response(),
        Ok(Err(e)) => error_response(e),
        Err(_) => error_response(IntakeError::Internal(format!(
            "upload timed out after {timeout_secs}s"
        ))),
    }
}

async fn handle_upload<F, A>(
    state: &AppState<F, A>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<IntakeReport, IntakeError>
where
    F: FileLoader + ?Sized,
    A: ContentAnalyzer + ?Sized,
{
    let upload = match multipart {
        Ok(mut multipart) => read_upload(&mut multipart).await?,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not a multipart form");
            None
        }
    };

    state.intake_service.process(upload).await
}

/// `GET /upload`: static description of the endpoint.
pub async fn upload_info_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(UploadInfoResponse {
            message: "Upload a PDF or image to extract its text and analyze its social media engagement potential",
            endpoints: UploadEndpoints {
                post: "Upload a file (multipart field 'file') for text extraction and analysis",
                get: "Describe this endpoint and its limits",
            },
            supported_formats: SUPPORTED_FORMATS,
            max_file_size: MAX_FILE_SIZE_LABEL,
        }),
    )
}

/// Finds the `file` field; other fields are skipped. A form without one is
/// `Ok(None)`, which validation reports as a missing file.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<UploadedFile>, IntakeError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(body_read_error(e)),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let declared_mime = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(filename = %filename, content_type = %declared_mime, "Processing file upload");

        let data = field.bytes().await.map_err(body_read_error)?;

        return Ok(Some(UploadedFile::new(filename, declared_mime, data.to_vec())));
    }
}

fn body_read_error(error: axum::extract::multipart::MultipartError) -> IntakeError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return IntakeError::FileTooLarge {
            size_bytes: MAX_UPLOAD_BYTES + 1,
            limit_bytes: MAX_UPLOAD_BYTES,
        };
    }
    IntakeError::Internal(format!("failed to read multipart body: {}", error.body_text()))
}

fn error_response(error: IntakeError) -> Response {
    let status = status_for(&error);

    if status.is_server_error() {
        tracing::error!(kind = error.kind(), error = %error, "Upload failed");
    } else {
        tracing::warn!(kind = error.kind(), error = %error, "Upload rejected");
    }

    (
        status,
        Json(ErrorResponse {
            success: false,
            error: user_message(&error).to_string(),
        }),
    )
        .into_response()
}
