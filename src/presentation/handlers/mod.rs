pub mod error_message;
mod health;
mod upload;

pub use health::health_handler;
pub use upload::{
    ErrorResponse, FILE_FIELD, FileMetadata, MAX_FILE_SIZE_LABEL, SUPPORTED_FORMATS,
    UploadInfoResponse, UploadResponse, upload_handler, upload_info_handler,
};
