use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Treats the upload bytes as the extracted text.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}

/// Fails every extraction with the given message.
pub struct FailingFileLoader(pub String);

#[async_trait::async_trait]
impl FileLoader for FailingFileLoader {
    async fn extract_text(&self, _data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed(self.0.clone()))
    }
}
