/// Raw multipart upload before validation.
///
/// Nothing here is trusted: the MIME type is whatever the client declared and
/// the size is only checked by `validate_upload`.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    /// `Content-Type` of the form part, `application/octet-stream` when absent.
    pub declared_mime: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, declared_mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            declared_mime: declared_mime.into(),
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
