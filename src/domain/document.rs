use uuid::Uuid;

/// Largest accepted upload, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated upload: the type is known and the size is within limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    /// The MIME type exactly as the client declared it.
    pub declared_mime: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(
        filename: String,
        content_type: ContentType,
        declared_mime: String,
        size_bytes: u64,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            declared_mime,
            size_bytes,
        }
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        self.content_type.strategy()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Png,
    Jpeg,
    Tiff,
    Bmp,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/tiff" => Some(Self::Tiff),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
        }
    }

    /// File suffix handed to external tools that sniff by extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Tiff => "tiff",
            Self::Bmp => "bmp",
        }
    }

    pub fn strategy(&self) -> ExtractionStrategy {
        match self {
            Self::Pdf => ExtractionStrategy::Pdf,
            Self::Png | Self::Jpeg | Self::Tiff | Self::Bmp => ExtractionStrategy::Ocr,
        }
    }
}

/// How text is recovered from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStrategy {
    Pdf,
    Ocr,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ocr => "ocr",
        }
    }
}
