use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractionStrategy};

/// Routes each document to exactly one loader by its extraction strategy.
pub struct CompositeFileLoader {
    pdf: Arc<dyn FileLoader>,
    ocr: Arc<dyn FileLoader>,
}

impl CompositeFileLoader {
    pub fn new(pdf: Arc<dyn FileLoader>, ocr: Arc<dyn FileLoader>) -> Self {
        Self { pdf, ocr }
    }

    fn loader_for(&self, strategy: ExtractionStrategy) -> &Arc<dyn FileLoader> {
        match strategy {
            ExtractionStrategy::Pdf => &self.pdf,
            ExtractionStrategy::Ocr => &self.ocr,
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        self.loader_for(document.strategy())
            .extract_text(data, document)
            .await
    }
}
