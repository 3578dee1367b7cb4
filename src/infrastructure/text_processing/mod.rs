mod composite_file_loader;
mod mock_file_loader;
mod pdf_adapter;
mod tesseract_ocr_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use mock_file_loader::{FailingFileLoader, MockFileLoader};
pub use pdf_adapter::{DEFAULT_EXTRACTION_TIMEOUT, PdfAdapter, join_page_items, join_pages};
pub use tesseract_ocr_adapter::{DEFAULT_OCR_LANGUAGE, DEFAULT_OCR_TIMEOUT, TesseractOcrAdapter};
