use content_insight::application::ports::{FileLoader, FileLoaderError};
use content_insight::domain::{ContentType, Document};
use content_insight::infrastructure::text_processing::{PdfAdapter, join_page_items, join_pages};

fn document(filename: &str, content_type: ContentType, size: usize) -> Document {
    Document::new(
        filename.to_string(),
        content_type,
        content_type.as_mime().to_string(),
        size as u64,
    )
}

#[tokio::test]
async fn given_one_page_pdf_when_extracting_then_returns_page_text() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../../fixtures/hello_world.pdf");
    let doc = document("hello.pdf", ContentType::Pdf, pdf_bytes.len());

    let text = adapter.extract_text(pdf_bytes, &doc).await.unwrap();

    assert_eq!(text, "Hello world");
}

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_pages_are_newline_separated_in_order() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../../fixtures/two_pages.pdf");
    let doc = document("two.pdf", ContentType::Pdf, pdf_bytes.len());

    let text = adapter.extract_text(pdf_bytes, &doc).await.unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines, vec!["First page text", "Second page text"]);
}

#[tokio::test]
async fn given_page_without_text_when_extracting_then_returns_empty_string() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../../fixtures/blank_page.pdf");
    let doc = document("blank.pdf", ContentType::Pdf, pdf_bytes.len());

    let text = adapter.extract_text(pdf_bytes, &doc).await.unwrap();

    assert!(text.is_empty());
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let doc = document("corrupt.pdf", ContentType::Pdf, garbage.len());

    let result = adapter.extract_text(garbage, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_docx_declared_as_pdf_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let docx = include_bytes!("../../../fixtures/not_a_pdf.docx");
    let doc = document("report.docx", ContentType::Pdf, docx.len());

    let result = adapter.extract_text(docx, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_image_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"\x89PNG";
    let doc = document("scan.png", ContentType::Png, data.len());

    let result = adapter.extract_text(data, &doc).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[test]
fn given_scattered_items_when_joining_page_then_single_spaces_remain() {
    assert_eq!(
        join_page_items("  Quarterly\n  results \t are   in  "),
        "Quarterly results are in"
    );
}

#[test]
fn given_pages_with_blank_edges_when_joining_then_whole_text_is_trimmed() {
    let pages = ["", "Body text", "Closing", ""];
    assert_eq!(join_pages(&pages), "Body text\nClosing");
}
