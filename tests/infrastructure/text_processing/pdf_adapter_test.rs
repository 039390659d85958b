use elemnote::application::ports::{FileLoader, FileLoaderError};
use elemnote::domain::{Document, DocumentFormat};
use elemnote::infrastructure::text_processing::PdfAdapter;

use crate::helpers::test_pdf::{single_page_pdf, text_content};

fn pdf_document(size: usize) -> Document {
    Document::new("lecture.pdf".to_string(), DocumentFormat::Pdf, size as u64)
}

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_text() {
    let pdf_bytes = single_page_pdf(&text_content("Photosynthesis converts light"));

    let text = PdfAdapter::new()
        .extract_text(&pdf_bytes, &pdf_document(pdf_bytes.len()))
        .await
        .unwrap();

    assert_eq!(text.trim(), "Photosynthesis converts light");
}

#[tokio::test]
async fn given_pdf_with_blank_page_when_extracting_then_returns_no_text_found() {
    let pdf_bytes = single_page_pdf("");

    let result = PdfAdapter::new()
        .extract_text(&pdf_bytes, &pdf_document(pdf_bytes.len()))
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let result = PdfAdapter::new()
        .extract_text(b"this is not a pdf", &pdf_document(17))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_document_when_extracting_with_pdf_adapter_then_returns_unsupported() {
    let doc = Document::new("notes.txt".to_string(), DocumentFormat::Text, 0);

    let result = PdfAdapter::new().extract_text(b"hello", &doc).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
