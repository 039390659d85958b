use elemnote::application::ports::{FileLoader, FileLoaderError};
use elemnote::domain::{Document, DocumentFormat};
use elemnote::infrastructure::text_processing::PlainTextAdapter;

fn text_document() -> Document {
    Document::new("notes.txt".to_string(), DocumentFormat::Text, 0)
}

#[tokio::test]
async fn given_utf8_text_when_extracting_then_returns_content_unchanged() {
    let content = "Line one\nLínea dos\n";

    let text = PlainTextAdapter
        .extract_text(content.as_bytes(), &text_document())
        .await
        .unwrap();

    assert_eq!(text, content);
}

#[tokio::test]
async fn given_whitespace_only_text_when_extracting_then_returns_no_text_found() {
    let result = PlainTextAdapter
        .extract_text(b"  \n\t ", &text_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_returns_extraction_failed() {
    let result = PlainTextAdapter
        .extract_text(&[0xC3, 0x28, 0xFF], &text_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_document_when_extracting_with_text_adapter_then_returns_unsupported() {
    let doc = Document::new("notes.pdf".to_string(), DocumentFormat::Pdf, 0);

    let result = PlainTextAdapter.extract_text(b"hello", &doc).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
