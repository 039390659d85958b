use std::sync::Arc;

use elemnote::application::ports::{FileLoader, FileLoaderError};
use elemnote::domain::{Document, DocumentFormat};
use elemnote::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[tokio::test]
async fn given_text_document_when_using_default_adapters_then_routes_to_plain_text() {
    let loader = CompositeFileLoader::with_default_adapters();
    let doc = Document::new("notes.txt".to_string(), DocumentFormat::Text, 5);

    let text = loader.extract_text(b"hello", &doc).await.unwrap();

    assert_eq!(text, "hello");
}

#[tokio::test]
async fn given_docx_document_when_using_default_adapters_then_routes_to_docx() {
    let loader = CompositeFileLoader::with_default_adapters();
    let doc = Document::new("essay.docx".to_string(), DocumentFormat::Docx, 5);

    let result = loader.extract_text(b"hello", &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_format_without_adapter_when_extracting_then_returns_unsupported() {
    let loader = CompositeFileLoader::new(vec![(
        DocumentFormat::Text,
        Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
    )]);
    let doc = Document::new("slides.pdf".to_string(), DocumentFormat::Pdf, 5);

    let result = loader.extract_text(b"%PDF", &doc).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
