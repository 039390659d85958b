use std::io::{Cursor, Write};

use elemnote::application::ports::{FileLoader, FileLoaderError};
use elemnote::domain::{Document, DocumentFormat};
use elemnote::infrastructure::text_processing::DocxAdapter;

fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
}

fn docx_document() -> Document {
    Document::new("essay.docx".to_string(), DocumentFormat::Docx, 0)
}

#[tokio::test]
async fn given_docx_with_paragraphs_when_extracting_then_paragraphs_are_joined_by_newline() {
    let xml = document_xml(
        "<w:p><w:r><w:t>Introduction</w:t></w:r></w:p>\
         <w:p><w:r><w:t>Cells &lt;divide&gt;</w:t></w:r></w:p>",
    );
    let data = build_docx(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", &xml),
    ]);

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await
        .unwrap();

    assert_eq!(text, "Introduction\nCells <divide>");
}

#[tokio::test]
async fn given_docx_without_text_when_extracting_then_returns_no_text_found() {
    let xml = document_xml("<w:p/><w:p><w:r><w:t>   </w:t></w:r></w:p>");
    let data = build_docx(&[("word/document.xml", &xml)]);

    let result = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_zip_without_document_part_when_extracting_then_returns_extraction_failed() {
    let data = build_docx(&[("word/styles.xml", "<w:styles/>")]);

    let result = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_then_returns_extraction_failed() {
    let result = DocxAdapter::new()
        .extract_text(b"definitely not a zip", &docx_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
