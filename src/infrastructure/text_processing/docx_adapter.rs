use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the main WordprocessingML part of a DOCX package and joins its
/// paragraphs one per line.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX package: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    pub(crate) fn paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_paragraph = false;
        let mut in_text_run = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "malformed document XML at {}: {e}",
                    reader.buffer_position()
                ))
            })?;

            match event {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"p" => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"t" => in_text_run = true,
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    _ => {}
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"p" => paragraphs.push(String::new()),
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    _ => {}
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"p" if in_paragraph => {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                    b"t" => in_text_run = false,
                    _ => {}
                },
                Event::Text(t) if in_text_run => {
                    let raw = std::str::from_utf8(&t).map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!("invalid UTF-8 in text run: {e}"))
                    })?;
                    current.push_str(&unescape(raw)?);
                }
                Event::GeneralRef(r) if in_text_run => {
                    let name = std::str::from_utf8(&r).map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!("invalid entity reference: {e}"))
                    })?;
                    current.push_str(&unescape(&format!("&{name};"))?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

fn unescape(raw: &str) -> Result<String, FileLoaderError> {
    quick_xml::escape::unescape(raw)
        .map(|s| s.into_owned())
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("bad XML escape: {e}")))
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_mime().to_string(),
            ));
        }

        let xml = Self::read_document_part(data)?;
        let paragraphs = Self::paragraphs(&xml)?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        let text = paragraphs.join("\n");
        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
