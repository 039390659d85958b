use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    BlobStore, FileLoader, FileLoaderError, LlmClient, LlmClientError, SessionStore,
};
use crate::domain::{
    AudioArtifact, Document, DocumentFormat, DocumentId, DocumentSession, StoragePath,
};

use super::prompts::{ACKNOWLEDGEMENT_EXCERPT_CHARS, acknowledgement_prompt, query_prompt};
use super::speech_service::SpeechService;

/// Upload, tutoring and speech flow over the single document session.
pub struct StudyAssistantService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    speech_service: Arc<SpeechService>,
    session_store: Arc<dyn SessionStore>,
    blob_store: Arc<dyn BlobStore>,
}

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub document_id: DocumentId,
    pub ai_response: String,
    pub audio: AudioArtifact,
}

#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub ai_response: String,
    pub audio: AudioArtifact,
}

impl<F, L> StudyAssistantService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        speech_service: Arc<SpeechService>,
        session_store: Arc<dyn SessionStore>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            speech_service,
            session_store,
            blob_store,
        }
    }

    /// Extracts the document, makes it the current session and returns the
    /// model's spoken acknowledgement.
    ///
    /// The session is replaced as soon as extraction yields text. Uploads that
    /// fail before that point leave the previous session untouched.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn process_upload(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<UploadOutcome, StudyAssistantError> {
        if filename.trim().is_empty() {
            return Err(StudyAssistantError::EmptySelection);
        }

        let format = DocumentFormat::from_filename(filename)
            .ok_or_else(|| StudyAssistantError::UnsupportedFormat(filename.to_string()))?;

        let document = Document::new(filename.to_string(), format, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(&data, &document)
            .await
            .map_err(|e| match e {
                FileLoaderError::UnsupportedFormat(f) => StudyAssistantError::UnsupportedFormat(f),
                FileLoaderError::NoTextFound(f) => {
                    StudyAssistantError::EmptyOrUnextractableContent(f)
                }
                FileLoaderError::ExtractionFailed(msg) => {
                    StudyAssistantError::ExtractionFailed(msg)
                }
            })?;

        if text.trim().is_empty() {
            return Err(StudyAssistantError::EmptyOrUnextractableContent(
                document.filename.clone(),
            ));
        }

        tracing::info!(
            document_id = %document.id.as_uuid(),
            format = format.extension(),
            chars = text.chars().count(),
            "Document text extracted"
        );

        let document_id = document.id;
        let storage_path = self.persist_upload(&document, data).await;
        let session = DocumentSession::new(document, text, storage_path);
        let excerpt = session.excerpt(ACKNOWLEDGEMENT_EXCERPT_CHARS).to_string();

        if let Some(previous) = self.session_store.set_document(session) {
            self.discard_upload(&previous).await;
        }

        let ai_response = self
            .llm_client
            .generate(&acknowledgement_prompt(&excerpt))
            .await
            .map_err(StudyAssistantError::AiGenerationFailed)?;

        let audio = self.speak(&ai_response).await?;

        Ok(UploadOutcome {
            document_id,
            ai_response,
            audio,
        })
    }

    /// Answers a free-form request against the full text of the current
    /// session. The session precondition is checked before the query itself.
    #[tracing::instrument(skip(self, query))]
    pub async fn answer_query(
        &self,
        query: Option<&str>,
    ) -> Result<QueryOutcome, StudyAssistantError> {
        let session = self
            .session_store
            .document()
            .ok_or(StudyAssistantError::NoDocumentYet)?;

        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(StudyAssistantError::MissingQuery)?;

        let ai_response = self
            .llm_client
            .generate(&query_prompt(&session.text, query))
            .await
            .map_err(StudyAssistantError::AiGenerationFailed)?;

        let audio = self.speak(&ai_response).await?;

        Ok(QueryOutcome { ai_response, audio })
    }

    pub fn current_document(&self) -> Option<DocumentSession> {
        self.session_store.document()
    }

    async fn speak(&self, text: &str) -> Result<AudioArtifact, StudyAssistantError> {
        self.speech_service
            .synthesize(text)
            .await
            .map_err(|e| StudyAssistantError::SpeechSynthesisFailed(e.to_string()))
    }

    async fn persist_upload(&self, document: &Document, data: Bytes) -> Option<StoragePath> {
        let path = StoragePath::for_document(&document.id, &document.filename);
        match self.blob_store.store(&path, data).await {
            Ok(_) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, path = %path, "Failed to persist uploaded document");
                None
            }
        }
    }

    async fn discard_upload(&self, previous: &DocumentSession) {
        if let Some(path) = &previous.storage_path {
            if let Err(e) = self.blob_store.delete(path).await {
                tracing::warn!(error = %e, path = %path, "Failed to delete replaced upload");
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StudyAssistantError {
    #[error("No document part in the request")]
    MissingFilePart,
    #[error("No selected file")]
    EmptySelection,
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
    #[error("Unsupported file type. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),
    #[error("Could not extract text from the document. It might be scanned or empty.")]
    EmptyOrUnextractableContent(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("No query provided.")]
    MissingQuery,
    #[error("Please upload and process a document first.")]
    NoDocumentYet,
    #[error("AI generation failed: {0}")]
    AiGenerationFailed(LlmClientError),
    #[error("speech synthesis failed: {0}")]
    SpeechSynthesisFailed(String),
    #[error("Audio file not found or expired.")]
    AudioNotFound(String),
}

impl StudyAssistantError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFilePart
                | Self::EmptySelection
                | Self::InvalidUpload(_)
                | Self::UnsupportedFormat(_)
                | Self::EmptyOrUnextractableContent(_)
                | Self::MissingQuery
                | Self::NoDocumentYet
        )
    }
}

