use std::sync::Arc;

use bytes::Bytes;

use elemnote::application::ports::{BlobStore, SessionStore};
use elemnote::application::services::{
    ACKNOWLEDGEMENT_EXCERPT_CHARS, SpeechService, StudyAssistantError, StudyAssistantService,
};
use elemnote::infrastructure::llm::MockLlmClient;
use elemnote::infrastructure::session::InMemorySessionStore;
use elemnote::infrastructure::speech::MockSpeechSynthesizer;
use elemnote::infrastructure::storage::MockBlobStore;
use elemnote::infrastructure::text_processing::MockFileLoader;

struct Fixture {
    service: StudyAssistantService<MockFileLoader, MockLlmClient>,
    llm_client: Arc<MockLlmClient>,
    synthesizer: Arc<MockSpeechSynthesizer>,
    blob_store: Arc<MockBlobStore>,
}

fn fixture_with(llm_client: MockLlmClient, synthesizer: MockSpeechSynthesizer) -> Fixture {
    let llm_client = Arc::new(llm_client);
    let synthesizer = Arc::new(synthesizer);
    let blob_store = Arc::new(MockBlobStore::new());
    let session_store = Arc::new(InMemorySessionStore::new(8));

    let blobs: Arc<dyn BlobStore> = blob_store.clone();
    let sessions: Arc<dyn SessionStore> = session_store.clone();

    let speech_service = Arc::new(SpeechService::new(
        synthesizer.clone(),
        Arc::clone(&blobs),
        Arc::clone(&sessions),
    ));

    let service = StudyAssistantService::new(
        Arc::new(MockFileLoader),
        Arc::clone(&llm_client),
        speech_service,
        sessions,
        blobs,
    );

    Fixture {
        service,
        llm_client,
        synthesizer,
        blob_store,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockLlmClient::new("Ready to help!"), MockSpeechSynthesizer::new())
}

#[tokio::test]
async fn given_text_upload_when_processing_then_session_holds_full_text() {
    let f = fixture();

    let outcome = f
        .service
        .process_upload("biology.txt", Bytes::from("Cells are the unit of life."))
        .await
        .unwrap();

    assert_eq!(outcome.ai_response, "Ready to help!");
    let session = f.service.current_document().unwrap();
    assert_eq!(session.document.id, outcome.document_id);
    assert_eq!(session.text, "Cells are the unit of life.");
    assert_eq!(f.synthesizer.calls(), 1);
}

#[tokio::test]
async fn given_long_document_when_processing_then_acknowledgement_uses_bounded_excerpt() {
    let f = fixture();
    let text = "ab".repeat(1000);

    f.service
        .process_upload("long.txt", Bytes::from(text.clone()))
        .await
        .unwrap();

    let prompt = &f.llm_client.prompts()[0];
    let excerpt = "ab".repeat(ACKNOWLEDGEMENT_EXCERPT_CHARS / 2);
    assert!(prompt.contains(&format!("{excerpt}...")));
    assert!(!prompt.contains(&text));
}

#[tokio::test]
async fn given_uploaded_document_when_querying_then_prompt_contains_full_text_and_query() {
    let f = fixture();
    let text = "x".repeat(2000);
    f.service
        .process_upload("long.txt", Bytes::from(text.clone()))
        .await
        .unwrap();

    let outcome = f
        .service
        .answer_query(Some("  Make flashcards  "))
        .await
        .unwrap();

    assert_eq!(outcome.ai_response, "Ready to help!");
    let prompt = f.llm_client.prompts().pop().unwrap();
    assert!(prompt.contains(&text));
    assert!(prompt.ends_with("Student's request: Make flashcards"));
}

#[tokio::test]
async fn given_no_document_when_querying_then_returns_no_document_error() {
    let f = fixture();

    let result = f.service.answer_query(Some("Quiz me")).await;

    assert!(matches!(result, Err(StudyAssistantError::NoDocumentYet)));
    assert!(f.llm_client.prompts().is_empty());
}

#[tokio::test]
async fn given_document_when_query_missing_then_returns_missing_query() {
    let f = fixture();
    f.service
        .process_upload("notes.txt", Bytes::from("notes"))
        .await
        .unwrap();

    let missing = f.service.answer_query(None).await;
    let blank = f.service.answer_query(Some(" \n ")).await;

    assert!(matches!(missing, Err(StudyAssistantError::MissingQuery)));
    assert!(matches!(blank, Err(StudyAssistantError::MissingQuery)));
}

#[tokio::test]
async fn given_blank_filename_when_processing_then_returns_empty_selection() {
    let f = fixture();

    let result = f.service.process_upload("  ", Bytes::from("data")).await;

    assert!(matches!(result, Err(StudyAssistantError::EmptySelection)));
}

#[tokio::test]
async fn given_unknown_extension_when_processing_then_returns_unsupported_format() {
    let f = fixture();

    let result = f.service.process_upload("notes.md", Bytes::from("data")).await;

    assert!(matches!(result, Err(StudyAssistantError::UnsupportedFormat(_))));
    assert!(f.service.current_document().is_none());
}

#[tokio::test]
async fn given_uppercase_extension_when_processing_then_format_is_accepted() {
    let f = fixture();

    let result = f.service.process_upload("NOTES.TXT", Bytes::from("data")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_existing_session_when_new_upload_succeeds_then_previous_upload_blob_is_deleted() {
    let f = fixture();
    f.service
        .process_upload("first.txt", Bytes::from("first"))
        .await
        .unwrap();
    let first_path = f
        .service
        .current_document()
        .and_then(|s| s.storage_path)
        .unwrap();
    assert!(f.blob_store.contains(&first_path));

    f.service
        .process_upload("second.txt", Bytes::from("second"))
        .await
        .unwrap();

    assert!(!f.blob_store.contains(&first_path));
    assert_eq!(f.service.current_document().unwrap().text, "second");
}

#[tokio::test]
async fn given_failing_model_when_processing_then_session_is_still_replaced() {
    let f = fixture_with(MockLlmClient::failing("offline"), MockSpeechSynthesizer::new());

    let result = f
        .service
        .process_upload("notes.txt", Bytes::from("photosynthesis"))
        .await;

    assert!(matches!(
        result,
        Err(StudyAssistantError::AiGenerationFailed(_))
    ));
    assert_eq!(f.service.current_document().unwrap().text, "photosynthesis");
    assert_eq!(f.synthesizer.calls(), 0);
}

#[tokio::test]
async fn given_failing_synthesizer_when_processing_then_returns_speech_error() {
    let f = fixture_with(
        MockLlmClient::new("answer"),
        MockSpeechSynthesizer::failing("tts down"),
    );
    let upload = f
        .service
        .process_upload("notes.txt", Bytes::from("notes"))
        .await;

    match upload {
        Err(StudyAssistantError::SpeechSynthesisFailed(msg)) => assert!(msg.contains("tts down")),
        other => panic!("expected speech failure, got {other:?}"),
    }
    assert!(!StudyAssistantError::SpeechSynthesisFailed(String::new()).is_client_error());
}
