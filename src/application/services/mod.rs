mod artifact_sweeper;
mod prompts;
mod speech_service;
mod study_assistant_service;

pub use artifact_sweeper::ArtifactSweeper;
pub use prompts::{
    ACKNOWLEDGEMENT_EXCERPT_CHARS, TUTOR_PERSONA, acknowledgement_prompt, query_prompt,
};
pub use speech_service::{SpeechService, SpeechServiceError};
pub use study_assistant_service::{
    QueryOutcome, StudyAssistantError, StudyAssistantService, UploadOutcome,
};
