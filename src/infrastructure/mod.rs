pub mod llm;
pub mod observability;
pub mod session;
pub mod speech;
pub mod storage;
pub mod text_processing;
