use elemnote::domain::{Document, DocumentFormat, DocumentSession};

fn session(text: &str) -> DocumentSession {
    let document = Document::new("notes.txt".to_string(), DocumentFormat::Text, text.len() as u64);
    DocumentSession::new(document, text.to_string(), None)
}

#[test]
fn given_short_text_when_taking_excerpt_then_returns_whole_text() {
    assert_eq!(session("short").excerpt(500), "short");
}

#[test]
fn given_long_text_when_taking_excerpt_then_stops_at_limit() {
    let text = "a".repeat(600);

    assert_eq!(session(&text).excerpt(500).len(), 500);
}

#[test]
fn given_multibyte_text_when_taking_excerpt_then_counts_characters() {
    let text = "ñ".repeat(10);

    assert_eq!(session(&text).excerpt(3), "ñññ");
}
