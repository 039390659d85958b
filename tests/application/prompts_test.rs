use elemnote::application::services::{TUTOR_PERSONA, acknowledgement_prompt, query_prompt};

#[test]
fn given_excerpt_when_building_acknowledgement_prompt_then_excerpt_is_fenced() {
    let prompt = acknowledgement_prompt("Chapter 1: Cells");

    assert!(prompt.starts_with("I have processed a document."));
    assert!(prompt.contains("(first 500 characters)"));
    assert!(prompt.ends_with("```\nChapter 1: Cells...\n```"));
}

#[test]
fn given_text_and_query_when_building_query_prompt_then_both_are_included() {
    let prompt = query_prompt("Osmosis notes", "Quiz me");

    assert_eq!(
        prompt,
        "Here is the study material:\n```\nOsmosis notes\n```\n\nStudent's request: Quiz me"
    );
}

#[test]
fn given_tutor_persona_when_inspected_then_identifies_as_elem_ai() {
    assert!(TUTOR_PERSONA.starts_with("You are Elem AI"));
}
