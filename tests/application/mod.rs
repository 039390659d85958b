mod prompts_test;
mod study_assistant_service_test;
