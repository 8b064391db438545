use survey_engine::form::form_model::Field;

mod common;
use common::utils::{instant_store, settle, tracer};

// =========================================================================
// Plain field and answer mutation
// =========================================================================

#[test]
fn set_field_overwrites_value() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::FullName, "Ada".to_string(), &tracer);
    assert_eq!(store.values().get(Field::FullName), "Ada");

    store.set_field(Field::FullName, "Grace".to_string(), &tracer);
    assert_eq!(store.values().get(Field::FullName), "Grace");
}

#[test]
fn set_field_runs_no_validation() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::Email, "not-an-email".to_string(), &tracer);
    assert!(
        store.errors().is_empty(),
        "Errors only appear on submit, never on edit"
    );
}

#[test]
fn set_answer_overwrites_by_index() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_answer(0, "first".to_string(), &tracer);
    store.set_answer(2, "third".to_string(), &tracer);
    store.set_answer(0, "revised".to_string(), &tracer);

    assert_eq!(store.answers().get(&0).map(String::as_str), Some("revised"));
    assert_eq!(store.answers().get(&2).map(String::as_str), Some("third"));
    assert_eq!(store.answers().len(), 2);
}

// =========================================================================
// Topic-change protocol
// =========================================================================

#[test]
fn topic_change_fetches_catalog_questions() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Technology".to_string(), &tracer);
    assert!(store.has_pending_fetch(), "Fetch starts at topic change");

    assert!(store.wait_for_questions(settle(), &tracer));
    assert_eq!(store.questions().len(), 2);
    assert_eq!(store.questions()[0].text, "What is your favorite tech stack?");
}

#[test]
fn topic_change_clears_answers_before_resolution() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Technology".to_string(), &tracer);
    store.wait_for_questions(settle(), &tracer);
    store.set_answer(0, "x".to_string(), &tracer);

    store.set_field(Field::SurveyTopic, "Health".to_string(), &tracer);
    // Cleared at trigger time, not at apply time
    assert!(
        store.answers().is_empty(),
        "Old answers must not survive into the new question set"
    );

    assert!(store.wait_for_questions(settle(), &tracer));
    assert!(store.answers().is_empty());
    assert_eq!(store.questions()[0].text, "How many hours do you sleep daily?");
}

#[test]
fn same_topic_value_does_not_refetch() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Technology".to_string(), &tracer);
    store.wait_for_questions(settle(), &tracer);
    store.set_answer(0, "x".to_string(), &tracer);

    store.set_field(Field::SurveyTopic, "Technology".to_string(), &tracer);
    assert!(!store.has_pending_fetch(), "Unchanged topic is not a change");
    assert_eq!(
        store.answers().get(&0).map(String::as_str),
        Some("x"),
        "Answers only reset when the topic actually changes"
    );
}

#[test]
fn emptied_topic_clears_questions_without_fetch() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Education".to_string(), &tracer);
    store.wait_for_questions(settle(), &tracer);
    assert_eq!(store.questions().len(), 2);
    store.set_answer(1, "online".to_string(), &tracer);

    store.set_field(Field::SurveyTopic, String::new(), &tracer);
    assert!(!store.has_pending_fetch(), "Empty topic skips the provider");
    assert!(store.questions().is_empty());
    assert!(store.answers().is_empty());
}

#[test]
fn unrecognized_topic_yields_empty_question_list() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Gardening".to_string(), &tracer);
    assert!(store.wait_for_questions(settle(), &tracer));
    assert!(store.questions().is_empty());
}

#[test]
fn non_topic_fields_never_touch_questions() {
    let tracer = tracer();
    let mut store = instant_store();

    store.set_field(Field::SurveyTopic, "Health".to_string(), &tracer);
    store.wait_for_questions(settle(), &tracer);
    store.set_answer(0, "eight".to_string(), &tracer);

    store.set_field(Field::Feedback, "so far so good".to_string(), &tracer);
    store.set_field(Field::Email, "a@b.co".to_string(), &tracer);

    assert_eq!(store.questions().len(), 2, "Question list untouched");
    assert_eq!(store.answers().len(), 1, "Answers untouched");
    assert!(!store.has_pending_fetch());
}
