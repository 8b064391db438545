use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::form::form_model::Field;
use crate::form::store::FormStore;
use crate::questions::backend::QuestionBackend;
use crate::report::console::{format_error_report, format_payload_summary};
use crate::submit::controller::{SubmissionController, SubmissionOutcome};
use crate::submit::sink::{ConsoleSink, JsonlSink};
use crate::trace::logger::TraceLogger;

// ============================================================================
// submit subcommand — one-shot draft submission
// ============================================================================

/// A pre-filled form: field values plus dependent-question answers,
/// deserialized from a YAML draft file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SubmissionDraft {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    #[serde(default)]
    pub answers: BTreeMap<usize, String>,
}

/// Load a draft from a YAML file.
pub fn load_draft(path: &str) -> Result<SubmissionDraft, SurveyError> {
    let content = std::fs::read_to_string(path).map_err(|source| SurveyError::FileRead {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| SurveyError::YamlParse {
        path: path.to_string(),
        source,
    })
}

/// Validate and submit a draft file. Returns whether the submission was
/// finalized (false = rejected with validation errors).
pub fn cmd_submit(
    draft_path: &str,
    output: Option<&str>,
    fetch_timeout: Duration,
    backend: Arc<dyn QuestionBackend>,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let draft = load_draft(draft_path)?;
    let mut store = FormStore::new(backend);

    for (name, value) in &draft.fields {
        let field = Field::from_name(name).ok_or_else(|| SurveyError::UnknownField(name.clone()))?;
        store.set_field(field, value.clone(), tracer);
    }

    // The topic assignment above may have started a fetch; give the
    // provider a bounded chance to answer before the payload is built.
    if store.has_pending_fetch() {
        if verbose > 0 {
            eprintln!("Waiting for dependent questions...");
        }
        if !store.wait_for_questions(fetch_timeout, tracer) {
            eprintln!("Warning: dependent-question fetch did not resolve in time");
        }
    }

    for (index, answer) in &draft.answers {
        store.set_answer(*index, answer.clone(), tracer);
    }

    if let Some(notice) = store.advisory() {
        eprintln!("Note: {}", notice);
    }

    let mut controller = SubmissionController::new();
    let outcome = match output {
        Some(path) => {
            let mut sink = JsonlSink::new(path);
            controller.submit(&mut store, &mut sink, tracer)?
        }
        None => {
            let mut sink = ConsoleSink;
            controller.submit(&mut store, &mut sink, tracer)?
        }
    };

    match outcome {
        SubmissionOutcome::Finalized(payload) => {
            if let Some(path) = output {
                println!("Finalized submission appended to {}", path);
                print!("{}", format_payload_summary(&payload));
            }
            Ok(true)
        }
        SubmissionOutcome::Rejected { .. } => {
            print!("{}", format_error_report(store.errors()));
            Ok(false)
        }
    }
}

// ============================================================================
// questions subcommand — provider preview
// ============================================================================

/// Fetch and print the follow-up questions for a topic.
pub fn cmd_questions(
    topic: &str,
    backend: Arc<dyn QuestionBackend>,
) -> Result<(), Box<dyn std::error::Error>> {
    let questions = backend.fetch(topic)?;

    if questions.is_empty() {
        println!("No follow-up questions for topic '{}'", topic);
        return Ok(());
    }

    println!("Follow-up questions for '{}':", topic);
    for (index, question) in questions.iter().enumerate() {
        println!("  [{}] {}", index, question.text);
    }
    Ok(())
}
