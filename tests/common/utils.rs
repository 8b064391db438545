use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use survey_engine::error::SurveyError;
use survey_engine::form::form_model::{Field, FieldValues};
use survey_engine::form::store::FormStore;
use survey_engine::questions::backend::{CatalogBackend, QuestionBackend};
use survey_engine::questions::question_model::QuestionDescriptor;
use survey_engine::submit::payload::SubmissionPayload;
use survey_engine::submit::sink::SubmissionSink;
use survey_engine::trace::logger::TraceLogger;

pub fn tracer() -> TraceLogger {
    TraceLogger::disabled()
}

/// Store over the built-in catalog with zero simulated latency.
pub fn instant_store() -> FormStore {
    FormStore::new(Arc::new(CatalogBackend::with_latency(Duration::ZERO)))
}

/// Generous bound for fetches that should resolve "immediately".
pub fn settle() -> Duration {
    Duration::from_secs(5)
}

pub fn feedback_of_len(len: usize) -> String {
    "f".repeat(len)
}

/// Field values that pass validation under the Education topic.
pub fn valid_education_values() -> FieldValues {
    let mut values = FieldValues::default();
    values.set(Field::FullName, "Ada".to_string());
    values.set(Field::Email, "ada@x.io".to_string());
    values.set(Field::SurveyTopic, "Education".to_string());
    values.set(Field::HighestQualification, "PhD".to_string());
    values.set(Field::FieldOfStudy, "Math".to_string());
    values.set(Field::Feedback, feedback_of_len(60));
    values
}

/// Field values that pass validation under the Technology topic.
pub fn valid_technology_values() -> FieldValues {
    let mut values = FieldValues::default();
    values.set(Field::FullName, "Grace".to_string());
    values.set(Field::Email, "grace@navy.mil".to_string());
    values.set(Field::SurveyTopic, "Technology".to_string());
    values.set(Field::FavoriteProgrammingLanguage, "COBOL".to_string());
    values.set(Field::YearsOfExperience, "40".to_string());
    values.set(Field::Feedback, feedback_of_len(55));
    values
}

/// Copy a set of values into a store field by field.
pub fn fill_store(store: &mut FormStore, values: &FieldValues, tracer: &TraceLogger) {
    for field in Field::ALL {
        store.set_field(field, values.get(field).to_string(), tracer);
    }
}

// ============================================================================
// Test doubles
// ============================================================================

/// Backend with a per-topic delay and result, for racing fetches.
pub struct RoutedBackend {
    routes: HashMap<String, (Duration, Vec<QuestionDescriptor>)>,
}

impl RoutedBackend {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn route(mut self, topic: &str, delay: Duration, questions: &[&str]) -> Self {
        let list = questions
            .iter()
            .map(|q| QuestionDescriptor::new(*q))
            .collect();
        self.routes.insert(topic.to_string(), (delay, list));
        self
    }
}

impl QuestionBackend for RoutedBackend {
    fn fetch(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, SurveyError> {
        match self.routes.get(topic) {
            Some((delay, questions)) => {
                if !delay.is_zero() {
                    thread::sleep(*delay);
                }
                Ok(questions.clone())
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Backend whose every fetch fails.
pub struct FailingBackend;

impl QuestionBackend for FailingBackend {
    fn fetch(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, SurveyError> {
        Err(SurveyError::QuestionFetch {
            topic: topic.to_string(),
            detail: "connection refused".to_string(),
        })
    }
}

/// Sink that records every delivered payload.
#[derive(Default)]
pub struct MemorySink {
    pub delivered: Vec<SubmissionPayload>,
}

impl SubmissionSink for MemorySink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> Result<(), SurveyError> {
        self.delivered.push(payload.clone());
        Ok(())
    }
}
