use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use crate::form::form_model::{AnswerMap, ErrorMap, Field, FieldValues};
use crate::questions::backend::QuestionBackend;
use crate::questions::fetcher::{FetchResolution, QuestionFetcher};
use crate::questions::question_model::QuestionDescriptor;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

/// The single-writer state container of the survey form.
///
/// Owns the field values, the dependent-question list with its answers,
/// the error map, and the advisory notice. All mutation goes through the
/// named operations below; nothing outside the store touches these
/// containers directly.
///
/// Changing the topic field starts the dependent-fetch protocol: the
/// answers clear immediately, a fetch is dispatched on a worker thread,
/// and its resolution is applied by `apply_resolutions` only if no newer
/// request has been issued in the meantime (last request wins).
pub struct FormStore {
    values: FieldValues,
    questions: Vec<QuestionDescriptor>,
    answers: AnswerMap,
    errors: ErrorMap,
    advisory: Option<String>,

    fetcher: QuestionFetcher,
    resolutions: Receiver<FetchResolution>,
    /// Id of the latest dispatched fetch, None when nothing is awaited.
    pending_request: Option<u64>,
}

impl FormStore {
    pub fn new(backend: Arc<dyn QuestionBackend>) -> Self {
        let (fetcher, resolutions) = QuestionFetcher::new(backend);
        Self {
            values: FieldValues::default(),
            questions: Vec::new(),
            answers: AnswerMap::new(),
            errors: ErrorMap::new(),
            advisory: None,
            fetcher,
            resolutions,
            pending_request: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn questions(&self) -> &[QuestionDescriptor] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Non-blocking notice about the question provider (e.g. fetch
    /// failure). Never a field error and never blocks submission.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.pending_request.is_some()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Overwrite one field. No validation runs here; errors from the
    /// last submit stay visible until the next one.
    ///
    /// A changed, non-empty topic dispatches a fetch for its follow-up
    /// questions and clears the answers at once, so nothing recorded for
    /// the old questions can attach to the new ones. An emptied topic
    /// skips the fetch and clears the question list directly.
    pub fn set_field(&mut self, field: Field, value: String, tracer: &TraceLogger) {
        let topic_changed = field == Field::SurveyTopic && value != self.values.survey_topic;

        tracer.log(&TraceEvent::now("field_changed").with_field(field.name()));
        self.values.set(field, value);

        if !topic_changed {
            return;
        }

        self.answers.clear();
        let topic = self.values.survey_topic.clone();
        if topic.is_empty() {
            // Dropping the pending id makes any in-flight resolution
            // stale; it will be discarded on arrival.
            self.questions.clear();
            self.pending_request = None;
            self.advisory = None;
            tracer.log(&TraceEvent::now("questions_cleared"));
        } else {
            let request_id = self.fetcher.dispatch(&topic);
            self.pending_request = Some(request_id);
            tracer.log(
                &TraceEvent::now("fetch_dispatched")
                    .with_topic(&topic)
                    .with_request(request_id),
            );
        }
    }

    /// Overwrite the answer at `index`. Total for any index; the caller
    /// only emits indices of currently listed questions.
    pub fn set_answer(&mut self, index: usize, value: String, tracer: &TraceLogger) {
        tracer.log(&TraceEvent::now("answer_set").with_detail(format!("index {}", index)));
        self.answers.insert(index, value);
    }

    /// Wholesale replacement of the error map (submission controller).
    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    // ------------------------------------------------------------------
    // Fetch resolution pump
    // ------------------------------------------------------------------

    /// Drain every resolution that has arrived, without blocking.
    /// Returns how many were applied (0 or 1 in practice: only the
    /// latest request's resolution ever applies).
    pub fn apply_resolutions(&mut self, tracer: &TraceLogger) -> usize {
        let mut applied = 0;
        loop {
            match self.resolutions.try_recv() {
                Ok(resolution) => {
                    if self.apply(resolution, tracer) {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Block until the awaited fetch resolves or `timeout` elapses.
    /// Convenience for one-shot drivers and tests; the protocol itself
    /// imposes no timeout. Returns true when nothing is awaited anymore.
    pub fn wait_for_questions(&mut self, timeout: Duration, tracer: &TraceLogger) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending_request.is_some() {
            let remaining = match deadline.checked_duration_since(Instant::now()) {
                Some(d) if !d.is_zero() => d,
                _ => return false,
            };
            match self.resolutions.recv_timeout(remaining) {
                Ok(resolution) => {
                    self.apply(resolution, tracer);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false;
                }
            }
        }
        true
    }

    /// Apply one resolution if it answers the latest request; discard it
    /// otherwise. Returns whether it was applied.
    fn apply(&mut self, resolution: FetchResolution, tracer: &TraceLogger) -> bool {
        if self.pending_request != Some(resolution.request_id) {
            tracer.log(
                &TraceEvent::now("fetch_discarded")
                    .with_topic(&resolution.topic)
                    .with_request(resolution.request_id),
            );
            return false;
        }

        self.pending_request = None;
        match resolution.outcome {
            Ok(questions) => {
                tracer.log(
                    &TraceEvent::now("fetch_applied")
                        .with_topic(&resolution.topic)
                        .with_request(resolution.request_id)
                        .with_question_count(questions.len()),
                );
                self.questions = questions;
                self.advisory = None;
            }
            Err(detail) => {
                // Provider failure is not user-correctable: empty list
                // plus an advisory, and submission stays possible.
                tracer.log(
                    &TraceEvent::now("fetch_failed")
                        .with_topic(&resolution.topic)
                        .with_request(resolution.request_id)
                        .with_detail(&detail),
                );
                self.questions.clear();
                self.advisory = Some(format!(
                    "Follow-up questions for '{}' are unavailable: {}",
                    resolution.topic, detail
                ));
            }
        }
        true
    }
}
