use crate::error::SurveyError;
use crate::form::store::FormStore;
use crate::submit::payload::SubmissionPayload;
use crate::submit::sink::SubmissionSink;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};
use crate::validate::validator::validate;

/// Where a submit gesture stands. Pending lives only between the
/// validation pass and the finalize pass of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
}

/// What a submit gesture produced.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Validation was clean; the payload went through the sink.
    Finalized(SubmissionPayload),
    /// Validation failed; the store's error map holds the details and
    /// the form stays editable.
    Rejected { error_count: usize },
}

/// Coordinates the submit gesture: validate, store the errors, and
/// finalize exactly once when the pass comes back clean.
pub struct SubmissionController {
    state: SubmissionState,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The submit gesture: rebuild the error map wholesale and enter
    /// Pending. Finalization happens in `try_finalize`.
    pub fn begin_submit(&mut self, store: &mut FormStore, tracer: &TraceLogger) {
        let errors = validate(store.values());
        tracer.log(&TraceEvent::now("submit").with_error_count(errors.len()));
        store.set_errors(errors);
        self.state = SubmissionState::Pending;
    }

    /// The finalize pass, edge-triggered on Pending → empty errors.
    ///
    /// Exactly one delivery per gesture: both edges (finalized and
    /// rejected) leave Pending, so calling this again without a new
    /// `begin_submit` does nothing.
    pub fn try_finalize(
        &mut self,
        store: &FormStore,
        sink: &mut dyn SubmissionSink,
        tracer: &TraceLogger,
    ) -> Result<Option<SubmissionPayload>, SurveyError> {
        if self.state != SubmissionState::Pending {
            return Ok(None);
        }

        if !store.errors().is_empty() {
            // Back to editable; the error map stays up until the next
            // submit gesture re-validates.
            self.state = SubmissionState::Idle;
            tracer.log(&TraceEvent::now("submit_rejected").with_error_count(store.errors().len()));
            return Ok(None);
        }

        let payload = SubmissionPayload::from_store(store);
        sink.deliver(&payload)?;
        self.state = SubmissionState::Idle;
        tracer.log(
            &TraceEvent::now("submission_finalized")
                .with_question_count(payload.dependent_answers.len()),
        );
        Ok(Some(payload))
    }

    /// One whole gesture: validate, then finalize or reject.
    pub fn submit(
        &mut self,
        store: &mut FormStore,
        sink: &mut dyn SubmissionSink,
        tracer: &TraceLogger,
    ) -> Result<SubmissionOutcome, SurveyError> {
        self.begin_submit(store, tracer);
        match self.try_finalize(store, sink, tracer)? {
            Some(payload) => Ok(SubmissionOutcome::Finalized(payload)),
            None => Ok(SubmissionOutcome::Rejected {
                error_count: store.errors().len(),
            }),
        }
    }
}
