use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One protocol event, serialized as a JSONL record.
///
/// `event` names the transition: field_changed, answer_set,
/// fetch_dispatched, fetch_applied, fetch_discarded, questions_cleared,
/// submit_rejected, submission_finalized.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub event: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(event: &'static str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            event,
            field: None,
            topic: None,
            request_id: None,
            question_count: None,
            error_count: None,
            detail: None,
        }
    }

    pub fn with_field(mut self, field: impl ToString) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn with_topic(mut self, topic: impl ToString) -> Self {
        self.topic = Some(topic.to_string());
        self
    }

    pub fn with_request(mut self, request_id: u64) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn with_error_count(mut self, count: usize) -> Self {
        self.error_count = Some(count);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
