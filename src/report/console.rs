use crate::form::form_model::{ErrorMap, Field};
use crate::submit::payload::SubmissionPayload;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a validation error map for terminal output, one line per
/// field, in fixed field order so reruns read the same.
///
/// Produces output like:
/// ```text
/// ✗ 3 validation errors
///     email — Email address is invalid
///     surveyTopic — Survey Topic is required
///     feedback — Feedback is required and must be at least 50 characters
/// ```
pub fn format_error_report(errors: &ErrorMap) -> String {
    if errors.is_empty() {
        return "\u{2713} No validation errors\n".to_string();
    }

    let mut out = String::new();
    let plural = if errors.len() == 1 { "error" } else { "errors" };
    out.push_str(&format!("\u{2717} {} validation {}\n", errors.len(), plural));

    // Declared field order first, then anything else (future index keys)
    for field in Field::ALL {
        if let Some(message) = errors.get(field.name()) {
            out.push_str(&format!("    {} \u{2014} {}\n", field.name(), message));
        }
    }
    for (key, message) in errors {
        if Field::from_name(key).is_none() {
            out.push_str(&format!("    {} \u{2014} {}\n", key, message));
        }
    }

    out
}

/// Format a finalized payload summary: the non-empty fields and every
/// dependent answer, plus the receipt when it can be computed.
pub fn format_payload_summary(payload: &SubmissionPayload) -> String {
    let mut out = String::new();
    out.push_str("=== Submission ===\n");

    for field in Field::ALL {
        let value = payload.fields.get(field);
        if !value.is_empty() {
            out.push_str(&format!("  {}: {}\n", field.name(), value));
        }
    }

    if payload.dependent_answers.is_empty() {
        out.push_str("  (no dependent answers)\n");
    } else {
        out.push_str("  Dependent answers:\n");
        for (index, answer) in &payload.dependent_answers {
            out.push_str(&format!("    [{}] {}\n", index, answer));
        }
    }

    if let Ok(receipt) = payload.fingerprint() {
        out.push_str(&format!("  Receipt: {}\n", receipt));
    }

    out
}
