use std::sync::OnceLock;

use regex::Regex;

use crate::form::form_model::{ErrorMap, Field, FieldValues};
use crate::validate::rules::{BASE_RULES, Check, topic_rules};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

/// Validate the current field values against the rule registry.
///
/// Pure and deterministic: no side effects, no I/O. The error map is
/// rebuilt wholesale on every pass. The base rules run first, then the
/// conditional set for the current topic; the first failing check per
/// field wins, so an empty email reports "required" rather than
/// "invalid".
pub fn validate(values: &FieldValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let conditional = topic_rules(values.get(Field::SurveyTopic));
    for rule in BASE_RULES.iter().chain(conditional) {
        if errors.contains_key(rule.field.name()) {
            continue;
        }
        if !check_passes(rule.check, values.get(rule.field)) {
            errors.insert(rule.field.name().to_string(), rule.message.to_string());
        }
    }

    errors
}

fn check_passes(check: Check, value: &str) -> bool {
    match check {
        Check::Required => !value.is_empty(),
        // An empty value is the Required rule's business, not ours
        Check::Email => value.is_empty() || email_pattern().is_match(value),
        Check::MinChars(min) => value.chars().count() >= min,
        Check::PositiveNumber => value.trim().parse::<f64>().is_ok_and(|n| n > 0.0),
    }
}
