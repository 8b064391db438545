use crate::form::form_model::Field;

/// A single predicate applied to one field's current value.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Value must be non-empty
    Required,
    /// Non-empty value must look like local@domain.tld
    Email,
    /// Character count must reach the given minimum (empty fails too)
    MinChars(usize),
    /// Value must parse as a number strictly greater than zero
    PositiveNumber,
}

/// One entry of the rule registry: field, predicate, message on failure.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
    pub message: &'static str,
}

const fn rule(field: Field, check: Check, message: &'static str) -> Rule {
    Rule { field, check, message }
}

/// Rules applied on every validation pass, whatever the topic.
pub const BASE_RULES: &[Rule] = &[
    rule(Field::FullName, Check::Required, "Full Name is required"),
    rule(Field::Email, Check::Required, "Email is required"),
    rule(Field::Email, Check::Email, "Email address is invalid"),
    rule(Field::SurveyTopic, Check::Required, "Survey Topic is required"),
    rule(
        Field::Feedback,
        Check::MinChars(50),
        "Feedback is required and must be at least 50 characters",
    ),
];

const TECHNOLOGY_RULES: &[Rule] = &[
    rule(
        Field::FavoriteProgrammingLanguage,
        Check::Required,
        "Favorite Programming Language is required",
    ),
    rule(
        Field::YearsOfExperience,
        Check::PositiveNumber,
        "Years of Experience is required and must be greater than 0",
    ),
];

const HEALTH_RULES: &[Rule] = &[
    rule(Field::ExerciseFrequency, Check::Required, "Exercise Frequency is required"),
    rule(Field::DietPreference, Check::Required, "Diet Preference is required"),
];

const EDUCATION_RULES: &[Rule] = &[
    rule(
        Field::HighestQualification,
        Check::Required,
        "Highest Qualification is required",
    ),
    rule(Field::FieldOfStudy, Check::Required, "Field of Study is required"),
];

/// The conditional rule set for a topic. Unrecognized topics (including
/// the empty string) carry no extra rules.
pub fn topic_rules(topic: &str) -> &'static [Rule] {
    match topic {
        "Technology" => TECHNOLOGY_RULES,
        "Health" => HEALTH_RULES,
        "Education" => EDUCATION_RULES,
        _ => &[],
    }
}
