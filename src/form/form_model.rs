use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of base survey fields.
///
/// Every form instance carries all ten; a field the respondent has not
/// touched holds the empty string, never a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    SurveyTopic,
    FavoriteProgrammingLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::Email,
        Field::SurveyTopic,
        Field::FavoriteProgrammingLanguage,
        Field::YearsOfExperience,
        Field::ExerciseFrequency,
        Field::DietPreference,
        Field::HighestQualification,
        Field::FieldOfStudy,
        Field::Feedback,
    ];

    /// The wire name of this field (matches the payload key).
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::SurveyTopic => "surveyTopic",
            Field::FavoriteProgrammingLanguage => "favoriteProgrammingLanguage",
            Field::YearsOfExperience => "yearsOfExperience",
            Field::ExerciseFrequency => "exerciseFrequency",
            Field::DietPreference => "dietPreference",
            Field::HighestQualification => "highestQualification",
            Field::FieldOfStudy => "fieldOfStudy",
            Field::Feedback => "feedback",
        }
    }

    /// Resolve a wire name back to a field.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Current values of all base fields. Empty string = unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub survey_topic: String,
    #[serde(default)]
    pub favorite_programming_language: String,
    #[serde(default)]
    pub years_of_experience: String,
    #[serde(default)]
    pub exercise_frequency: String,
    #[serde(default)]
    pub diet_preference: String,
    #[serde(default)]
    pub highest_qualification: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub feedback: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::SurveyTopic => &self.survey_topic,
            Field::FavoriteProgrammingLanguage => &self.favorite_programming_language,
            Field::YearsOfExperience => &self.years_of_experience,
            Field::ExerciseFrequency => &self.exercise_frequency,
            Field::DietPreference => &self.diet_preference,
            Field::HighestQualification => &self.highest_qualification,
            Field::FieldOfStudy => &self.field_of_study,
            Field::Feedback => &self.feedback,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::SurveyTopic => self.survey_topic = value,
            Field::FavoriteProgrammingLanguage => self.favorite_programming_language = value,
            Field::YearsOfExperience => self.years_of_experience = value,
            Field::ExerciseFrequency => self.exercise_frequency = value,
            Field::DietPreference => self.diet_preference = value,
            Field::HighestQualification => self.highest_qualification = value,
            Field::FieldOfStudy => self.field_of_study = value,
            Field::Feedback => self.feedback = value,
        }
    }
}

/// Field name → human-readable message. Empty ⇔ valid per last pass.
///
/// Keyed by wire name rather than `Field` so dependent-question indices
/// could join the key space; today no rule produces them.
pub type ErrorMap = BTreeMap<String, String>;

/// Question index → answer text. Reset whenever the topic changes.
pub type AnswerMap = BTreeMap<usize, String>;
