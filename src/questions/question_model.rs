use serde::{Deserialize, Serialize};

/// A follow-up question fetched for the current survey topic.
///
/// Ordered within its list; the position is the index the respondent's
/// answer is stored under. `question` is accepted as an input alias so
/// catalogs written against the original mock data stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    #[serde(alias = "question")]
    pub text: String,
}

impl QuestionDescriptor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
