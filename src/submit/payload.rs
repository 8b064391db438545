use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::form::form_model::{AnswerMap, FieldValues};
use crate::form::store::FormStore;

/// The complete payload handed to the submission sink on finalization:
/// every base field plus the answers to the dependent questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: FieldValues,
    pub dependent_answers: AnswerMap,
}

impl SubmissionPayload {
    pub fn from_store(store: &FormStore) -> Self {
        Self {
            fields: store.values().clone(),
            dependent_answers: store.answers().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SurveyError> {
        serde_json::to_string(self).map_err(SurveyError::PayloadSerialize)
    }

    pub fn to_json_pretty(&self) -> Result<String, SurveyError> {
        serde_json::to_string_pretty(self).map_err(SurveyError::PayloadSerialize)
    }

    /// Receipt fingerprint: sha1 hex digest of the compact payload JSON.
    /// Equal payloads fingerprint equally; handy as a submission id.
    pub fn fingerprint(&self) -> Result<String, SurveyError> {
        use sha1::{Digest, Sha1};

        let json = self.to_json()?;
        let mut hasher = Sha1::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
