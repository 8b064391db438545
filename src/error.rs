use std::fmt;

/// Operational errors of the survey engine.
///
/// Validation failures are NOT represented here — they are data, carried
/// in the error map and surfaced next to their field. This enum covers
/// the failures the machine can hit while running: file handling, the
/// question provider, payload serialization, sink delivery.
#[derive(Debug)]
pub enum SurveyError {
    /// A config, draft, or catalog file could not be read
    FileRead { path: String, source: std::io::Error },

    /// A YAML file did not match its expected shape
    YamlParse { path: String, source: serde_yaml::Error },

    /// The question provider could not be reached or returned garbage
    QuestionFetch { topic: String, detail: String },

    /// The finalized payload could not be serialized
    PayloadSerialize(serde_json::Error),

    /// The submission sink rejected the payload
    SinkDelivery { sink: String, source: std::io::Error },

    /// An unknown field name was supplied (draft file or REPL input)
    UnknownField(String),
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::FileRead { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            SurveyError::YamlParse { path, source } => {
                write!(f, "Malformed YAML in '{}': {}", path, source)
            }
            SurveyError::QuestionFetch { topic, detail } => {
                write!(f, "Question fetch for topic '{}' failed: {}", topic, detail)
            }
            SurveyError::PayloadSerialize(source) => {
                write!(f, "Failed to serialize submission payload: {}", source)
            }
            SurveyError::SinkDelivery { sink, source } => {
                write!(f, "Submission sink '{}' failed: {}", sink, source)
            }
            SurveyError::UnknownField(name) => {
                write!(f, "Unknown field name: '{}'", name)
            }
        }
    }
}

impl std::error::Error for SurveyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyError::FileRead { source, .. } => Some(source),
            SurveyError::YamlParse { source, .. } => Some(source),
            SurveyError::PayloadSerialize(source) => Some(source),
            SurveyError::SinkDelivery { source, .. } => Some(source),
            _ => None,
        }
    }
}
