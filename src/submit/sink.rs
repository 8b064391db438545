use std::fs::OpenOptions;
use std::io::Write;

use crate::error::SurveyError;
use crate::submit::payload::SubmissionPayload;

/// Where finalized submissions go. The engine has no opinion on the
/// transport; console and file sinks ship here, anything else plugs in
/// through this trait.
pub trait SubmissionSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> Result<(), SurveyError>;
}

/// Prints the payload to stdout — the terminal counterpart of the
/// reference implementation's success alert.
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> Result<(), SurveyError> {
        println!("Form submitted successfully!");
        println!("{}", payload.to_json_pretty()?);
        println!("Receipt: {}", payload.fingerprint()?);
        Ok(())
    }
}

/// Appends one compact JSON line per finalized submission.
pub struct JsonlSink {
    path: String,
}

impl JsonlSink {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl SubmissionSink for JsonlSink {
    fn deliver(&mut self, payload: &SubmissionPayload) -> Result<(), SurveyError> {
        let line = payload.to_json()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SurveyError::SinkDelivery {
                sink: self.path.clone(),
                source,
            })?;
        writeln!(file, "{}", line).map_err(|source| SurveyError::SinkDelivery {
            sink: self.path.clone(),
            source,
        })
    }
}
