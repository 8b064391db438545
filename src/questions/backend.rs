use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use serde::Deserialize;

use crate::error::SurveyError;
use crate::questions::question_model::QuestionDescriptor;

/// The follow-up question provider contract.
///
/// `fetch` is blocking; the store runs it on a worker thread so callers
/// never wait on it. Unrecognized topics yield an empty list, not an
/// error.
pub trait QuestionBackend: Send + Sync {
    fn fetch(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, SurveyError>;
}

// ============================================================================
// Catalog backend — in-memory topic→questions map with simulated latency
// ============================================================================

pub struct CatalogBackend {
    catalog: HashMap<String, Vec<QuestionDescriptor>>,
    latency: Duration,
}

/// Reference latency of the simulated provider.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

impl Default for CatalogBackend {
    fn default() -> Self {
        Self {
            catalog: builtin_catalog(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

impl CatalogBackend {
    pub fn new(catalog: HashMap<String, Vec<QuestionDescriptor>>, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    /// Built-in catalog with a custom latency (0 for tests).
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            catalog: builtin_catalog(),
            latency,
        }
    }

    /// Load a catalog from a YAML file: a mapping of topic name to a
    /// list of question entries.
    pub fn from_yaml(path: &str, latency: Duration) -> Result<Self, SurveyError> {
        let content = std::fs::read_to_string(path).map_err(|source| SurveyError::FileRead {
            path: path.to_string(),
            source,
        })?;
        let file: CatalogFile =
            serde_yaml::from_str(&content).map_err(|source| SurveyError::YamlParse {
                path: path.to_string(),
                source,
            })?;
        Ok(Self {
            catalog: file.topics,
            latency,
        })
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(flatten)]
    topics: HashMap<String, Vec<QuestionDescriptor>>,
}

/// The reference question catalog: three topics, two questions each.
fn builtin_catalog() -> HashMap<String, Vec<QuestionDescriptor>> {
    let mut catalog = HashMap::new();
    catalog.insert(
        "Technology".to_string(),
        vec![
            QuestionDescriptor::new("What is your favorite tech stack?"),
            QuestionDescriptor::new("How do you stay updated with the latest tech trends?"),
        ],
    );
    catalog.insert(
        "Health".to_string(),
        vec![
            QuestionDescriptor::new("How many hours do you sleep daily?"),
            QuestionDescriptor::new("Do you have any allergies?"),
        ],
    );
    catalog.insert(
        "Education".to_string(),
        vec![
            QuestionDescriptor::new("What is your favorite subject?"),
            QuestionDescriptor::new("Do you prefer online or offline classes?"),
        ],
    );
    catalog
}

impl QuestionBackend for CatalogBackend {
    fn fetch(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, SurveyError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        Ok(self.catalog.get(topic).cloned().unwrap_or_default())
    }
}

// ============================================================================
// HTTP backend — GET <endpoint>?topic=<topic>, JSON array response
// ============================================================================

pub struct HttpBackend {
    pub endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl QuestionBackend for HttpBackend {
    fn fetch(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, SurveyError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("topic", topic)])
            .send()
            .map_err(|e| SurveyError::QuestionFetch {
                topic: topic.to_string(),
                detail: e.to_string(),
            })?;

        let questions: Vec<QuestionDescriptor> =
            response.json().map_err(|e| SurveyError::QuestionFetch {
                topic: topic.to_string(),
                detail: format!("bad response body: {}", e),
            })?;

        Ok(questions)
    }
}
