use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::questions::backend::{CatalogBackend, DEFAULT_LATENCY_MS, HttpBackend, QuestionBackend};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "survey-engine",
    version,
    about = "Survey form-state engine with conditional validation and dependent questions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: survey-engine.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Write a JSONL protocol trace to this path
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Question provider: catalog or http
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// HTTP question provider endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Simulated latency of the catalog provider, in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Question catalog YAML file (catalog provider only)
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive survey session on stdin
    Run,

    /// Validate and submit a draft file in one shot
    Submit {
        /// Path to a draft YAML file (fields + answers)
        #[arg(long)]
        draft: String,

        /// Append the finalized payload to this JSONL file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Seconds to wait for the dependent-question fetch
        #[arg(long, default_value_t = 10)]
        fetch_timeout: u64,
    },

    /// Fetch and print the follow-up questions for a topic
    Questions {
        /// Topic to fetch questions for
        #[arg(long)]
        topic: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `survey-engine.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// "catalog" or "http"
    #[serde(default = "default_catalog")]
    pub backend: String,

    pub endpoint: Option<String>,

    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Catalog YAML path; built-in catalog when unset
    pub catalog: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: "catalog".to_string(),
            endpoint: None,
            latency_ms: DEFAULT_LATENCY_MS,
            catalog: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_catalog() -> String {
    "catalog".to_string()
}
fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing
/// or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("survey-engine.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Provider resolution (merge CLI args with config file)
// ============================================================================

/// Build the question backend from resolved CLI/config values
/// (CLI flag beats config file beats default).
pub fn build_backend(cli: &Cli, config: &AppConfig) -> Result<Arc<dyn QuestionBackend>, SurveyError> {
    let provider = &config.provider;
    let backend_name = cli.backend.as_deref().unwrap_or(&provider.backend);
    let latency = Duration::from_millis(cli.latency_ms.unwrap_or(provider.latency_ms));

    match backend_name {
        "http" => {
            let endpoint = cli
                .endpoint
                .as_deref()
                .or(provider.endpoint.as_deref())
                .unwrap_or("http://localhost:8080/questions");
            Ok(Arc::new(HttpBackend::new(endpoint)))
        }
        _ => {
            let catalog_path = cli.catalog.as_deref().or(provider.catalog.as_deref());
            match catalog_path {
                Some(path) => Ok(Arc::new(CatalogBackend::from_yaml(path, latency)?)),
                None => Ok(Arc::new(CatalogBackend::with_latency(latency))),
            }
        }
    }
}
