//! Harvest configuration: defaults, optional RON file, command line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use counter_core::Vocabulary;
use counter_engine::{FetchSettings, DEFAULT_QUERY, DEFAULT_SEARCH_ENDPOINT, DEFAULT_TYPES_FILENAME};
use serde::Deserialize;

use crate::cli::Args;

/// Contents of the configuration file. Every field may be omitted.
///
/// ```ron
/// (
///     output_dir: Some("dist"),
///     request_interval_ms: Some(150),
///     extra_forbidden: ["several"],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub query: Option<String>,
    pub search_endpoint: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub request_interval_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_pages: Option<usize>,
    pub extra_forbidden: Vec<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        ron::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Where the corpus comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    Search { endpoint: String, query: String },
    CardFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub source: CorpusSource,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub fetch: FetchSettings,
    pub extra_forbidden: Vec<String>,
    pub print: bool,
}

impl HarvestConfig {
    /// Command line wins over the file, the file wins over built-in defaults.
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let source = match &args.cards {
            Some(path) => CorpusSource::CardFile(path.clone()),
            None => CorpusSource::Search {
                endpoint: file
                    .search_endpoint
                    .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
                query: args
                    .query
                    .clone()
                    .or(file.query)
                    .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            },
        };

        let mut fetch = FetchSettings::default();
        if let Some(ms) = file.request_interval_ms {
            fetch.request_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = file.request_timeout_secs {
            fetch.request_timeout = Duration::from_secs(secs);
        }
        if let Some(max_pages) = file.max_pages {
            fetch.max_pages = max_pages;
        }

        Self {
            source,
            output_dir: args
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from("dist")),
            file_name: args
                .file_name
                .clone()
                .or(file.file_name)
                .unwrap_or_else(|| DEFAULT_TYPES_FILENAME.to_string()),
            fetch,
            extra_forbidden: file.extra_forbidden,
            print: args.print,
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extra_forbidden(self.extra_forbidden.iter().cloned())
    }
}
