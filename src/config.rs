//! Configuration management for the router network

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Runtime configuration; any field missing from a config file keeps its default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,

    /// Query batches at least this long are answered in parallel
    pub parallel_query_threshold: usize,

    /// Cluster count overriding the one given in the input
    pub cluster_count: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_query_threshold: 1000,
            cluster_count: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        threads: usize,
        parallel_query_threshold: usize,
        cluster_count: Option<usize>,
    ) -> Self {
        Self {
            threads,
            parallel_query_threshold,
            cluster_count,
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Worker thread count with 0 resolved to the number of cores
    pub fn effective_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cluster_count": 3 }}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config, Config::new(0, 1000, Some(3)));
    }

    #[test]
    fn zero_threads_means_all_cores() {
        assert!(Config::default().effective_threads() >= 1);
        assert_eq!(Config::new(3, 1, None).effective_threads(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::from_json_file("/nonexistent/network.json").is_err());
    }
}
