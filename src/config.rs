// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Loaded once at startup, from a JSON file or from the environment, and
//! validated there so malformed values never reach a query. Nothing in the
//! engines reads the environment itself; they are handed a config.
//!
//! # Environment variables
//!
//! | Variable                        | Field             | Default        |
//! |---------------------------------|-------------------|----------------|
//! | `AZURE_SEARCH_SERVICE`          | `service`         | required       |
//! | `AZURE_SEARCH_INDEX`            | `index`           | required       |
//! | `AZURE_SEARCH_KEY`              | `api_key`         | empty          |
//! | `AZURE_SEARCH_API_VERSION`      | `api_version`     | `2017-11-11`   |
//! | `AZURE_SEARCH_SCORING_PROFILE`  | `scoring_profile` | empty          |
//! | `AZURE_SEARCH_WORD_FUZZINESS`   | `query.fuzziness` | `1`            |
//! | `AZURE_SEARCH_EXACTNESS_BOOST`  | `query.exactness_boost` | `4`      |
//! | `SEARCH_PAGE_SIZE`              | `page_size`       | `10`           |

use crate::error::ConfigError;
use crate::query::QueryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Highest edit distance the index's fuzzy operator accepts.
pub const MAX_FUZZINESS: u8 = 2;

pub const DEFAULT_API_VERSION: &str = "2017-11-11";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search service name, the first label of its hostname.
    pub service: String,
    /// Index name within the service.
    pub index: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub scoring_profile: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub query: QueryConfig,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl SearchConfig {
    /// Config with defaults for everything but the service and index.
    pub fn new(service: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            index: index.into(),
            api_key: String::new(),
            api_version: default_api_version(),
            scoring_profile: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            query: QueryConfig::default(),
        }
    }

    /// Read and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;
        config.validate()?;
        debug!(path = %shown, "loaded search config");
        Ok(config)
    }

    /// Read and validate config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read and validate config through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let mut config = Self::new(
            required("AZURE_SEARCH_SERVICE")?,
            required("AZURE_SEARCH_INDEX")?,
        );
        if let Some(key) = lookup("AZURE_SEARCH_KEY") {
            config.api_key = key;
        }
        if let Some(version) = lookup("AZURE_SEARCH_API_VERSION") {
            config.api_version = version;
        }
        if let Some(profile) = lookup("AZURE_SEARCH_SCORING_PROFILE") {
            config.scoring_profile = profile;
        }
        if let Some(value) = lookup("AZURE_SEARCH_WORD_FUZZINESS") {
            config.query.fuzziness = parse_number("AZURE_SEARCH_WORD_FUZZINESS", &value)?;
        }
        if let Some(value) = lookup("AZURE_SEARCH_EXACTNESS_BOOST") {
            config.query.exactness_boost = parse_number("AZURE_SEARCH_EXACTNESS_BOOST", &value)?;
        }
        if let Some(value) = lookup("SEARCH_PAGE_SIZE") {
            config.page_size = parse_number("SEARCH_PAGE_SIZE", &value)?;
        }

        config.validate()?;
        debug!(service = %config.service, index = %config.index, "loaded search config from environment");
        Ok(config)
    }

    /// Range checks that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::OutOfRange {
                key: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.query.fuzziness > MAX_FUZZINESS {
            return Err(ConfigError::OutOfRange {
                key: "fuzziness",
                reason: format!("{} exceeds {}", self.query.fuzziness, MAX_FUZZINESS),
            });
        }
        let boost = self.query.exactness_boost;
        if !boost.is_finite() || boost <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "exactness_boost",
                reason: format!("{} is not a positive number", boost),
            });
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotNumeric {
            key,
            value: value.to_string(),
        })
}
