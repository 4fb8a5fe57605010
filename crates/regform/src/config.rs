// File: src/config.rs
// Purpose: Form configuration parsing from regform.toml

use anyhow::{Context, Result};
use regform_validation::AgePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Calling code prepended to the mobile number on submit
    #[serde(default = "default_country_code")]
    pub country_code: String,

    #[serde(default = "default_minimum_age")]
    pub minimum_age_years: u32,

    /// How the minimum-age cutoff is computed
    #[serde(default)]
    pub age_policy: AgePolicy,

    /// Message handed to the notifier after a successful submit
    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default = "default_comments_max_length")]
    pub comments_max_length: usize,
}

fn default_country_code() -> String {
    "+92".to_string()
}

fn default_minimum_age() -> u32 {
    18
}

fn default_success_message() -> String {
    "Your information has been submitted successfully!".to_string()
}

fn default_comments_max_length() -> usize {
    500
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            minimum_age_years: default_minimum_age(),
            age_policy: AgePolicy::default(),
            success_message: default_success_message(),
            comments_max_length: default_comments_max_length(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content)?;
        Ok(config)
    }
}
