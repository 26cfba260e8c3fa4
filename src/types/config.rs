use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub survey: SurveySection,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveySection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SurveySection {
    fn default() -> Self {
        Self {
            name: default_name(),
            language: default_language(),
        }
    }
}

fn default_name() -> String {
    "attachment-survey".to_string()
}

fn default_language() -> String {
    "he".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Content file relative to the survey directory; built-in content when unset.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "poll-data.json".to_string()
}

/// A setting that parsed but is not acceptable. `key` is the dotted TOML
/// path, used to find which config layer set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSetting {
    pub key: &'static str,
    pub reason: String,
}

impl InvalidSetting {
    fn new(key: &'static str, reason: impl Into<String>) -> Self {
        Self {
            key,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl SurveyConfig {
    pub fn validate(&self) -> Result<(), InvalidSetting> {
        if self.survey.name.trim().is_empty() {
            return Err(InvalidSetting::new(
                "survey.name",
                "survey.name must not be empty",
            ));
        }
        if !matches!(self.survey.language.as_str(), "he" | "en") {
            return Err(InvalidSetting::new(
                "survey.language",
                format!("unsupported survey.language: {}", self.survey.language),
            ));
        }
        if let Some(path) = &self.content.path {
            if path.trim().is_empty() {
                return Err(InvalidSetting::new(
                    "content.path",
                    "content.path must not be empty when set",
                ));
            }
        }
        if self.storage.backend == StorageBackend::Json && self.storage.path.trim().is_empty() {
            return Err(InvalidSetting::new(
                "storage.path",
                "storage.path is required for the json backend",
            ));
        }
        Ok(())
    }
}
