use crate::error::{Result, SurveyError};
use crate::types::config::{InvalidSetting, SurveyConfig};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "survey.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".survey/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/survey/config.toml";

/// Effective configuration and the files it was assembled from, lowest
/// precedence first.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: SurveyConfig,
    pub sources: Vec<PathBuf>,
    pub has_survey_file: bool,
}

struct Layer {
    path: PathBuf,
    value: Value,
}

impl Layer {
    fn read(path: PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let value = toml::from_str(&content)
            .map_err(|e| SurveyError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        Ok(Self { path, value })
    }

    /// Whether this file sets a dotted key such as `storage.path`.
    fn sets(&self, key: &str) -> bool {
        key.split('.')
            .try_fold(&self.value, |value, part| value.get(part))
            .is_some()
    }
}

/// Layers the global config, `survey.toml` and `.survey/local.toml` found
/// for `root`. Missing files are skipped; with none present the defaults
/// apply.
pub fn load_config(root: &Path) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LoadedConfig> {
    let survey_file = root.join(DEFAULT_CONFIG_FILE);
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([survey_file.clone(), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .map(Layer::read)
        .collect::<Result<Vec<_>>>()?;

    let mut merged = Value::Table(Map::new());
    for layer in &layers {
        debug!(path = %layer.path.display(), "applying config layer");
        merge_toml(&mut merged, layer.value.clone());
    }

    let config: SurveyConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SurveyError::ConfigParse(blame_shape(&layers, e)))?;
    config
        .validate()
        .map_err(|invalid| SurveyError::ConfigParse(blame_setting(&layers, &invalid)))?;

    Ok(LoadedConfig {
        config,
        has_survey_file: layers.iter().any(|layer| layer.path == survey_file),
        sources: layers.into_iter().map(|layer| layer.path).collect(),
    })
}

/// Every layer is a valid partial config on its own, so the highest layer
/// that fails to deserialize alone is the one carrying the bad value.
fn blame_shape(layers: &[Layer], merged_error: toml::de::Error) -> String {
    layers
        .iter()
        .rev()
        .find_map(|layer| {
            layer
                .value
                .clone()
                .try_into::<SurveyConfig>()
                .err()
                .map(|e| format!("{}: {}", layer.path.display(), e))
        })
        .unwrap_or_else(|| merged_error.to_string())
}

fn blame_setting(layers: &[Layer], invalid: &InvalidSetting) -> String {
    match layers.iter().rev().find(|layer| layer.sets(invalid.key)) {
        Some(layer) => format!("{}: {}", layer.path.display(), invalid),
        None => format!("built-in defaults: {invalid}"),
    }
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Default `survey.toml` written by `survey init`.
pub fn default_config_toml(content_file: &str) -> String {
    format!(
        r#"[survey]
name = "attachment-survey"
language = "he"

[content]
path = "{content_file}"

[storage]
backend = "json"
path = "poll-data.json"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::StorageBackend;
    use std::fs;
    use tempfile::TempDir;

    fn write_local(root: &Path, body: &str) {
        fs::create_dir_all(root.join(".survey")).expect("local dir should create");
        fs::write(root.join(DEFAULT_LOCAL_FILE), body).expect("local override should write");
    }

    #[test]
    fn empty_directory_yields_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let loaded = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(!loaded.has_survey_file);
        assert!(loaded.sources.is_empty());
        assert_eq!(loaded.config.storage.path, "poll-data.json");
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[survey]
language = "en"

[storage]
path = "global.json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[survey]
name = "clinic"

[storage]
path = "responses.json"
"#,
        )
        .expect("repo config should write");

        write_local(
            root.path(),
            r#"
[storage]
backend = "memory"
"#,
        );

        let loaded =
            load_config_with_global(root.path(), Some(&global_path)).expect("load should succeed");
        let cfg = &loaded.config;

        assert!(loaded.has_survey_file);
        assert_eq!(loaded.sources.len(), 3);
        assert_eq!(loaded.sources[0], global_path);
        assert_eq!(cfg.survey.name, "clinic");
        assert_eq!(cfg.survey.language, "en");
        assert_eq!(cfg.storage.path, "responses.json");
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn global_and_local_layers_apply_without_survey_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[survey]\nlanguage = \"en\"\n").expect("global should write");
        write_local(root.path(), "[storage]\npath = \"local.json\"\n");

        let loaded =
            load_config_with_global(root.path(), Some(&global_path)).expect("load should succeed");
        assert!(!loaded.has_survey_file);
        assert_eq!(loaded.sources.len(), 2);
        assert_eq!(loaded.config.survey.language, "en");
        assert_eq!(loaded.config.storage.path, "local.json");
    }

    #[test]
    fn invalid_setting_names_the_layer_that_set_it() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[survey]\nlanguage = \"en\"\n",
        )
        .expect("config should write");
        write_local(root.path(), "[survey]\nlanguage = \"fr\"\n");

        let err = load_config_with_global(root.path(), None).expect_err("validation should fail");
        let message = err.to_string();
        assert!(message.contains("local.toml"), "{message}");
        assert!(message.contains("unsupported survey.language: fr"), "{message}");
        assert!(!message.contains("survey.toml:"), "{message}");
    }

    #[test]
    fn wrongly_typed_value_names_the_layer_that_set_it() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[storage]\nbackend = \"mongodb\"\n").expect("global should write");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[survey]\nname = \"clinic\"\n")
            .expect("config should write");

        let err = load_config_with_global(root.path(), Some(&global_path))
            .expect_err("unknown backend should fail");
        assert!(err.to_string().contains(&global_path.display().to_string()));
    }

    #[test]
    fn load_config_reports_invalid_toml_with_path() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[survey\nname = 1")
            .expect("config should write");
        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn default_config_round_trips_through_loader() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            default_config_toml("content.toml"),
        )
        .expect("config should write");
        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .config;
        assert_eq!(cfg.content.path.as_deref(), Some("content.toml"));
        assert_eq!(cfg.storage.backend, StorageBackend::Json);
    }
}
