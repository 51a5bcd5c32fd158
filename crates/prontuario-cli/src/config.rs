use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Schema version. Missing or 0 = unversioned file, stamped as v1.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub output: OutputFormat,
    /// Text output lists only vitals that are not normal.
    #[serde(default)]
    pub flagged_only: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output: OutputFormat::Text,
            flagged_only: false,
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("prontuario").join("config.json"))
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist.
pub fn load_config(path: &Path) -> eyre::Result<CliConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CliConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<CliConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("configVersion") {
        None => 0,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("configVersion {v} is not a valid version"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: CliConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "configVersion {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update prontuario."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // Hand-written files may omit the version; missing fields take their
    // defaults, so they are v1 as they stand.
    if from_version < 1 {
        obj.insert(
            "configVersion".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::debug!("stamped unversioned config as v{CURRENT_VERSION}");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &CliConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
