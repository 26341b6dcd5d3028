use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Schema version written by this build. Raising it means adding a step
/// to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const DEFAULT_TRAINER_NAME: &str = "Athletic Trainer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocnoteConfig {
    /// Absent in files written before versioning, read as 0.
    #[serde(default)]
    pub config_version: u32,
    /// Shown in the home screen greeting.
    pub trainer_name: String,
    /// v1 and later.
    #[serde(default)]
    pub log_format: LogFormat,
    pub created_at: jiff::Timestamp,
}

impl Default for DocnoteConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            trainer_name: DEFAULT_TRAINER_NAME.to_string(),
            log_format: LogFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.docnote.app"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// A config read from disk, plus the version it was upgraded from if the
/// file was older than [`CURRENT_VERSION`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: DocnoteConfig,
    pub migrated_from: Option<u32>,
}

/// Load the user's config, falling back to defaults when none is saved.
pub fn load_config() -> eyre::Result<LoadedConfig> {
    load_config_at(&config_path()?)
}

pub fn load_config_at(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: DocnoteConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("cannot read {}: {e}", path.display()))?;

    // Versions are checked on the raw value; older shapes may not deserialize.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let version = json
        .get("config_version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0) as u32;

    let config = serde_json::from_value(migrate(json, version)?)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (version < CURRENT_VERSION).then_some(version),
    })
}

/// Bring a raw config from `from_version` up to [`CURRENT_VERSION`], one
/// step at a time.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}); \
             upgrade DocNote to read it"
        ));
    }

    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config must be a JSON object"))?;
        obj.entry("log_format")
            .or_insert_with(|| serde_json::Value::String("pretty".to_string()));
        obj.insert("config_version".to_string(), 1.into());
    }

    Ok(json)
}

pub fn save_config(config: &DocnoteConfig) -> eyre::Result<PathBuf> {
    save_config_at(&config_dir()?, config)
}

/// Write `config.json` into `dir` at [`CURRENT_VERSION`].
pub fn save_config_at(dir: &Path, config: &DocnoteConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let config = DocnoteConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let path = dir.join("config.json");
    let staging = dir.join("config.json.tmp");
    std::fs::write(&staging, serde_json::to_string_pretty(&config)?)?;

    // Owner-only: the file carries the trainer's name.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&staging, &path)?;
    tracing::debug!(path = %path.display(), "config written");
    Ok(path)
}
