pub mod keybindings;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{
        elapsed::Epoch,
        passcode::Passcode,
        timer::{IntervalMs, MEMORIES_ADVANCE_DEFAULT},
    },
    utils,
};

pub use keybindings::{Action, KeyBindings};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MemoriesConfig {
    #[serde(default)]
    pub captions: Vec<String>,
    #[serde(default = "MemoriesConfig::default_interval_ms")]
    pub interval_ms: IntervalMs,
}

impl MemoriesConfig {
    fn default_interval_ms() -> IntervalMs {
        MEMORIES_ADVANCE_DEFAULT
    }
}

impl Default for MemoriesConfig {
    fn default() -> Self {
        Self {
            captions: vec![],
            interval_ms: Self::default_interval_ms(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct HeartsConfig {
    #[serde(default = "HeartsConfig::enabled_by_default")]
    pub enabled: bool,
}

impl HeartsConfig {
    fn enabled_by_default() -> bool {
        true
    }
}

impl Default for HeartsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "ClockConfig::default_format")]
    pub format: String,
}

impl ClockConfig {
    fn default_format() -> String {
        "%-I:%M:%S %p".to_string()
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub passcode: Passcode,
    #[serde(default)]
    pub epoch: Epoch,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub letter: Vec<String>,
    #[serde(default)]
    pub memories: MemoriesConfig,
    #[serde(default)]
    pub hearts: HeartsConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Embedded defaults overlaid with the optional user files in the
    /// config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;

        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("loading configuration from {}", path.display());
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "no configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config
        cfg.keybindings.merge_defaults(&default_config.keybindings);

        Ok(cfg)
    }
}
