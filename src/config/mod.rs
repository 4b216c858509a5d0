use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "arbeitszeit";
const CONFIG_FILE: &str = "arbeitszeit.conf";
const DATABASE_FILE: &str = "arbeitszeit.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Period used by `list`, `summary` and `export` when no filter is given.
    #[serde(default = "default_range")]
    pub default_range: String,
}

fn default_range() -> String {
    "week".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_range: default_range(),
        }
    }
}

impl Config {
    /// `~/.arbeitszeit` (Windows: `%APPDATA%\arbeitszeit`).
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load the configuration file. A missing file gives the defaults; an
    /// unreadable one too, with a warning.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match Self::read_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("{e}; using default configuration"));
                Self::default()
            }
        }
    }

    fn read_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, write the config file (skipped in test
    /// mode) and return the database path to initialize.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(name);
                if p.is_absolute() || is_test { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                default_range: default_range(),
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(db_path)
    }
}
