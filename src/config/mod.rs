use crate::core::clock::parse_utc_offset;
use crate::errors::{AppError, AppResult};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub current_user: Option<String>,
    /// Fixed UTC offset ("+02:00") used to decide what "today" is.
    /// When absent the local zone of the machine is used.
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            current_user: None,
            utc_offset: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RHABIT_HOME") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhabit")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rhabit")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabit.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhabit.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Parsed `utc_offset`, if configured.
    pub fn offset(&self) -> AppResult<Option<FixedOffset>> {
        self.utc_offset
            .as_deref()
            .map(parse_utc_offset)
            .transpose()
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        // Keep the fields a previous init may have set
        let mut config = Self::load().unwrap_or_default();
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("`database` must not be empty".into()));
        }
        self.offset()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert!(cfg.current_user.is_none());
        assert!(cfg.utc_offset.is_none());
        assert_eq!(cfg.separator_char, "-");
    }

    #[test]
    fn offset_is_parsed_and_validated() {
        let mut cfg = Config {
            utc_offset: Some("+01:00".into()),
            ..Config::default()
        };
        assert_eq!(cfg.offset().unwrap().unwrap().local_minus_utc(), 3600);

        cfg.utc_offset = Some("bogus".into());
        assert!(matches!(cfg.validate(), Err(AppError::InvalidOffset(_))));
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let path = env::temp_dir().join("rhabit_no_such_config.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.current_user.is_none());
    }

    #[test]
    fn load_from_broken_file_is_an_error() {
        let path = env::temp_dir().join("rhabit_broken_config.conf");
        fs::write(&path, "database: [unclosed").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::ConfigParse(_))
        ));
        fs::remove_file(&path).ok();
    }
}
