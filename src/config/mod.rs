use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV table of log entries
    pub entries_file: String,
    /// SQLite internal journal
    pub journal: String,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default = "default_template_sheet")]
    pub template_sheet: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_scan_rows")]
    pub scan_rows: u32,
    #[serde(default = "default_in_place_scan_rows")]
    pub in_place_scan_rows: u32,
    #[serde(default = "default_activity")]
    pub default_activity: String,
    #[serde(default)]
    pub git_author: Option<String>,
    #[serde(default)]
    pub git_scan_dir: Option<String>,
}

fn default_template_sheet() -> String {
    "Logs".to_string()
}
fn default_output_file() -> String {
    "Filled_Logbook.xlsx".to_string()
}
fn default_scan_rows() -> u32 {
    100
}
fn default_in_place_scan_rows() -> u32 {
    1000
}
fn default_activity() -> String {
    "Other".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_file: Self::entries_path().to_string_lossy().to_string(),
            journal: Self::journal_path().to_string_lossy().to_string(),
            template: None,
            template_sheet: default_template_sheet(),
            output_file: default_output_file(),
            scan_rows: default_scan_rows(),
            in_place_scan_rows: default_in_place_scan_rows(),
            default_activity: default_activity(),
            git_author: None,
            git_scan_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklogbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklogbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklogbook.conf")
    }

    pub fn entries_path() -> PathBuf {
        Self::config_dir().join("logs.csv")
    }

    pub fn journal_path() -> PathBuf {
        Self::config_dir().join("worklogbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn entries_file_path(&self) -> PathBuf {
        expand_tilde(&self.entries_file)
    }

    pub fn journal_file_path(&self) -> PathBuf {
        expand_tilde(&self.journal)
    }

    pub fn template_path(&self) -> Option<PathBuf> {
        self.template.as_deref().map(expand_tilde)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_file)
    }

    /// Create the config directory and, unless `is_test`, write the config
    /// file. Returns the configuration that was set up.
    pub fn init_all(
        entries: Option<String>,
        journal: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load().unwrap_or_default();
        if let Some(e) = entries {
            config.entries_file = e;
        }
        if let Some(j) = journal {
            config.journal = j;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
