use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Employee id the CLI acts as when no --me override is given.
    pub operator_id: String,
    /// Role of the operator: ADMIN, MANAGER or EMPLOYEE.
    pub operator_role: String,
    #[serde(default = "default_reason")]
    pub default_reason: String,
    #[serde(default = "default_show_weekend")]
    pub show_weekend: bool,
}

fn default_reason() -> String {
    "Self applied".to_string()
}
fn default_show_weekend() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            operator_id: "E0001".to_string(),
            operator_role: "EMPLOYEE".to_string(),
            default_reason: default_reason(),
            show_weekend: default_show_weekend(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("leavelogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".leavelogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leavelogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("leavelogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Check the loaded file for missing or invalid fields.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.trim().is_empty() {
            problems.push("database: empty path".to_string());
        }
        if self.operator_id.trim().is_empty() {
            problems.push("operator_id: empty".to_string());
        }
        if crate::models::role::Role::from_cli_str(&self.operator_role).is_none() {
            problems.push(format!(
                "operator_role: '{}' is not ADMIN, MANAGER or EMPLOYEE",
                self.operator_role
            ));
        }

        problems
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
