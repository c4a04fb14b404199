//! Process configuration, resolved once at startup.
//!
//! Precedence: CLI flags (applied in `main`) > environment variables >
//! config file > defaults. Whether `database_path` is set decides which
//! storage variant the process runs with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// SQLite database file. When unset, the process serves from the
    /// transient in-memory store.
    pub database_path: Option<PathBuf>,
    pub bind: Option<String>,
}

impl AppConfig {
    pub fn bind_addr(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let mut config = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    // Environment overrides the config file.
    if let Ok(db_path) = std::env::var("PORTFOLIO_DB_PATH") {
        config.database_path = Some(PathBuf::from(db_path));
    }
    if let Ok(bind) = std::env::var("PORTFOLIO_BIND") {
        config.bind = Some(bind);
    }

    config
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PORTFOLIO_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("PORTFOLIO_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("portfolio-api");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("portfolio-api");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("portfolio-api");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("portfolio-api");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".portfolio")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_reads_file_and_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = \"0.0.0.0:9000\"").unwrap();

        // set_var is unsafe on recent toolchains; config env vars are only
        // touched by this test within the lib test binary.
        unsafe {
            std::env::set_var("PORTFOLIO_CONFIG_PATH", file.path());
            std::env::set_var("PORTFOLIO_DB_PATH", "/tmp/portfolio-test.sqlite");
        }

        let config = load_config();
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(
            config.database_path.as_deref(),
            Some(std::path::Path::new("/tmp/portfolio-test.sqlite"))
        );

        unsafe {
            std::env::remove_var("PORTFOLIO_CONFIG_PATH");
            std::env::remove_var("PORTFOLIO_DB_PATH");
        }
    }

    #[test]
    fn test_default_bind_addr() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), DEFAULT_BIND);
    }
}
