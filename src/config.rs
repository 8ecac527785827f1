use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::ClientSettings;
use crate::consts::APP_DIR;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) session_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) template: Option<PathBuf>,
    #[serde(default)]
    pub(crate) extension: Option<String>,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    /// Runs before logging is set up, so problems go straight to stderr.
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path) {
                return config;
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(Self {
                source: Some(path.to_path_buf()),
                ..config
            }),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aoc-cli/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/aoc-cli/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aoc-cli.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }

    /// `extension` only applies to a custom `template`
    pub(crate) fn ignored_extension(&self) -> Option<&str> {
        match self.template {
            Some(_) => None,
            None => self.extension.as_deref(),
        }
    }

    pub(crate) fn client_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::default();
        if let Some(ref base_url) = self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(secs) = self.timeout_secs.filter(|&secs| secs > 0) {
            settings.timeout = Duration::from_secs(secs);
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains(APP_DIR)));
    }

    #[test]
    fn parses_every_key() {
        let config: Config = toml::from_str(
            r#"
debug = true
session_file = "/tmp/aoc/session.txt"
base_url = "http://localhost:9000"
user_agent = "me@example.com"
timeout_secs = 5
template = "/tmp/aoc/template.py"
extension = "py"
"#,
        )
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/aoc/session.txt")));
        assert_eq!(config.extension.as_deref(), Some("py"));

        let settings = config.client_settings();
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.user_agent, "me@example.com");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_config_keeps_client_defaults() {
        let settings = Config::default().client_settings();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn zero_timeout_is_ignored() {
        let config = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.client_settings().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn extension_without_template_is_reported() {
        let config = Config {
            extension: Some("py".to_string()),
            ..Config::default()
        };
        assert_eq!(config.ignored_extension(), Some("py"));

        let config = Config {
            template: Some(PathBuf::from("/tmp/aoc/template.py")),
            ..config
        };
        assert_eq!(config.ignored_extension(), None);
        assert_eq!(Config::default().ignored_extension(), None);
    }

    #[test]
    fn invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(Config::load_from(&path).is_none());
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn loaded_config_remembers_its_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "extension = \"py\"").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }
}
