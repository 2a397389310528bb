//! Configuration file handling.
//!
//! Reads from `~/.config/bwtui/bwtui.toml`. The file is optional and never
//! written by bwtui.

use anyhow::{Context, Result};
use bwtui_core::feedback::DEFAULT_TIMEOUT;
use bwtui_core::{ClipboardSink, CommandClipboard, ConfigError, KeyBindings, SystemClipboard};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Program used to query the vault.
    #[serde(default = "default_bw_command")]
    pub bw_command: String,
    /// How long feedback messages stay visible.
    #[serde(default = "default_feedback_timeout_ms")]
    pub feedback_timeout_ms: u64,
    /// Pipe copied text into this command instead of using the system clipboard.
    #[serde(default)]
    pub clipboard_command: Option<Vec<String>>,
    /// Key bindings.
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_bw_command() -> String {
    "bw".to_string()
}

fn default_feedback_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bw_command: default_bw_command(),
            feedback_timeout_ms: default_feedback_timeout_ms(),
            clipboard_command: None,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// If `custom_path` is provided, the file must exist. Otherwise the default
    /// XDG location is tried and defaults are used when it is absent.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        match custom_path {
            Some(path) => Self::load_from(&path, true),
            None => Self::load_from(&Self::config_path()?, false),
        }
    }

    fn load_from(config_path: &Path, required: bool) -> Result<Self> {
        if !config_path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            tracing::info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        tracing::info!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.keys.validate()?;
        if matches!(&self.clipboard_command, Some(argv) if argv.is_empty()) {
            return Err(ConfigError::EmptyClipboardCommand);
        }
        Ok(())
    }

    pub fn feedback_timeout(&self) -> Duration {
        Duration::from_millis(self.feedback_timeout_ms)
    }

    /// Clipboard sink selected by this configuration.
    pub fn clipboard(&self) -> Box<dyn ClipboardSink> {
        match self.clipboard_command.as_deref().and_then(CommandClipboard::from_argv) {
            Some(command) => Box::new(command),
            None => Box::new(SystemClipboard::new()),
        }
    }

    /// Get the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("bwtui").join("bwtui.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().feedback_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(
            Config::parse("bw_command = \"bw\"").unwrap().feedback_timeout(),
            DEFAULT_TIMEOUT
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::parse(
            r#"
bw_command = "/opt/bw"
feedback_timeout_ms = 500
clipboard_command = ["xsel", "-b"]

[keys]
copy-password = "y"
move-down = "n"
"#,
        )
        .unwrap();

        assert_eq!(config.bw_command, "/opt/bw");
        assert_eq!(config.feedback_timeout(), Duration::from_millis(500));
        assert_eq!(
            config.clipboard_command,
            Some(vec!["xsel".to_string(), "-b".to_string()])
        );
        assert_eq!(config.keys.copy_password, 'y');
        assert_eq!(config.keys.move_down, 'n');
        assert_eq!(config.keys.move_up, 'k');
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = Config::parse("[keys]\nquit = \"p\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("bound to both"), "{err:#}");
    }

    #[test]
    fn unknown_key_name_is_rejected() {
        assert!(Config::parse("[keys]\nexplode = \"x\"\n").is_err());
    }

    #[test]
    fn empty_clipboard_command_is_rejected() {
        assert!(Config::parse("clipboard_command = []\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(Some(path.clone())).is_err());
        assert_eq!(Config::load_from(&path, false).unwrap(), Config::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feedback_timeout_ms = 1500").unwrap();

        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.feedback_timeout_ms, 1500);
    }

    #[test]
    fn parse_errors_mention_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feedback_timeout_ms = \"soon\"").unwrap();

        let err = Config::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"), "{err}");
    }
}
