//! User configuration.
//!
//! Every field of the TOML file is optional. Missing fields keep their
//! defaults, and `[keybindings]` entries are merged over the default table
//! rather than replacing it. An empty command string unbinds a key.
//!
//! ```toml
//! default_mode = "manual"
//! low_time_warning = 10
//! time_increment = 15
//! beep = false
//!
//! [keybindings]
//! n = "next"
//! b = ""
//! ```

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use workout_timer_core::{Mode, command};

/// Directory under the platform config dir.
const APP_DIR: &str = "workout-timer";
const CONFIG_FILE: &str = "config.toml";

/// Keys handled before the keybinding table is consulted.
const RESERVED_KEYS: [&str; 2] = ["ctrl+c", "esc"];

const DEFAULT_LOW_TIME_WARNING: Duration = Duration::from_secs(30);
const DEFAULT_TIME_INCREMENT: Duration = Duration::from_secs(30);

const DEFAULT_KEYBINDINGS: [(&str, &str); 11] = [
    ("enter", "next"),
    ("space", "pause"),
    ("p", "pause"),
    ("s", "start"),
    ("+", "add"),
    ("-", "subtract"),
    ("b", "back"),
    ("l", "lap"),
    ("?", "help"),
    (":", "prompt"),
    ("q", "quit"),
];

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML or has unexpected fields.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A keybinding names a reserved key or an unparseable command.
    #[error("invalid keybinding {key:?}: {reason}")]
    InvalidKeybinding {
        /// Key name from the table.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Resolved configuration consumed by the App.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mode for `set` commands that do not name one.
    pub default_mode: Mode,
    /// Remaining time below which the display warns.
    pub low_time_warning: Duration,
    /// Step for `add`/`subtract` without an argument.
    pub time_increment: Duration,
    /// Ring the bell on low-time entry and completion.
    pub beep: bool,
    /// Key name to command string.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            low_time_warning: DEFAULT_LOW_TIME_WARNING,
            time_increment: DEFAULT_TIME_INCREMENT,
            beep: true,
            keybindings: DEFAULT_KEYBINDINGS
                .iter()
                .map(|(key, command)| ((*key).to_string(), (*command).to_string()))
                .collect(),
        }
    }
}

/// On-disk shape. Durations are whole seconds.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    default_mode: Option<Mode>,
    low_time_warning: Option<u64>,
    time_increment: Option<u64>,
    beep: Option<bool>,
    keybindings: BTreeMap<String, String>,
}

impl Config {
    /// Default config file location, `$XDG_CONFIG_HOME/workout-timer/config.toml`
    /// or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is tried and defaults are used if it does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                },
            },
        }
    }

    /// Read and parse a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(mode) = file.default_mode {
            config.default_mode = mode;
        }
        if let Some(secs) = file.low_time_warning {
            config.low_time_warning = Duration::from_secs(secs);
        }
        if let Some(secs) = file.time_increment {
            config.time_increment = Duration::from_secs(secs);
        }
        if let Some(beep) = file.beep {
            config.beep = beep;
        }

        for (key, command) in file.keybindings {
            config.bind(key, command)?;
        }

        Ok(config)
    }

    /// Bind `key` to `command`, or unbind it if `command` is blank.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidKeybinding` for a reserved key or a command
    ///   that does not parse
    pub fn bind(&mut self, key: String, command: String) -> Result<(), ConfigError> {
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::InvalidKeybinding { key, reason: "key is reserved".into() });
        }

        if command.trim().is_empty() {
            self.keybindings.remove(&key);
            return Ok(());
        }

        if let Err(err) = command::parse(&command) {
            return Err(ConfigError::InvalidKeybinding { key, reason: err.to_string() });
        }

        self.keybindings.insert(key, command);
        Ok(())
    }

    /// Command bound to a key name.
    pub fn command_for(&self, key: &str) -> Option<&str> {
        self.keybindings.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.default_mode, Mode::Auto);
        assert_eq!(config.low_time_warning, Duration::from_secs(30));
        assert_eq!(config.time_increment, Duration::from_secs(30));
        assert!(config.beep);
        assert_eq!(config.command_for("enter"), Some("next"));
        assert_eq!(config.command_for("space"), Some("pause"));
        assert_eq!(config.command_for(":"), Some("prompt"));
        assert_eq!(config.command_for("q"), Some("quit"));
        assert_eq!(config.command_for("z"), None);
    }

    #[test]
    fn default_bindings_all_parse() {
        for (key, command) in &Config::default().keybindings {
            assert!(command::parse(command).is_ok(), "binding {key} -> {command}");
        }
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::from_toml(
            "default_mode = \"manual\"\nlow_time_warning = 10\ntime_increment = 15\nbeep = false\n",
        )
        .unwrap();

        assert_eq!(config.default_mode, Mode::Manual);
        assert_eq!(config.low_time_warning, Duration::from_secs(10));
        assert_eq!(config.time_increment, Duration::from_secs(15));
        assert!(!config.beep);
    }

    #[test]
    fn keybindings_merge_over_defaults() {
        let config = Config::from_toml("[keybindings]\nn = \"next\"\nb = \"\"\nq = \"sw\"\n").unwrap();

        assert_eq!(config.command_for("n"), Some("next"));
        assert_eq!(config.command_for("b"), None);
        assert_eq!(config.command_for("q"), Some("sw"));
        assert_eq!(config.command_for("enter"), Some("next"));
    }

    #[test]
    fn invalid_keybindings_rejected() {
        let err = Config::from_toml("[keybindings]\nx = \"jump\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeybinding { ref key, .. } if key == "x"));
        assert_eq!(err.to_string(), "invalid keybinding \"x\": unknown command: jump");

        let err = Config::from_toml("[keybindings]\nesc = \"quit\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeybinding { .. }));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(Config::from_toml("beep = "), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_toml("colour = \"red\""), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_toml("default_mode = \"turbo\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "time_increment = 5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.time_increment, Duration::from_secs(5));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Io { .. })));
    }
}
