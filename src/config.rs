//! Output configuration loaded from `config.toml`.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text between an expression and its result.
    pub separator: String,
    /// Pad expressions so results line up in one column.
    pub align: bool,
    /// Print the separator for lines without a result.
    pub show_blank: bool,
    /// Log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: " │ ".to_string(),
            align: true,
            show_blank: true,
            log_level: None,
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load the config from `explicit` or the user config dir.
///
/// Never fails: problems are returned as warnings alongside the defaults.
pub fn load_config(explicit: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();

    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match user_config_path() {
            Some(p) if p.is_file() => p,
            _ => return (Config::default(), warnings),
        },
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), e));
            return (Config::default(), warnings);
        }
    };

    match parse_config(&content) {
        Ok(config) => (config, warnings),
        Err(e) => {
            warnings.push(format!(
                "Invalid config {}: {}; using defaults",
                path.display(),
                e.message()
            ));
            (Config::default(), warnings)
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "linecalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config("align = false\n").unwrap();
        assert!(!config.align);
        assert_eq!(config.separator, " │ ");
        assert!(config.show_blank);
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "separator = \" => \"\nalign = true\nshow_blank = false\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.separator, " => ");
        assert!(!config.show_blank);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(parse_config("colour = \"red\"\n").is_err());
    }

    #[test]
    fn test_load_invalid_file_warns_and_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "align = \"yes\"").unwrap();
        let (config, warnings) = load_config(Some(file.path()));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_load_missing_explicit_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(Some(&dir.path().join("nope.toml")));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_user_config_path_is_deterministic() {
        // Should never panic and should either be Some(path) or None.
        let _ = user_config_path();
    }
}
