use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) project_root: Option<PathBuf>,
    /// Journal root relative to the project root
    #[serde(default)]
    pub(crate) journal_dir: Option<PathBuf>,
    /// Session template filename inside `templates/`
    #[serde(default)]
    pub(crate) template: Option<String>,
    #[serde(default)]
    pub(crate) list_limit: Option<usize>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,

    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
}

impl Config {
    /// First readable config file wins; parse failures warn and fall back
    /// to defaults. Runs before logging is set up, so it reports through
    /// stderr directly.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match Self::parse(&content) {
                Ok(mut config) => {
                    config.loaded_from = Some(path);
                    return config;
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // ~/.config/sessionlog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("sessionlog").join("config.toml"));
        }

        // platform config dir, e.g. ~/Library/Application Support on macOS
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("sessionlog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sessionlog.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_listed() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("sessionlog")));
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::parse(
            r#"
project_root = "/work/game"
journal_dir = "notes/journal"
template = "short.md"
list_limit = 3
timezone = "Europe/Berlin"
debug = true
no_color = true
"#,
        )
        .unwrap();
        assert_eq!(config.project_root, Some(PathBuf::from("/work/game")));
        assert_eq!(config.journal_dir, Some(PathBuf::from("notes/journal")));
        assert_eq!(config.template.as_deref(), Some("short.md"));
        assert_eq!(config.list_limit, Some(3));
        assert_eq!(config.timezone.as_deref(), Some("Europe/Berlin"));
        assert!(config.debug);
        assert!(config.no_color);
        assert!(config.loaded_from.is_none());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.project_root.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Config::parse("list_limit = \"many\"").is_err());
    }
}
