//! Cross-platform config location

use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "ESTATE_CONFIG";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, String> {
        let base = dirs::config_dir().ok_or("Could not determine config directory")?;
        Ok(Self {
            config_dir: base.join("estate"),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

/// Where the config comes from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`; the file must exist.
    Flag(PathBuf),
    /// `ESTATE_CONFIG`; the file must exist.
    Env(PathBuf),
    /// OS config dir; a missing file means built-in defaults.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn resolve(
        flag: Option<PathBuf>,
        env: Option<String>,
        paths: &AppPaths,
    ) -> ConfigSource {
        if let Some(p) = flag {
            return ConfigSource::Flag(p);
        }
        match env {
            Some(p) if !p.trim().is_empty() => ConfigSource::Env(PathBuf::from(p)),
            _ => ConfigSource::Default(paths.config_file()),
        }
    }

    pub fn from_process(flag: Option<PathBuf>, paths: &AppPaths) -> ConfigSource {
        Self::resolve(flag, std::env::var(CONFIG_ENV).ok(), paths)
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::Default(p) => p,
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, ConfigSource::Default(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> AppPaths {
        AppPaths {
            config_dir: PathBuf::from("/cfg/estate"),
        }
    }

    #[test]
    fn flag_wins_over_env() {
        let src = ConfigSource::resolve(
            Some(PathBuf::from("a.json")),
            Some("b.json".to_string()),
            &paths(),
        );
        assert_eq!(src, ConfigSource::Flag(PathBuf::from("a.json")));
        assert!(src.required());
    }

    #[test]
    fn blank_env_falls_back_to_default_location() {
        let src = ConfigSource::resolve(None, Some("  ".to_string()), &paths());
        assert_eq!(src.path(), Path::new("/cfg/estate/config.json"));
        assert!(!src.required());
    }
}
