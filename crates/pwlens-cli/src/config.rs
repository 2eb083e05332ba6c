use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional user configuration.
///
/// Resolution order for the config file path:
/// 1. `PWLENS_CONFIG` environment variable
/// 2. `<config dir>/pwlens/config.toml` (XDG on Linux)
/// 3. `.pwlens.toml` in the working directory
///
/// A missing file yields defaults; command-line flags win over config
/// values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Report path used when `--report` is not given
    #[serde(default)]
    pub default_report: Option<PathBuf>,

    /// Directory screenshots are written to when `--output` is not given
    #[serde(default)]
    pub screenshot_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        if let Ok(env_path) = std::env::var("PWLENS_CONFIG") {
            return PathBuf::from(env_path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            return config_dir.join("pwlens").join("config.toml");
        }

        PathBuf::from(".pwlens.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert!(config.default_report.is_none());
        assert!(config.screenshot_dir.is_none());
        Ok(())
    }

    #[test]
    fn test_load_parses_fields() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_report = \"./playwright-report\"\nscreenshot_dir = \"./debug\"\n",
        )?;

        let config = Config::load_from(&path)?;
        assert_eq!(
            config.default_report,
            Some(PathBuf::from("./playwright-report"))
        );
        assert_eq!(config.screenshot_dir, Some(PathBuf::from("./debug")));
        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "default_report = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
