use anyhow::Result;
use configparser::ini::Ini;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};

/// Build defaults loaded from `frostpack.conf`, all overridable from the
/// command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub freeze_tool: String,
    pub target_dir: PathBuf,
    pub default_version: String,
    pub default_description: String,
    pub include_modules: Vec<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Config::default();

        // Try to load from config file
        if path.as_ref().exists() {
            let mut ini = Ini::new();
            let loaded = ini.load(path.as_ref().to_string_lossy().as_ref());

            if loaded.is_err() {
                warn!("Failed to load config file: {}", path.as_ref().display());
                return Ok(config);
            }

            if let Some(tool) = ini.get("default", "freeze_tool") {
                let tool = tool.trim().trim_matches('"').to_string();
                if !tool.is_empty() {
                    config.freeze_tool = tool;
                }
            }

            if let Some(dir) = ini.get("default", "target_dir") {
                let dir = dir.trim();
                if !dir.is_empty() {
                    config.target_dir = PathBuf::from(dir);
                }
            }

            if let Some(version) = ini.get("default", "default_version") {
                let version = version.trim();
                if !version.is_empty() {
                    config.default_version = version.to_string();
                }
            }

            if let Some(description) = ini.get("default", "default_description") {
                let description = description.trim();
                if !description.is_empty() {
                    config.default_description = description.to_string();
                }
            }

            // Comma-separated extra forced-include modules
            if let Some(modules) = ini.get("default", "include_modules") {
                config.include_modules = modules
                    .split(',')
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .collect();
            }

            debug!("Config file loaded: {}", path.as_ref().display());
        } else {
            debug!("Config file not found: {}", path.as_ref().display());
        }

        // Environment variable takes precedence over config file
        if let Ok(tool) = env::var("FROSTPACK_FREEZE_TOOL") {
            if !tool.trim().is_empty() {
                config.freeze_tool = tool;
            }
        }

        debug!(
            "build defaults: tool={}, target_dir={}, extra includes={}",
            config.freeze_tool,
            config.target_dir.display(),
            config.include_modules.len()
        );

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            freeze_tool: "cxfreeze".to_string(),
            target_dir: PathBuf::from("build/exe"),
            default_version: "0.1".to_string(),
            default_description: "Frozen application bundle".to_string(),
            include_modules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load("/nonexistent/frostpack-test/frostpack.conf")
            .expect("load should fall back to defaults");
        assert_eq!(config.freeze_tool, "cxfreeze");
        assert_eq!(config.target_dir, PathBuf::from("build/exe"));
        assert!(config.include_modules.is_empty());
    }

    #[test]
    fn test_load_from_ini() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("frostpack.conf");
        fs::write(
            &path,
            "[default]\nfreeze_tool = \"pakfreeze\"\ntarget_dir = dist\ndefault_version = 1.2\ninclude_modules = json, encodings , \n",
        )
        .expect("Failed to write config");

        let config = Config::load(&path).expect("load should succeed");
        assert_eq!(config.freeze_tool, "pakfreeze");
        assert_eq!(config.target_dir, PathBuf::from("dist"));
        assert_eq!(config.default_version, "1.2");
        assert_eq!(config.include_modules, vec!["json", "encodings"]);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("frostpack.conf");
        fs::write(&path, "[default]\nfreeze_tool =\ntarget_dir =  \n").expect("Failed to write config");

        let config = Config::load(&path).expect("load should succeed");
        assert_eq!(config.freeze_tool, "cxfreeze");
        assert_eq!(config.target_dir, PathBuf::from("build/exe"));
    }
}
