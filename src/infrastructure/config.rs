//! Tool configuration
//!
//! Locates the external converter binaries. Values come from an optional TOML
//! file and are then overridden by environment variables.

use crate::domain::CommaRepair;
use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "GDXSPLIT_CONFIG";
pub const GAMS_DIR_ENV: &str = "GDXSPLIT_GAMS_DIR";
pub const LAUNCHER_ENV: &str = "GDXSPLIT_LAUNCHER";

const GDXDUMP_BIN: &str = "gdxdump";
const GAMS_BIN: &str = "gams";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// GAMS system directory; binaries are looked up on PATH when unset
    pub gams_dir: Option<PathBuf>,
    /// Program used to run the GAMS binaries, e.g. `/usr/bin/wine`
    pub launcher: Option<PathBuf>,
    /// Start converters with an empty environment plus `env`
    pub isolate_env: bool,
    pub env: BTreeMap<String, String>,
    /// Extensions of intermediate files removed after a run
    pub cleanup_extensions: Vec<String>,
    pub repair: CommaRepair,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            gams_dir: None,
            launcher: None,
            isolate_env: false,
            env: BTreeMap::new(),
            cleanup_extensions: vec!["gms".to_string(), "lst".to_string()],
            repair: CommaRepair::default(),
        }
    }
}

impl ToolConfig {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SplitError::ConfigNotFound(path.to_path_buf())
            } else {
                SplitError::Io(e)
            }
        })?;

        Self::from_toml(&contents).map_err(|e| {
            SplitError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolve config from an explicit path, `GDXSPLIT_CONFIG`, or defaults,
    /// then apply environment overrides
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// normal use)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(GAMS_DIR_ENV).filter(|v| !v.is_empty()) {
            self.gams_dir = Some(PathBuf::from(dir));
        }
        if let Some(launcher) = lookup(LAUNCHER_ENV).filter(|v| !v.is_empty()) {
            self.launcher = Some(PathBuf::from(launcher));
        }
    }

    pub fn gdxdump_path(&self) -> PathBuf {
        self.tool_path(GDXDUMP_BIN)
    }

    pub fn gams_path(&self) -> PathBuf {
        self.tool_path(GAMS_BIN)
    }

    fn tool_path(&self, name: &str) -> PathBuf {
        match &self.gams_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.gams_dir, None);
        assert_eq!(config.launcher, None);
        assert!(!config.isolate_env);
        assert_eq!(config.cleanup_extensions, vec!["gms", "lst"]);
        assert_eq!(config.repair, CommaRepair::Trailing);
        assert_eq!(config.gdxdump_path(), PathBuf::from("gdxdump"));
        assert_eq!(config.gams_path(), PathBuf::from("gams"));
    }

    #[test]
    fn test_parse_full_config() {
        let config = ToolConfig::from_toml(
            r#"
gams_dir = "/opt/gams/24.0"
launcher = "/usr/bin/wine"
isolate_env = true
cleanup_extensions = ["gms", "lst", "log"]
repair = "all"

[env]
PATH = "/"
"#,
        )
        .unwrap();

        assert_eq!(config.gams_dir, Some(PathBuf::from("/opt/gams/24.0")));
        assert_eq!(config.launcher, Some(PathBuf::from("/usr/bin/wine")));
        assert!(config.isolate_env);
        assert_eq!(config.env.get("PATH").map(String::as_str), Some("/"));
        assert_eq!(config.cleanup_extensions.len(), 3);
        assert_eq!(config.repair, CommaRepair::All);
        assert_eq!(
            config.gdxdump_path(),
            PathBuf::from("/opt/gams/24.0/gdxdump")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ToolConfig::from_toml("launcher = \"wine\"\n").unwrap();
        assert_eq!(config.launcher, Some(PathBuf::from("wine")));
        assert_eq!(config.cleanup_extensions, vec!["gms", "lst"]);
    }

    #[test]
    fn test_invalid_repair_rejected() {
        assert!(ToolConfig::from_toml("repair = \"first\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ToolConfig::load_from_file(&temp.path().join("tools.toml"));
        match result.unwrap_err() {
            SplitError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.toml");
        fs::write(&path, "gams_dir = [").unwrap();

        match ToolConfig::load_from_file(&path).unwrap_err() {
            SplitError::Config(msg) => assert!(msg.contains("tools.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ToolConfig::default();
        config.apply_env_overrides(|key| match key {
            GAMS_DIR_ENV => Some("/gams".to_string()),
            LAUNCHER_ENV => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.gams_dir, Some(PathBuf::from("/gams")));
        // Empty values are ignored
        assert_eq!(config.launcher, None);
    }
}
