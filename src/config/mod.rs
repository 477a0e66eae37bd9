use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;
pub mod watcher;

use crate::cli::Cli;
use crate::domain::Plan;

/// Context variable names the planner injects into every step.
/// They are internal plumbing and never shown to the user.
pub const DEFAULT_RESERVED_WORDS: &[&str] = &["server_url", "server-url"];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub ui: UiSettings,
    /// Sample plans, inline or loaded from `config/plans`
    #[serde(default)]
    pub plans: Vec<Plan>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    #[serde(default = "default_reserved_words")]
    pub reserved_words: Vec<String>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            reserved_words: default_reserved_words(),
        }
    }
}

fn default_reserved_words() -> Vec<String> {
    DEFAULT_RESERVED_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Controls handed to every step card
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UiSettings {
    #[serde(default = "default_enabled")]
    pub edits_enabled: bool,
    #[serde(default = "default_enabled")]
    pub step_delete_enabled: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            edits_enabled: true,
            step_delete_enabled: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_root(config_path);

        let s = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.load_plans_from_dir(&root.join("config/plans"))?;
        settings.validate()?;

        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("planview");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.load_plans_from_dir(&Path::new(root).join("config/plans"))?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    fn load_plans_from_dir(&mut self, dir: &Path) -> Result<(), anyhow::Error> {
        let pattern = format!("{}/*", dir.display());
        let mut paths: Vec<_> = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        paths.sort();

        for path in paths {
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !matches!(ext, "json" | "yaml" | "yml") {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let plan: Plan = if ext == "json" {
                serde_json::from_str(&content)?
            } else {
                serde_yaml::from_str(&content)?
            };
            tracing::debug!("Loaded plan '{}' from {}", plan.name, path.display());
            self.plans.push(plan);
        }
        Ok(())
    }
}

/// Directory that relative config paths (such as `config/plans`) resolve against
pub fn config_root(config_path: &Path) -> std::path::PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_defaults() {
        let planner = PlannerSettings::default();
        assert_eq!(planner.reserved_words, vec!["server_url", "server-url"]);

        let ui = UiSettings::default();
        assert!(ui.edits_enabled);
        assert!(ui.step_delete_enabled);
    }

    #[test]
    fn test_config_root() {
        assert_eq!(config_root(Path::new("planview.toml")), Path::new("."));
        assert_eq!(config_root(Path::new("conf/planview.toml")), Path::new("conf"));
    }
}
