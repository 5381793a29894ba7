use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config TOML {:?}", path))
    }
}

/// Substrings that identify the router's summary lines.
#[derive(Debug, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_routable_marker")]
    pub routable_nets: String,
    #[serde(default = "default_routed_marker")]
    pub routed_nets: String,
    #[serde(default = "default_error_marker")]
    pub error_nets: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            routable_nets: default_routable_marker(),
            routed_nets: default_routed_marker(),
            error_nets: default_error_marker(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_strip_pattern")]
    pub strip_pattern: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strip_pattern: default_strip_pattern(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub malformed_marker: MalformedPolicy,
}

/// What to do with a summary line whose counter cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop scanning and keep whatever was collected so far.
    #[default]
    Abort,
    /// Ignore the line and keep the previous value.
    Skip,
}

fn default_routable_marker() -> String {
    "# of routable nets".to_string()
}

fn default_routed_marker() -> String {
    "# of fully routed nets".to_string()
}

fn default_error_marker() -> String {
    "# of nets with routing errors".to_string()
}

fn default_strip_pattern() -> String {
    ".log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.markers.routable_nets, "# of routable nets");
        assert_eq!(config.markers.routed_nets, "# of fully routed nets");
        assert_eq!(config.markers.error_nets, "# of nets with routing errors");
        assert_eq!(config.output.strip_pattern, ".log");
        assert_eq!(config.scan.malformed_marker, MalformedPolicy::Abort);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.markers.routed_nets, "# of fully routed nets");
        assert_eq!(config.output.strip_pattern, ".log");
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [markers]
            error_nets = "nets with DRC violations"

            [scan]
            malformed_marker = "skip"
            "#,
        )
        .unwrap();
        assert_eq!(config.markers.error_nets, "nets with DRC violations");
        assert_eq!(config.markers.routable_nets, "# of routable nets");
        assert_eq!(config.scan.malformed_marker, MalformedPolicy::Skip);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<Config, _> = toml::from_str("[scan]\nmalformed_marker = \"retry\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route_check.toml");
        std::fs::write(&path, "[output]\nstrip_pattern = \".txt\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.strip_pattern, ".txt");
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route_check.toml");
        std::fs::write(&path, "[output\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
