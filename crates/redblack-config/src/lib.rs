//! Configuration management and loading for redblack.

use anyhow::{Context, Result};
use redblack_logging::LoggingConfig;
use redblack_tree::TraversalOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration format types supported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Detect format from extension; anything unrecognized is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::default(),
        }
    }
}

/// One tree-building job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Keys inserted first, in order
    #[serde(default)]
    pub keys: Vec<i64>,

    /// Key file inserted after `keys`; relative paths resolve against the
    /// config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_file: Option<PathBuf>,

    /// Traversals to print
    #[serde(default = "default_orders")]
    pub orders: Vec<TraversalOrder>,

    /// Keys to look up after building
    #[serde(default)]
    pub probes: Vec<i64>,

    /// Print min and max
    #[serde(default)]
    pub bounds: bool,

    /// Validate the finished tree
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Print fixup statistics
    #[serde(default)]
    pub stats: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_orders() -> Vec<TraversalOrder> {
    vec![TraversalOrder::Prefix]
}

fn default_true() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            keys_file: None,
            orders: default_orders(),
            probes: Vec::new(),
            bounds: false,
            validate: true,
            stats: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl RunConfig {
    /// Inline keys followed by the key file's contents.
    pub fn all_keys(&self) -> Result<Vec<i64>> {
        let mut keys = self.keys.clone();
        if let Some(path) = &self.keys_file {
            keys.extend(read_keys(path)?);
        }
        Ok(keys)
    }
}

/// Load configuration from a file
pub fn load_config<P: Into<PathBuf>>(path: P) -> Result<RunConfig> {
    let path = path.into();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let mut config: RunConfig = match ConfigFormat::from_path(&path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON config {}", path.display()))?,
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML config {}", path.display()))?,
    };

    if let (Some(keys_file), Some(base)) = (&config.keys_file, path.parent())
        && keys_file.is_relative()
    {
        config.keys_file = Some(base.join(keys_file));
    }
    Ok(config)
}

/// Save configuration to a file
pub fn save_config<P: Into<PathBuf>>(config: &RunConfig, path: P) -> Result<()> {
    let path = path.into();
    let contents = match ConfigFormat::from_path(&path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .context("Failed to serialize JSON config")?,
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize YAML config")?
        }
    };

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    Ok(())
}

/// Read a key file.
pub fn read_keys(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    parse_keys(&contents).with_context(|| format!("Invalid key file {}", path.display()))
}

/// Parse keys separated by whitespace or commas. `#` comments out the rest
/// of a line.
pub fn parse_keys(text: &str) -> Result<Vec<i64>> {
    let mut keys = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let key = token
                .parse::<i64>()
                .with_context(|| format!("line {}: '{}' is not an integer key", index + 1, token))?;
            keys.push(key);
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redblack_logging::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn config_default_values() {
        let config = RunConfig::default();
        assert!(config.keys.is_empty());
        assert_eq!(config.orders, vec![TraversalOrder::Prefix]);
        assert!(config.validate);
        assert!(!config.bounds);
        assert!(!config.stats);
    }

    #[test]
    fn config_fills_defaults_from_minimal_yaml() {
        let config: RunConfig = serde_yaml::from_str("keys: [30, 15, 10]\n").unwrap();
        assert_eq!(config.keys, vec![30, 15, 10]);
        assert_eq!(config.orders, vec![TraversalOrder::Prefix]);
        assert!(config.validate);
    }

    #[test]
    fn config_serialize_json() {
        let config = RunConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"orders\":[\"prefix\"]"));
        assert!(!json.contains("keys_file"));
    }

    #[test]
    fn format_detected_by_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.conf")), ConfigFormat::Yaml);
    }

    #[test]
    fn load_save_yaml_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("run.yaml");

        let config = RunConfig {
            keys: vec![12, 11, 15, 5, 13, 7],
            orders: TraversalOrder::ALL.to_vec(),
            probes: vec![13, 14],
            bounds: true,
            stats: true,
            logging: LoggingConfig::new().with_level(LogLevel::Debug),
            ..RunConfig::default()
        };

        save_config(&config, &config_path).unwrap();
        let loaded = load_config(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_save_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("run.json");

        let config = RunConfig::default();
        save_config(&config, &config_path).unwrap();
        let loaded = load_config(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_resolves_relative_keys_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("keys.txt"), "28 32\n").unwrap();
        let config_path = temp_dir.path().join("run.yaml");
        std::fs::write(&config_path, "keys: [20]\nkeys_file: keys.txt\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.keys_file, Some(temp_dir.path().join("keys.txt")));
        assert_eq!(config.all_keys().unwrap(), vec![20, 28, 32]);
    }

    #[test]
    fn load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("run.json");
        std::fs::write(&config_path, "{\"keys\": \"nope\"}").unwrap();

        let err = load_config(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse JSON config"));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(temp_dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn parse_keys_accepts_mixed_separators_and_comments() {
        let text = "# fixture\n30, 15\t10\n\n-4,,7 # trailing\n";
        assert_eq!(parse_keys(text).unwrap(), vec![30, 15, 10, -4, 7]);
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn parse_keys_names_the_bad_line() {
        let err = parse_keys("1 2\n3 four\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: 'four' is not an integer key");
    }

    #[test]
    fn read_keys_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_keys(&temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read key file"));
    }
}
