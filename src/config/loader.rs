//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{split_list, Language};
use crate::error::{ShipyardError, ShipyardResult};

use super::types::Config;

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "shipyard.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    /// Config file the key came from; `None` for environment variables
    pub file: Option<PathBuf>,
    pub line: Option<usize>,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{})", file.display(), line)?,
            (Some(file), None) => write!(f, " ({})", file.display())?,
            _ => {}
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Result of [`resolve`]
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Files that contributed, lowest priority first; empty means built-ins only
    pub sources: Vec<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipyardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

fn parse_with_warnings(path: &Path, content: &str) -> ShipyardResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipyardError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                message: format!("unknown config key '{}'", path_str),
                file: Some(path.to_path_buf()),
                line: find_line_number(content, &key),
                suggestion: suggest(&key, KNOWN_KEYS),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Layer the configuration files and apply environment overrides.
///
/// The user config is read first, then the explicit path (which must exist)
/// or `./shipyard.toml` is laid over it key by key. A file that exists but
/// does not parse is an error, never silently replaced by defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> ShipyardResult<LoadedConfig> {
    let project = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(cwd.join(PROJECT_CONFIG_FILE)).filter(|p| p.exists()),
    };
    let user = user_config_path().filter(|p| p.exists());

    resolve_layers(user.as_deref(), project.as_deref(), |key| {
        std::env::var(key).ok()
    })
}

/// [`resolve`] with the file locations and environment injected
pub fn resolve_layers<F>(
    user: Option<&Path>,
    project: Option<&Path>,
    lookup: F,
) -> ShipyardResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut merged = toml::Table::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();

    for path in [user, project].into_iter().flatten() {
        let content = fs::read_to_string(path)?;
        // Validates types per file so errors name the offending file
        let (_, file_warnings) = parse_with_warnings(path, &content)?;
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
            ShipyardError::Config {
                file: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        merge_tables(&mut merged, table);
        warnings.extend(file_warnings);
        sources.push(path.to_path_buf());
    }

    let config: Config =
        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ShipyardError::Config {
                file: sources.last().cloned().unwrap_or_default(),
                message: e.to_string(),
            })?;

    let (config, env_warnings) = with_env_overrides(config, lookup);
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        sources,
        warnings,
    })
}

/// Overlay `overlay` onto `base`; nested tables merge, everything else replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let merged = match (base.remove(&key), value) {
            (Some(toml::Value::Table(mut existing)), toml::Value::Table(incoming)) => {
                merge_tables(&mut existing, incoming);
                toml::Value::Table(existing)
            }
            (_, value) => value,
        };
        base.insert(key, merged);
    }
}

/// Apply environment variable overrides (SHIPYARD_* prefix)
///
/// `lookup` is `std::env::var` in production and a map in tests.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(name) = lookup("SHIPYARD_APP_NAME") {
        config.defaults.app_name = name;
    }

    if let Some(raw) = lookup("SHIPYARD_LANGUAGE") {
        match Language::parse(&raw) {
            Some(language) => config.defaults.language = language,
            None => {
                let names: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
                warnings.push(ConfigWarning {
                    key: "SHIPYARD_LANGUAGE".to_string(),
                    file: None,
                    line: None,
                    message: format!(
                        "invalid SHIPYARD_LANGUAGE value '{}', keeping '{}' (valid: {})",
                        raw,
                        config.defaults.language,
                        names.join(", ")
                    ),
                    suggestion: suggest(&raw.to_lowercase(), &names),
                });
            }
        }
    }

    if let Some(ports) = lookup("SHIPYARD_PORTS") {
        config.defaults.ports = split_list(&ports);
    }

    if let Some(image) = lookup("SHIPYARD_BASE_IMAGE") {
        config.defaults.base_image = image;
    }

    if let Some(metrics) = lookup("SHIPYARD_METRICS") {
        config.defaults.metrics = split_list(&metrics);
    }

    if let Some(path) = lookup("SHIPYARD_SKAFFOLD_PATH").filter(|p| !p.is_empty()) {
        config.tools.skaffold = PathBuf::from(path);
    }

    if let Some(path) = lookup("SHIPYARD_KUBECTL_PATH").filter(|p| !p.is_empty()) {
        config.tools.kubectl = PathBuf::from(path);
    }

    if let Some(path) = lookup("SHIPYARD_LOG_FILE").filter(|p| !p.is_empty()) {
        config.logging.file = PathBuf::from(path);
    }

    (config, warnings)
}

/// `$XDG_CONFIG_HOME/shipyard/config.toml`, falling back to the platform dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("shipyard").join("config.toml"))
}

const KNOWN_KEYS: &[&str] = &[
    "defaults",
    "app_name",
    "language",
    "ports",
    "base_image",
    "metrics",
    "tools",
    "skaffold",
    "kubectl",
    "monitoring",
    "scrape_interval",
    "metrics_path",
    "scrape_targets",
    "prometheus_deployment",
    "grafana_deployment",
    "logging",
    "file",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(unknown, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .map(|(c, _)| c.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
