//! Tests for the config module

use super::loader::{resolve, resolve_layers, with_env_overrides};
use super::types::*;
use crate::domain::value_objects::Language;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.defaults.app_name, "app");
    assert_eq!(config.defaults.language, Language::Python);
    assert_eq!(config.defaults.ports, vec!["5000"]);
    assert_eq!(config.defaults.base_image, "python:3.8");
    assert_eq!(config.defaults.metrics, vec!["metric_name"]);
    assert_eq!(config.tools.skaffold, PathBuf::from("skaffold"));
    assert_eq!(config.tools.kubectl, PathBuf::from("kubectl"));
    assert_eq!(config.monitoring.scrape_interval, "15s");
    assert_eq!(config.monitoring.metrics_path, "/metrics");
    assert!(config.monitoring.scrape_targets.is_empty());
    assert_eq!(config.logging.file, PathBuf::from("shipyard.log"));
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[defaults]
app_name = "orders"
language = "js"
ports = ["8080", "9100"]
base_image = "node:20"
metrics = ["http_requests_total"]

[tools]
skaffold = "/opt/skaffold/bin/skaffold"

[monitoring]
scrape_interval = "30s"
scrape_targets = ["orders:9100"]
grafana_deployment = ""

[logging]
file = "logs/shipyard.log"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.defaults.app_name, "orders");
    assert_eq!(config.defaults.language, Language::Javascript);
    assert_eq!(config.defaults.ports, vec!["8080", "9100"]);
    assert_eq!(
        config.tools.skaffold,
        PathBuf::from("/opt/skaffold/bin/skaffold")
    );
    assert_eq!(config.tools.kubectl, PathBuf::from("kubectl"));
    assert_eq!(config.monitoring.scrape_interval, "30s");
    assert_eq!(config.monitoring.metrics_path, "/metrics");
    assert!(config.monitoring.prometheus_deployment_path().is_some());
    assert!(config.monitoring.grafana_deployment_path().is_none());
    assert_eq!(config.logging.file, PathBuf::from("logs/shipyard.log"));
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[defaults]\napp_name = \"svc\"\n").unwrap();

    assert_eq!(config.defaults.app_name, "svc");
    assert_eq!(config.defaults.ports, vec!["5000"]);
    assert_eq!(config.defaults.base_image, "python:3.8");
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipyard.toml");
    fs::write(&path, "[tools]\nskafold = \"/bin/skaffold\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.tools.skaffold, PathBuf::from("skaffold"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "skafold");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("skaffold"));
}

#[test]
fn test_load_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipyard.toml");
    fs::write(&path, "[defaults\napp_name = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("shipyard.toml"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[defaults]\napp_name = \"explicit\"\n").unwrap();
    fs::write(
        dir.path().join("shipyard.toml"),
        "[defaults]\napp_name = \"project\"\n",
    )
    .unwrap();

    let loaded = resolve(Some(&explicit), dir.path()).unwrap();

    assert_eq!(loaded.sources.last(), Some(&explicit));
    assert_eq!(loaded.config.defaults.app_name, "explicit");
}

#[test]
fn test_resolve_uses_project_file() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("shipyard.toml");
    fs::write(&project, "[defaults]\napp_name = \"project\"\n").unwrap();

    let loaded = resolve(None, dir.path()).unwrap();

    assert_eq!(loaded.sources.last(), Some(&project));
    assert_eq!(loaded.config.defaults.app_name, "project");
}

#[test]
fn test_project_file_overlays_user_config() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    let project = dir.path().join("shipyard.toml");
    fs::write(
        &user,
        "[defaults]\napp_name = \"from-user\"\nbase_image = \"alpine:3\"\n\n[tools]\nkubectl = \"/opt/user/kubectl\"\n",
    )
    .unwrap();
    fs::write(&project, "[defaults]\napp_name = \"svc\"\n").unwrap();

    let loaded = resolve_layers(Some(&user), Some(&project), env(&[])).unwrap();

    assert_eq!(loaded.sources, vec![user, project]);
    assert_eq!(loaded.config.defaults.app_name, "svc");
    assert_eq!(loaded.config.defaults.base_image, "alpine:3");
    assert_eq!(loaded.config.tools.kubectl, PathBuf::from("/opt/user/kubectl"));
    assert_eq!(loaded.config.tools.skaffold, PathBuf::from("skaffold"));
    assert_eq!(loaded.config.defaults.ports, vec!["5000"]);
}

#[test]
fn test_user_config_alone_is_used() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(&user, "[monitoring]\nscrape_interval = \"1m\"\n").unwrap();

    let loaded = resolve_layers(Some(&user), None, env(&[])).unwrap();

    assert_eq!(loaded.config.monitoring.scrape_interval, "1m");
    assert_eq!(loaded.config.monitoring.metrics_path, "/metrics");
}

#[test]
fn test_no_files_means_built_ins_then_env() {
    let loaded = resolve_layers(None, None, env(&[("SHIPYARD_APP_NAME", "envapp")])).unwrap();

    assert!(loaded.sources.is_empty());
    assert_eq!(loaded.config.defaults.app_name, "envapp");
}

#[test]
fn test_invalid_user_config_names_the_file() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    let project = dir.path().join("shipyard.toml");
    fs::write(&user, "[defaults]\nports = 5000\n").unwrap();
    fs::write(&project, "[defaults]\napp_name = \"svc\"\n").unwrap();

    let err = resolve_layers(Some(&user), Some(&project), env(&[])).unwrap_err();
    assert!(err.to_string().contains("user.toml"), "{}", err);
}

#[test]
fn test_resolve_missing_explicit_path_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(resolve(Some(&missing), dir.path()).is_err());
}

#[test]
fn test_env_overrides_replace_values() {
    let (config, warnings) = with_env_overrides(
        Config::default(),
        env(&[
            ("SHIPYARD_APP_NAME", "billing"),
            ("SHIPYARD_LANGUAGE", "bash"),
            ("SHIPYARD_PORTS", "80, 443"),
            ("SHIPYARD_BASE_IMAGE", "alpine:3"),
            ("SHIPYARD_METRICS", "up,scrape_duration_seconds"),
            ("SHIPYARD_SKAFFOLD_PATH", "/usr/local/bin/skaffold"),
            ("SHIPYARD_KUBECTL_PATH", "/usr/local/bin/kubectl"),
            ("SHIPYARD_LOG_FILE", "/tmp/shipyard.log"),
        ]),
    );

    assert!(warnings.is_empty());
    assert_eq!(config.defaults.app_name, "billing");
    assert_eq!(config.defaults.language, Language::Bash);
    assert_eq!(config.defaults.ports, vec!["80", "443"]);
    assert_eq!(config.defaults.base_image, "alpine:3");
    assert_eq!(
        config.defaults.metrics,
        vec!["up", "scrape_duration_seconds"]
    );
    assert_eq!(
        config.tools.skaffold,
        PathBuf::from("/usr/local/bin/skaffold")
    );
    assert_eq!(config.tools.kubectl, PathBuf::from("/usr/local/bin/kubectl"));
    assert_eq!(config.logging.file, PathBuf::from("/tmp/shipyard.log"));
}

#[test]
fn test_env_invalid_language_warns_and_keeps_value() {
    let (config, warnings) =
        with_env_overrides(Config::default(), env(&[("SHIPYARD_LANGUAGE", "pyton")]));

    assert_eq!(config.defaults.language, Language::Python);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "SHIPYARD_LANGUAGE");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("python"));
}

#[test]
fn test_env_empty_tool_path_is_ignored() {
    let (config, _) =
        with_env_overrides(Config::default(), env(&[("SHIPYARD_SKAFFOLD_PATH", "")]));

    assert_eq!(config.tools.skaffold, PathBuf::from("skaffold"));
}
