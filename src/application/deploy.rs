//! Deploy step plan
//!
//! `skaffold init` and `skaffold run --tail` execute inside the project
//! directory; the monitoring `kubectl apply` calls run from the invocation
//! directory and address the rendered files through the project path.

use std::path::Path;

use crate::config::Config;
use crate::domain::entities::Step;
use crate::domain::ports::CommandLine;
use crate::infrastructure::generators::{GRAFANA_DASHBOARD, PROMETHEUS_CONFIG};

/// Ordered steps for deploying a scaffolded project
///
/// Only `skaffold run` is fatal. The companion Prometheus and Grafana
/// deployment steps are left out when configured as empty.
pub fn deploy_steps(config: &Config, project_dir: &Path) -> Vec<Step> {
    let skaffold = &config.tools.skaffold;
    let monitoring = &config.monitoring;

    let mut steps = vec![
        Step::non_fatal(
            "skaffold-init",
            CommandLine::new(skaffold).arg("init").current_dir(project_dir),
        ),
        Step::fatal(
            "skaffold-run",
            CommandLine::new(skaffold)
                .args(["run", "--tail"])
                .current_dir(project_dir),
        ),
        kubectl_apply(config, "prometheus-config", &project_dir.join(PROMETHEUS_CONFIG)),
    ];
    if let Some(path) = monitoring.prometheus_deployment_path() {
        steps.push(kubectl_apply(config, "prometheus-deployment", path));
    }
    steps.push(kubectl_apply(
        config,
        "grafana-config",
        &project_dir.join(GRAFANA_DASHBOARD),
    ));
    if let Some(path) = monitoring.grafana_deployment_path() {
        steps.push(kubectl_apply(config, "grafana-deployment", path));
    }
    steps
}

fn kubectl_apply(config: &Config, name: &str, file: &Path) -> Step {
    Step::non_fatal(
        name,
        CommandLine::new(&config.tools.kubectl)
            .args(["apply", "-f"])
            .arg(file),
    )
}
