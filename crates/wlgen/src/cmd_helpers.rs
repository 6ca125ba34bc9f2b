use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use wl_config::ScenarioConfig;

use crate::tracing_init::init_tracing;

/// Load the scenario and bring up logging from its `[logging]` section.
///
/// The returned guard must live until the command finishes.
pub(crate) fn load_scenario(path: &Path) -> anyhow::Result<(ScenarioConfig, Option<WorkerGuard>)> {
    let config = ScenarioConfig::load(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let guard = init_tracing(&config.logging, base_dir)?;
    Ok((config, guard))
}

/// CLI seed wins over the config seed; with neither, draw one and log it so
/// the run can be replayed.
pub(crate) fn resolve_seed(cli_seed: Option<u64>, config: &ScenarioConfig) -> u64 {
    match cli_seed.or(config.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            tracing::info!(domain = "conf", seed, "no seed configured, drew one from entropy");
            seed
        }
    }
}
