use std::path::PathBuf;

use wl_core::generate_seeded;
use wl_core::output::text::format;

use crate::cmd_helpers::{load_scenario, resolve_seed};

pub(crate) fn run(config: PathBuf, seed: Option<u64>) -> anyhow::Result<()> {
    let (cfg, _guard) = load_scenario(&config)?;
    let seed = resolve_seed(seed, &cfg);

    let scenario = generate_seeded(&cfg, seed).map_err(|e| anyhow::anyhow!("{e}"))?;
    for line in format(&scenario, &cfg.name) {
        println!("{line}");
    }
    Ok(())
}
