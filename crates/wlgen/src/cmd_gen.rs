use std::path::PathBuf;

use anyhow::Context;
use wl_core::generate_seeded;
use wl_core::output::jsonl::write_jsonl_in;
use wl_core::output::text::write_text;

use crate::cmd_helpers::{load_scenario, resolve_seed};

pub(crate) fn run(
    config: PathBuf,
    out: PathBuf,
    seed: Option<u64>,
    format: String,
) -> anyhow::Result<()> {
    if !matches!(format.as_str(), "text" | "jsonl") {
        anyhow::bail!("unsupported format: '{format}'. Supported: 'text', 'jsonl'.");
    }

    let (cfg, _guard) = load_scenario(&config)?;
    let seed = resolve_seed(seed, &cfg);

    let scenario = generate_seeded(&cfg, seed).map_err(|e| anyhow::anyhow!("{e}"))?;

    let path = if format == "jsonl" {
        write_jsonl_in(&scenario, &cfg.name, &out).context("writing JSONL output")?
    } else {
        write_text(&scenario, &cfg.name, &out).context("writing scenario file")?
    };

    println!(
        "Generated {} events (seed {seed}) -> {}",
        scenario.event_count(),
        path.display()
    );
    Ok(())
}
