use std::path::PathBuf;

use wl_config::ScenarioConfig;

pub(crate) fn run(config: PathBuf) -> anyhow::Result<()> {
    match ScenarioConfig::load(&config) {
        Ok(cfg) => {
            println!(
                "OK: {} ({} block(s), {} inter-block event(s), {}s)",
                cfg.name,
                cfg.blocks.len(),
                cfg.inter_block.len(),
                cfg.blocks_duration()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {e:#}", config.display());
            std::process::exit(1);
        }
    }
}
