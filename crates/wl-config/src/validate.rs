use crate::scenario::ScenarioConfig;
use crate::tasks::TaskParameters;
use crate::types::RATIO_RESOLUTION;

/// Internal validation, called by [`ScenarioConfig::validate`] and
/// automatically during `ScenarioConfig::from_str` / `load`.
pub(crate) fn validate(config: &ScenarioConfig) -> anyhow::Result<()> {
    if config.name.trim().is_empty() {
        anyhow::bail!("name must not be empty");
    }

    if config.blocks.is_empty() {
        anyhow::bail!("scenario {:?} declares no blocks", config.name);
    }

    if !(0.0..=1.0).contains(&config.communications_target_ratio) {
        anyhow::bail!(
            "communications_target_ratio must be in [0, 1], got {}",
            config.communications_target_ratio,
        );
    }

    validate_ratio_resolution(config.communications_target_ratio)?;

    if config.average_auditory_prompt_duration == 0 {
        anyhow::bail!("average_auditory_prompt_duration must be > 0");
    }

    // Episode costs are sums of these; none may exceed the longest block.
    let longest_block = config.blocks.iter().map(|b| b.duration_sec).max().unwrap_or(0);
    let per_episode = [
        ("events_refractory_duration", config.events_refractory_duration),
        ("average_auditory_prompt_duration", config.average_auditory_prompt_duration),
        ("tasks.sysmon.alerttimeout (s)", config.tasks.sysmon.alert_timeout_secs()),
    ];
    for (field, secs) in per_episode {
        if secs > longest_block {
            anyhow::bail!("{field} = {secs}s exceeds the longest block ({longest_block}s)");
        }
    }

    for (i, block) in config.blocks.iter().enumerate() {
        if block.duration_sec == 0 {
            anyhow::bail!("blocks[{i}]: duration must be > 0");
        }
        for (kind, difficulty) in &block.plugins {
            if !difficulty.is_finite() || !(0.0..=1.0).contains(difficulty) {
                anyhow::bail!(
                    "blocks[{i}].plugins.{kind}: difficulty must be in [0, 1], got {difficulty}",
                );
            }
        }
        for (j, extra) in block.extra_events.iter().enumerate() {
            if extra.task.trim().is_empty() || extra.parameter.trim().is_empty() {
                anyhow::bail!(
                    "blocks[{i}].extra_events[{j}]: task and parameter names must not be empty"
                );
            }
        }
    }

    let last_position = config.blocks.len();
    for (i, event) in config.inter_block.iter().enumerate() {
        if event.position > last_position {
            anyhow::bail!(
                "inter_block[{i}]: position {} is past the last block (max {last_position})",
                event.position,
            );
        }
        if event.filename.trim().is_empty() {
            anyhow::bail!("inter_block[{i}]: filename must not be empty");
        }
    }

    validate_tasks(&config.tasks)
}

/// Ratios strictly between 0 and 1 must keep both terms non-zero once
/// scaled to [`RATIO_RESOLUTION`].
fn validate_ratio_resolution(ratio: f64) -> anyhow::Result<()> {
    if ratio <= 0.0 || ratio >= 1.0 {
        return Ok(());
    }
    let own = (ratio * RATIO_RESOLUTION).round();
    let other = ((1.0 - ratio) * RATIO_RESOLUTION).round();
    if own == 0.0 || other == 0.0 {
        anyhow::bail!(
            "communications_target_ratio {ratio} is below the supported resolution (1/{RATIO_RESOLUTION}); use 0, 1 or a value in [0.001, 0.999]"
        );
    }
    Ok(())
}

fn validate_tasks(tasks: &TaskParameters) -> anyhow::Result<()> {
    if tasks.sysmon.alerttimeout == 0 {
        anyhow::bail!("tasks.sysmon.alerttimeout must be > 0");
    }
    if tasks.sysmon.lights.is_empty() || tasks.sysmon.scales.is_empty() {
        anyhow::bail!("tasks.sysmon: lights and scales must not be empty");
    }

    let comms = &tasks.communications;
    if comms.own_prompt.is_empty() || comms.other_prompt.is_empty() {
        anyhow::bail!("tasks.communications: prompt names must not be empty");
    }
    if comms.own_prompt == comms.other_prompt {
        anyhow::bail!(
            "tasks.communications: own_prompt and other_prompt must differ, both are {:?}",
            comms.own_prompt,
        );
    }

    for (name, pump) in &tasks.resman.pumps {
        for tank in [&pump.from, &pump.to] {
            if !tasks.resman.tanks.contains_key(tank) {
                anyhow::bail!("tasks.resman.pumps.{name}: unknown tank {tank:?}");
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{BlockConfig, InterBlockEvent, InterBlockKind};
    use crate::tasks::PumpSpec;
    use crate::types::TaskKind;

    fn valid() -> ScenarioConfig {
        let mut cfg = ScenarioConfig::new("ok");
        cfg.blocks.push(BlockConfig::new(60).with_task(TaskKind::Track, 0.5));
        cfg
    }

    #[test]
    fn accepts_valid() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn rejects_zero_duration() {
        let mut cfg = valid();
        cfg.blocks.push(BlockConfig::new(0));
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("blocks[1]"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let mut cfg = valid();
            cfg.blocks[0].plugins.insert(TaskKind::Sysmon, bad);
            assert!(validate(&cfg).is_err(), "difficulty {bad} accepted");
        }
    }

    #[test]
    fn rejects_empty_scenario() {
        let cfg = ScenarioConfig::new("empty");
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn rejects_bad_ratio() {
        let mut cfg = valid();
        cfg.communications_target_ratio = 1.2;
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn inter_block_position_bounds() {
        let mut cfg = valid();
        cfg.inter_block.push(InterBlockEvent {
            kind: InterBlockKind::Instructions,
            filename: "end.txt".into(),
            position: 1,
        });
        assert!(validate(&cfg).is_ok());
        cfg.inter_block[0].position = 2;
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn rejects_pump_to_unknown_tank() {
        let mut cfg = valid();
        cfg.tasks.resman.pumps.insert(
            "9".into(),
            PumpSpec {
                from: "z".into(),
                to: "a".into(),
                flow: 100,
            },
        );
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("\"z\""), "{err}");
    }

    #[test]
    fn rejects_ratio_below_resolution() {
        for bad in [0.0004, 0.9996] {
            let mut cfg = valid();
            cfg.communications_target_ratio = bad;
            let err = validate(&cfg).unwrap_err();
            assert!(err.to_string().contains("resolution"), "{bad}: {err}");
        }
        for ok in [0.0, 0.001, 0.5, 0.999, 1.0] {
            let mut cfg = valid();
            cfg.communications_target_ratio = ok;
            assert!(validate(&cfg).is_ok(), "{ok} rejected");
        }
    }

    #[test]
    fn rejects_episode_longer_than_blocks() {
        let mut cfg = valid();
        cfg.events_refractory_duration = u32::MAX;
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("events_refractory_duration"), "{err}");

        let mut cfg = valid();
        cfg.average_auditory_prompt_duration = 61;
        assert!(validate(&cfg).is_err());

        let mut cfg = valid();
        cfg.tasks.sysmon.alerttimeout = u32::MAX;
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("alerttimeout"), "{err}");

        let mut cfg = valid();
        cfg.events_refractory_duration = 60;
        cfg.average_auditory_prompt_duration = 60;
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn rejects_identical_prompts() {
        let mut cfg = valid();
        cfg.tasks.communications.other_prompt = "own".into();
        assert!(validate(&cfg).is_err());
    }
}
