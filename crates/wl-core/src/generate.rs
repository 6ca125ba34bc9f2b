
use orion_error::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wl_config::{BlockConfig, ScenarioConfig};

use crate::builder::{Scenario, ScenarioBuilder};
use crate::error::{GenReason, GenResult};
use crate::event::{Command, PendingEvent, Verb};
use crate::phase::{PhaseContext, activation_prepass, generate_phase};

/// Generate a scenario with a fresh RNG seeded from `seed`.
pub fn generate_seeded(config: &ScenarioConfig, seed: u64) -> GenResult<Scenario> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

/// Turn a scenario configuration into an ordered list of events and comments.
///
/// Blocks run back to back. Each block gets, at its start time: the
/// inter-block insertions positioned before it, a comment with its average
/// difficulty, its extra events, the activation pre-pass and the phase of
/// every requested task. Trailing insertions follow the last block, and
/// every task still open is stopped at the total duration.
pub fn generate(config: &ScenarioConfig, rng: &mut StdRng) -> GenResult<Scenario> {
    config.validate().map_err(|e| {
        StructError::from(GenReason::Config).with_detail(format!("scenario {:?}: {e}", config.name))
    })?;

    let mut builder = ScenarioBuilder::new();
    let block_count = config.blocks.len();
    let mut elapsed: u64 = 0;

    for (index, block) in config.blocks.iter().enumerate() {
        elapsed += insert_inter_block(&mut builder, config, index, elapsed);
        let start_sec = elapsed as f64;

        builder.comment(format!(
            "Block {}/{block_count}: average difficulty {:.2}",
            index + 1,
            block.average_difficulty()
        ));
        generate_block(&mut builder, config, block, start_sec, rng)?;

        elapsed += u64::from(block.duration_sec);
        wl_debug!(scen, block = index + 1, start = start_sec, "block generated");
    }
    elapsed += insert_inter_block(&mut builder, config, block_count, elapsed);

    close_tasks(&mut builder, elapsed as f64);

    let scenario = builder.finish();
    wl_info!(
        scen,
        name = %config.name,
        blocks = block_count,
        events = scenario.event_count(),
        per_task = ?scenario.counts(),
        duration = elapsed,
        "scenario generated"
    );
    Ok(scenario)
}

fn generate_block(
    builder: &mut ScenarioBuilder,
    config: &ScenarioConfig,
    block: &BlockConfig,
    start_sec: f64,
    rng: &mut StdRng,
) -> GenResult<()> {
    for extra in &block.extra_events {
        builder.push(PendingEvent::new(
            start_sec,
            extra.task.as_str(),
            Command::set(extra.parameter.as_str(), extra.value.clone()),
        ));
    }

    let transitions = activation_prepass(builder, &block.plugins, start_sec);
    builder.extend(transitions);

    let ctx = PhaseContext {
        config,
        start_sec,
        duration_sec: block.duration_sec,
    };
    for (&kind, &difficulty) in &block.plugins {
        let events = generate_phase(kind, difficulty, &ctx, rng)?;
        builder.extend(events);
    }
    Ok(())
}

/// Emit the insertions at `position`, starting at `now`. Returns the padding
/// they add to the timeline.
fn insert_inter_block(
    builder: &mut ScenarioBuilder,
    config: &ScenarioConfig,
    position: usize,
    now: u64,
) -> u64 {
    let mut added = 0;
    for insertion in config.inter_block_at(position) {
        let onset = (now + added) as f64;
        let task = insertion.kind.task_name();
        builder.event(onset, task, Command::set("filename", insertion.filename.as_str()));
        builder.event(onset, task, Verb::Start);
        builder.event(onset, task, Verb::Stop);
        added += u64::from(config.inter_block_padding);
    }
    added
}

/// Stop every task, in order of first appearance, unless it already ended on
/// `stop`.
fn close_tasks(builder: &mut ScenarioBuilder, end_sec: f64) {
    for task in builder.tasks() {
        if builder.last_verb(&task) != Some(Verb::Stop) {
            builder.event(end_sec, &task, Verb::Stop);
        }
    }
}
