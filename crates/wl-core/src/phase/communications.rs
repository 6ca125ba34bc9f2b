use orion_error::prelude::*;
use rand::rngs::StdRng;
use wl_config::{RatioBalancing, ScenarioConfig, TaskKind};

use super::{EventBudget, PhaseContext};
use crate::distribute::distribute_events;
use crate::error::{GenReason, GenResult};
use crate::event::{Command, PendingEvent};
use crate::sampling::{choices, reduce_ratio};

pub(super) const RADIO_PROMPT: &str = "radioprompt";

/// Upper bound on resampling when balancing own/other prompts.
pub const MAX_BALANCE_ATTEMPTS: usize = 1_000;

const RATIO_TOLERANCE: f64 = 1e-9;

/// Radio prompts addressed to the participant or to other callsigns, in the
/// configured proportion.
pub(super) fn generate(
    difficulty: f64,
    ctx: &PhaseContext<'_>,
    rng: &mut StdRng,
) -> GenResult<Vec<PendingEvent>> {
    let config = ctx.config;
    let prompt_cost = config
        .average_auditory_prompt_duration
        .saturating_add(config.events_refractory_duration);
    let budget = EventBudget::new(difficulty, ctx.duration_sec, prompt_cost);
    if budget.used == 0 {
        return Ok(Vec::new());
    }

    let commands = draw_prompts(budget.used, config, rng)?
        .into_iter()
        .map(|prompt| Command::set(RADIO_PROMPT, prompt))
        .collect();
    distribute_events(
        ctx.start_sec,
        budget.episode_cost,
        commands,
        TaskKind::Communications.as_str(),
        ctx.duration_sec,
        rng,
    )
}

/// Weighted pool whose own share equals the target ratio.
pub(super) fn prompt_pool(config: &ScenarioConfig) -> GenResult<Vec<String>> {
    let params = &config.tasks.communications;
    let ratio = config.communications_target_ratio;
    let (own, other) = if ratio <= 0.0 {
        (0, 1)
    } else if ratio >= 1.0 {
        (1, 0)
    } else {
        reduce_ratio(ratio, 1.0 - ratio)?
    };

    let mut pool = Vec::with_capacity((own + other) as usize);
    pool.extend((0..own).map(|_| params.own_prompt.clone()));
    pool.extend((0..other).map(|_| params.other_prompt.clone()));
    Ok(pool)
}

/// Draw `count` prompts. When `count` is a multiple of the pool size the
/// realized own share must hit the target ratio; samples are redrawn up to
/// [`MAX_BALANCE_ATTEMPTS`] times, then the closest one is kept or the phase
/// fails, depending on [`RatioBalancing`].
pub(super) fn draw_prompts(
    count: usize,
    config: &ScenarioConfig,
    rng: &mut StdRng,
) -> GenResult<Vec<String>> {
    let pool = prompt_pool(config)?;
    let own_prompt = &config.tasks.communications.own_prompt;
    let target = config.communications_target_ratio;

    let mut best = choices(&pool, count, true, rng)?;
    if count <= 1 || count % pool.len() != 0 {
        return Ok(best);
    }

    let mut best_error = ratio_error(&best, own_prompt, target);
    let mut attempts = 1;
    while best_error > RATIO_TOLERANCE && attempts < MAX_BALANCE_ATTEMPTS {
        let sample = choices(&pool, count, true, rng)?;
        let error = ratio_error(&sample, own_prompt, target);
        if error < best_error {
            best = sample;
            best_error = error;
        }
        attempts += 1;
    }

    if best_error <= RATIO_TOLERANCE {
        return Ok(best);
    }
    match config.ratio_balancing {
        RatioBalancing::Strict => StructError::from(GenReason::Balance)
            .with_detail(format!(
                "could not balance communications ratio {target} over {count} prompts within {MAX_BALANCE_ATTEMPTS} attempts"
            ))
            .err(),
        RatioBalancing::Closest => {
            wl_warn!(
                scen,
                target,
                count,
                realized = own_share(&best, own_prompt),
                "communications ratio not reached, keeping closest sample"
            );
            Ok(best)
        }
    }
}

pub(super) fn own_share(prompts: &[String], own_prompt: &str) -> f64 {
    let own = prompts.iter().filter(|p| p.as_str() == own_prompt).count();
    own as f64 / prompts.len() as f64
}

fn ratio_error(prompts: &[String], own_prompt: &str, target: f64) -> f64 {
    (own_share(prompts, own_prompt) - target).abs()
}
