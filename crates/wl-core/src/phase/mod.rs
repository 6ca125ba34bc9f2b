//! Per-task translation of a block difficulty into scenario commands.

mod communications;
mod resman;
mod scheduling;
mod sysmon;
mod track;

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use wl_config::{ScenarioConfig, TaskKind};

use crate::builder::ScenarioBuilder;
use crate::error::GenResult;
use crate::event::{PendingEvent, Verb};
use crate::state::TaskState;

pub use communications::MAX_BALANCE_ATTEMPTS;

/// Where and how long the phase being generated runs.
#[derive(Debug, Clone, Copy)]
pub struct PhaseContext<'a> {
    pub config: &'a ScenarioConfig,
    pub start_sec: f64,
    pub duration_sec: u32,
}

/// How many episodes of a given cost a phase gets for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBudget {
    /// Seconds one episode occupies, refractory gap included.
    pub episode_cost: u32,
    /// Episodes that fit in the block back to back.
    pub max_events: usize,
    /// Episodes the difficulty asks for.
    pub target_events: usize,
    pub used: usize,
}

impl EventBudget {
    pub fn new(difficulty: f64, duration_sec: u32, episode_cost: u32) -> Self {
        let cost = episode_cost.max(1);
        let max_events = (duration_sec / cost) as usize;
        // Absorb round-off such as 9.999999999 before flooring.
        let target_events = (difficulty * f64::from(duration_sec) / f64::from(cost) + 1e-9)
            .floor()
            .max(0.0) as usize;
        Self {
            episode_cost: cost,
            max_events,
            target_events,
            used: max_events.min(target_events),
        }
    }
}

/// Activation transitions needed before a block runs.
///
/// Running tasks that the block does not request are paused and hidden;
/// requested tasks that are paused are shown and resumed; requested tasks
/// that never started are started.
pub fn activation_prepass(
    builder: &ScenarioBuilder,
    requested: &BTreeMap<TaskKind, f64>,
    start_sec: f64,
) -> Vec<PendingEvent> {
    let mut events = Vec::new();
    for kind in TaskKind::ALL {
        let task = kind.as_str();
        let state = builder.task_state(task);
        let verbs: &[Verb] = if !requested.contains_key(&kind) {
            if state.is_running() {
                &[Verb::Pause, Verb::Hide]
            } else {
                &[]
            }
        } else if state == TaskState::Paused {
            &[Verb::Show, Verb::Resume]
        } else if state.needs_start() {
            &[Verb::Start]
        } else {
            &[]
        };
        events.extend(verbs.iter().map(|v| PendingEvent::new(start_sec, task, *v)));
    }
    events
}

/// Commands for one task in one block, in onset order.
pub fn generate_phase(
    kind: TaskKind,
    difficulty: f64,
    ctx: &PhaseContext<'_>,
    rng: &mut StdRng,
) -> GenResult<Vec<PendingEvent>> {
    let mut events = match kind {
        TaskKind::Sysmon => sysmon::generate(difficulty, ctx, rng)?,
        TaskKind::Track => track::generate(difficulty, ctx),
        TaskKind::Communications => communications::generate(difficulty, ctx, rng)?,
        TaskKind::Resman => resman::generate(difficulty, ctx),
        TaskKind::Scheduling => scheduling::generate(difficulty, ctx),
    };
    events.sort_by(|a, b| a.onset_sec.total_cmp(&b.onset_sec));
    wl_debug!(
        scen,
        task = kind.as_str(),
        difficulty,
        start = ctx.start_sec,
        events = events.len(),
        "phase generated"
    );
    Ok(events)
}
