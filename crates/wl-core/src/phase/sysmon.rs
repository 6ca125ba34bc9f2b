use rand::rngs::StdRng;
use wl_config::TaskKind;

use super::{EventBudget, PhaseContext};
use crate::distribute::distribute_events;
use crate::error::GenResult;
use crate::event::{Command, PendingEvent};
use crate::sampling::choices;

/// Failure episodes for lights and scales, budgeted and placed independently.
///
/// An episode lasts the alert timeout plus the refractory gap.
pub(super) fn generate(
    difficulty: f64,
    ctx: &PhaseContext<'_>,
    rng: &mut StdRng,
) -> GenResult<Vec<PendingEvent>> {
    let params = &ctx.config.tasks.sysmon;
    let episode_cost = params
        .alert_timeout_secs()
        .saturating_add(ctx.config.events_refractory_duration);
    let budget = EventBudget::new(difficulty, ctx.duration_sec, episode_cost);

    let mut events = Vec::with_capacity(budget.used * 2);
    for (family, gauges) in [("lights", &params.lights), ("scales", &params.scales)] {
        let commands = choices(gauges, budget.used, true, rng)?
            .into_iter()
            .map(|id| Command::set(format!("{family}-{id}-failure"), true))
            .collect();
        events.extend(distribute_events(
            ctx.start_sec,
            budget.episode_cost,
            commands,
            TaskKind::Sysmon.as_str(),
            ctx.duration_sec,
            rng,
        )?);
    }
    Ok(events)
}
