use wl_config::TaskKind;

use super::PhaseContext;
use crate::event::{Command, PendingEvent};

/// Every target tank leaks `max_single_leak * difficulty` units per minute.
pub(super) fn generate(difficulty: f64, ctx: &PhaseContext<'_>) -> Vec<PendingEvent> {
    let resman = &ctx.config.tasks.resman;
    let leak = (resman.max_single_leak() * difficulty).round() as i64;
    resman
        .target_tanks()
        .map(|tank| {
            PendingEvent::new(
                ctx.start_sec,
                TaskKind::Resman.as_str(),
                Command::set(format!("tank-{tank}-lossperminute"), leak),
            )
        })
        .collect()
}
