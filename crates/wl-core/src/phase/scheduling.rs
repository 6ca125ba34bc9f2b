use wl_config::TaskKind;

use super::PhaseContext;
use crate::event::{Command, PendingEvent};

pub(super) const MIN_DURATION: &str = "minduration";

/// Easier blocks get longer minimum task durations, i.e. slower pacing.
pub(super) fn generate(difficulty: f64, ctx: &PhaseContext<'_>) -> Vec<PendingEvent> {
    let min_duration_ms = (5000.0 * (1.0 - difficulty) + 500.0).round() as i64;
    vec![PendingEvent::new(
        ctx.start_sec,
        TaskKind::Scheduling.as_str(),
        Command::set(MIN_DURATION, min_duration_ms),
    )]
}
