use wl_config::TaskKind;

use super::PhaseContext;
use crate::event::{Command, PendingEvent};

pub(super) const TARGET_PROPORTION: &str = "targetproportion";

/// Harder blocks shrink the target area the cursor must stay in.
pub(super) fn generate(difficulty: f64, ctx: &PhaseContext<'_>) -> Vec<PendingEvent> {
    vec![PendingEvent::new(
        ctx.start_sec,
        TaskKind::Track.as_str(),
        Command::set(TARGET_PROPORTION, 1.0 - difficulty),
    )]
}
