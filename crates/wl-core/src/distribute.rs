use orion_error::prelude::*;
use rand::rngs::StdRng;

use crate::error::{GenReason, GenResult};
use crate::event::{Command, PendingEvent};
use crate::sampling::get_parts;

/// Place `commands`, each occupying `event_duration` seconds, inside the
/// window `[start_sec, start_sec + window_sec]`.
///
/// The slack `window_sec - n * event_duration` is split into `n + 1` random
/// delays; command `i` starts after the first `i + 1` delays plus the `i`
/// episodes before it. The trailing delay is dropped.
pub fn distribute_events(
    start_sec: f64,
    event_duration: u32,
    commands: Vec<Command>,
    task: &str,
    window_sec: u32,
    rng: &mut StdRng,
) -> GenResult<Vec<PendingEvent>> {
    if commands.is_empty() {
        return Ok(Vec::new());
    }

    let count = commands.len() as u64;
    let busy = count * u64::from(event_duration);
    let Some(slack) = u64::from(window_sec).checked_sub(busy) else {
        return StructError::from(GenReason::Slack)
            .with_detail(format!(
                "{task}: {count} events of {event_duration}s do not fit in {window_sec}s"
            ))
            .err();
    };

    let mut delays = get_parts(slack, commands.len() + 1, rng)?;
    delays.pop();

    let mut waited = 0u64;
    let events = commands
        .into_iter()
        .zip(delays)
        .enumerate()
        .map(|(i, (command, delay))| {
            waited += delay;
            let onset = start_sec + (waited + i as u64 * u64::from(event_duration)) as f64;
            PendingEvent::new(onset, task, command)
        })
        .collect();
    Ok(events)
}
