use crate::event::{Command, Event, Verb};

/// Activation state of a task inferred from the events emitted so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No event mentions the task.
    Unseen,
    /// The task has events, but none of them is `start`, `pause` or `resume`.
    Uncontrolled,
    Started,
    Paused,
    Resumed,
}

impl TaskState {
    /// Started or resumed, i.e. currently running.
    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Started | TaskState::Resumed)
    }

    /// The task was never started and needs a `start` before it can run.
    pub fn needs_start(&self) -> bool {
        matches!(self, TaskState::Unseen | TaskState::Uncontrolled)
    }
}

/// Infer the activation state of `task` from the last of its `start`, `pause`
/// or `resume` events.
pub fn task_state<'a>(events: impl IntoIterator<Item = &'a Event>, task: &str) -> TaskState {
    let mut seen = false;
    let mut last = None;
    for event in events.into_iter().filter(|e| e.task == task) {
        seen = true;
        if let Command::Verb(verb @ (Verb::Start | Verb::Pause | Verb::Resume)) = event.command {
            last = Some(verb);
        }
    }
    match (seen, last) {
        (false, _) => TaskState::Unseen,
        (true, None) => TaskState::Uncontrolled,
        (true, Some(Verb::Pause)) => TaskState::Paused,
        (true, Some(Verb::Resume)) => TaskState::Resumed,
        (true, Some(_)) => TaskState::Started,
    }
}

/// The most recent bare verb sent to `task`, `stop` included.
pub fn last_verb<'a>(events: impl IntoIterator<Item = &'a Event>, task: &str) -> Option<Verb> {
    events
        .into_iter()
        .filter(|e| e.task == task)
        .filter_map(|e| e.command.verb())
        .last()
}
