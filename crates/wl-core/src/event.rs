use std::fmt;

use serde::Serialize;
use wl_config::Value;

/// Bare control verbs understood by every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Start,
    Stop,
    Pause,
    Resume,
    Show,
    Hide,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Start => "start",
            Verb::Stop => "stop",
            Verb::Pause => "pause",
            Verb::Resume => "resume",
            Verb::Show => "show",
            Verb::Hide => "hide",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a scenario line asks a task to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Verb(Verb),
    /// Set `parameter` to `value`, rendered as `parameter,value`.
    Set { parameter: String, value: Value },
}

impl Command {
    pub fn set(parameter: impl Into<String>, value: impl Into<Value>) -> Self {
        Command::Set {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    pub fn verb(&self) -> Option<Verb> {
        match self {
            Command::Verb(v) => Some(*v),
            Command::Set { .. } => None,
        }
    }
}

impl From<Verb> for Command {
    fn from(v: Verb) -> Self {
        Command::Verb(v)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Verb(v) => write!(f, "{v}"),
            Command::Set { parameter, value } => write!(f, "{parameter},{value}"),
        }
    }
}

/// An event produced by a generator component, not yet numbered.
///
/// Components return these; only [`ScenarioBuilder`](crate::ScenarioBuilder)
/// turns them into numbered [`Event`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvent {
    pub onset_sec: f64,
    pub task: String,
    pub command: Command,
}

impl PendingEvent {
    pub fn new(onset_sec: f64, task: impl Into<String>, command: impl Into<Command>) -> Self {
        Self {
            onset_sec,
            task: task.into(),
            command: command.into(),
        }
    }
}

/// One numbered scenario event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// 1-based, strictly increasing in emission order.
    pub line: u32,
    /// Absolute scenario time in seconds.
    pub onset_sec: f64,
    pub task: String,
    pub command: Command,
}

/// An entry of the generated scenario: an event or a human-readable comment.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioLine {
    Comment(String),
    Event(Event),
}

impl ScenarioLine {
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            ScenarioLine::Event(e) => Some(e),
            ScenarioLine::Comment(_) => None,
        }
    }
}
