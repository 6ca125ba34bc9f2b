use std::collections::BTreeMap;

use crate::event::{Command, Event, PendingEvent, ScenarioLine};
use crate::state::{TaskState, last_verb, task_state};

/// Accumulates the scenario for one generation run and owns line numbering.
#[derive(Debug)]
pub struct ScenarioBuilder {
    lines: Vec<ScenarioLine>,
    next_line: u32,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_line: 1,
        }
    }

    /// Number `pending` with the next line number and append it. Returns the
    /// assigned line number.
    pub fn push(&mut self, pending: PendingEvent) -> u32 {
        let line = self.next_line;
        self.next_line += 1;
        self.lines.push(ScenarioLine::Event(Event {
            line,
            onset_sec: pending.onset_sec,
            task: pending.task,
            command: pending.command,
        }));
        line
    }

    pub fn extend(&mut self, pending: impl IntoIterator<Item = PendingEvent>) {
        for p in pending {
            self.push(p);
        }
    }

    pub fn event(&mut self, onset_sec: f64, task: &str, command: impl Into<Command>) {
        self.push(PendingEvent::new(onset_sec, task, command));
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.lines.push(ScenarioLine::Comment(text.into()));
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.lines.iter().filter_map(ScenarioLine::as_event)
    }

    pub fn task_state(&self, task: &str) -> TaskState {
        task_state(self.events(), task)
    }

    pub fn last_verb(&self, task: &str) -> Option<crate::event::Verb> {
        last_verb(self.events(), task)
    }

    /// Task names in order of first appearance.
    pub fn tasks(&self) -> Vec<String> {
        let mut tasks: Vec<String> = Vec::new();
        for event in self.events() {
            if !tasks.iter().any(|t| *t == event.task) {
                tasks.push(event.task.clone());
            }
        }
        tasks
    }

    pub fn finish(self) -> Scenario {
        Scenario { lines: self.lines }
    }
}

/// A generated scenario: events and comments in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    lines: Vec<ScenarioLine>,
}

impl Scenario {
    pub fn lines(&self) -> &[ScenarioLine] {
        &self.lines
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.lines.iter().filter_map(ScenarioLine::as_event)
    }

    pub fn events_for<'a>(&'a self, task: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events().filter(move |e| e.task == task)
    }

    pub fn event_count(&self) -> usize {
        self.events().count()
    }

    /// Number of events per task.
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for event in self.events() {
            *counts.entry(event.task.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Onset of the last event, i.e. the scenario length in seconds.
    pub fn duration_sec(&self) -> f64 {
        self.events().map(|e| e.onset_sec).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Verb;

    #[test]
    fn numbers_lines_from_one_skipping_comments() {
        let mut builder = ScenarioBuilder::new();
        builder.comment("Block 1");
        builder.event(0.0, "track", Verb::Start);
        builder.event(0.0, "track", Command::set("targetproportion", 0.5));
        builder.comment("Block 2");
        let line = builder.push(PendingEvent::new(60.0, "sysmon", Verb::Start));
        assert_eq!(line, 3);

        let scenario = builder.finish();
        assert_eq!(scenario.lines().len(), 5);
        let lines: Vec<u32> = scenario.events().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert_eq!(scenario.duration_sec(), 60.0);
    }

    #[test]
    fn tasks_in_first_appearance_order() {
        let mut builder = ScenarioBuilder::new();
        builder.event(0.0, "sysmon", Verb::Start);
        builder.event(0.0, "track", Verb::Start);
        builder.event(5.0, "sysmon", Command::set("lights-1-failure", true));
        assert_eq!(builder.tasks(), vec!["sysmon", "track"]);
        assert_eq!(builder.task_state("track"), TaskState::Started);

        let scenario = builder.finish();
        assert_eq!(scenario.counts()["sysmon"], 2);
        assert_eq!(scenario.events_for("track").count(), 1);
    }
}
