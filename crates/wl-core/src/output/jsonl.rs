use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::{Map, Value as Json};

use crate::builder::Scenario;
use crate::event::{Command, Event, ScenarioLine};
use crate::output::create_timestamped;

/// JSON form of one event: `line`, `onset_sec`, `task`, and `command` as a
/// one- or two-element array.
pub fn event_to_json(event: &Event) -> anyhow::Result<Json> {
    let command = match &event.command {
        Command::Verb(v) => vec![Json::String(v.as_str().to_string())],
        Command::Set { parameter, value } => {
            vec![Json::String(parameter.clone()), serde_json::to_value(value)?]
        }
    };

    let mut obj = Map::new();
    obj.insert("line".to_string(), Json::from(event.line));
    obj.insert("onset_sec".to_string(), Json::from(event.onset_sec));
    obj.insert("task".to_string(), Json::String(event.task.clone()));
    obj.insert("command".to_string(), Json::Array(command));
    Ok(Json::Object(obj))
}

/// Write the scenario as JSONL: one object per event, `{"comment": ...}` for
/// comments. An existing file at `output_path` is replaced.
pub fn write_jsonl(scenario: &Scenario, output_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_lines(scenario, File::create(output_path)?)?;
    wl_info!(io, path = %output_path.display(), events = scenario.event_count(), "scenario written");
    Ok(())
}

/// Write the scenario as JSONL to `<out_dir>/<name>_<YYYYmmdd_HHMMSS>.jsonl`,
/// named like the text output, and return the path.
pub fn write_jsonl_in(scenario: &Scenario, name: &str, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let (path, file) = create_timestamped(out_dir, name, "jsonl", Local::now().naive_local())?;
    write_lines(scenario, file)?;
    wl_info!(io, path = %path.display(), events = scenario.event_count(), "scenario written");
    Ok(path)
}

fn write_lines(scenario: &Scenario, file: File) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(file);
    for line in scenario.lines() {
        let obj = match line {
            ScenarioLine::Event(event) => event_to_json(event)?,
            ScenarioLine::Comment(text) => serde_json::json!({ "comment": text }),
        };
        writeln!(writer, "{}", serde_json::to_string(&obj)?)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ScenarioBuilder;
    use crate::event::Verb;

    #[test]
    fn event_json_shape() {
        let event = Event {
            line: 3,
            onset_sec: 12.0,
            task: "communications".into(),
            command: Command::set("radioprompt", "own"),
        };
        assert_eq!(
            event_to_json(&event).unwrap(),
            serde_json::json!({
                "line": 3,
                "onset_sec": 12.0,
                "task": "communications",
                "command": ["radioprompt", "own"],
            })
        );
    }

    #[test]
    fn writes_one_object_per_line() {
        let mut builder = ScenarioBuilder::new();
        builder.comment("Block 1/1: average difficulty 1.00");
        builder.event(0.0, "sysmon", Verb::Start);
        builder.event(6.0, "sysmon", Command::set("lights-1-failure", true));
        let scenario = builder.finish();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/scenario.jsonl");
        write_jsonl(&scenario, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["comment"], "Block 1/1: average difficulty 1.00");
        assert_eq!(rows[1]["command"], serde_json::json!(["start"]));
        assert_eq!(rows[2]["command"], serde_json::json!(["lights-1-failure", true]));
    }

    #[test]
    fn timestamped_jsonl_matches_text_naming() {
        let mut builder = ScenarioBuilder::new();
        builder.event(0.0, "track", Verb::Start);
        let scenario = builder.finish();

        let dir = tempfile::tempdir().unwrap();
        let first = write_jsonl_in(&scenario, "training", dir.path()).unwrap();
        let second = write_jsonl_in(&scenario, "training", dir.path()).unwrap();
        assert_ne!(first, second);

        let file_name = first.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("training_"), "{file_name}");
        assert!(file_name.ends_with(".jsonl"), "{file_name}");
        assert_eq!(std::fs::read_to_string(&first).unwrap().lines().count(), 1);
    }
}
