use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::builder::Scenario;
use crate::event::{Event, ScenarioLine};
use crate::output::create_timestamped;

/// First header line of every generated scenario file.
pub const GENERATOR_NAME: &str = concat!("Scenario generated by wlgen ", env!("CARGO_PKG_VERSION"));

/// Render `onset_sec` as `H:MM:SS`, truncating fractional seconds.
pub fn format_onset(onset_sec: f64) -> String {
    let total = onset_sec.max(0.0).floor() as u64;
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Render one event as `H:MM:SS;task;command`.
pub fn format_event(event: &Event) -> String {
    format!(
        "{};{};{}",
        format_onset(event.onset_sec),
        event.task,
        event.command
    )
}

/// Render the scenario file, stamping the header with `generated_at`.
pub fn format_at(scenario: &Scenario, name: &str, generated_at: NaiveDateTime) -> Vec<String> {
    let mut out = vec![
        format!("# {GENERATOR_NAME}"),
        String::new(),
        format!("# Name: {name}"),
        format!("# Date: {}", generated_at.format("%d/%m/%Y %H:%M:%S")),
        String::new(),
    ];
    for line in scenario.lines() {
        match line {
            ScenarioLine::Event(event) => out.push(format_event(event)),
            ScenarioLine::Comment(text) => {
                out.push(String::new());
                out.push(format!("# {text}"));
            }
        }
    }
    out
}

/// Render the scenario file stamped with the current local time.
pub fn format(scenario: &Scenario, name: &str) -> Vec<String> {
    format_at(scenario, name, Local::now().naive_local())
}

/// Write the scenario to `<out_dir>/<name>_<YYYYmmdd_HHMMSS>.txt` and return
/// the path. An existing file is never overwritten; see
/// [`create_timestamped`].
pub fn write_text(scenario: &Scenario, name: &str, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let now = Local::now().naive_local();
    let (path, file) = create_timestamped(out_dir, name, "txt", now)?;
    let mut writer = BufWriter::new(file);
    for line in format_at(scenario, name, now) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    wl_info!(io, path = %path.display(), events = scenario.event_count(), "scenario written");
    Ok(path)
}
