//! End-to-end: TOML text -> ScenarioConfig -> generated scenario -> text file.

use std::collections::BTreeMap;

use wl_config::ScenarioConfig;
use wl_core::output::text::{format_event, write_text};
use wl_core::{Command, Verb, generate_seeded};

const SCENARIO: &str = r#"
name = "session_a"
seed = 11
events_refractory_duration = 1
communications_target_ratio = 0.5
average_auditory_prompt_duration = 13
inter_block_padding = 5

[[blocks]]
duration = 120
plugins = { sysmon = 0.5, communications = 0.5, track = 0.25 }

[[blocks]]
duration = 120
plugins = { resman = 1.0, scheduling = 0.0 }
extra_events = [["sysmon", "alerttimeout", 8000]]

[[blocks]]
duration = 120
plugins = { sysmon = 1.0, communications = 1.0, track = 1.0, resman = 0.6 }

[[inter_block]]
type = "genericscales"
filename = "nasa_tlx.txt"
position = 3
"#;

fn config() -> ScenarioConfig {
    SCENARIO.parse().expect("scenario toml parses")
}

#[test]
fn generates_reproducible_scenario() {
    let cfg = config();
    let seed = cfg.seed.unwrap();
    let a = generate_seeded(&cfg, seed).unwrap();
    let b = generate_seeded(&cfg, seed).unwrap();
    assert_eq!(a, b);

    let lines: Vec<u32> = a.events().map(|e| e.line).collect();
    let expected: Vec<u32> = (1..=lines.len() as u32).collect();
    assert_eq!(lines, expected);
}

#[test]
fn every_task_is_closed_once() {
    let scenario = generate_seeded(&config(), 11).unwrap();

    let mut stops: BTreeMap<&str, usize> = BTreeMap::new();
    for event in scenario.events() {
        if event.command == Command::Verb(Verb::Stop) {
            *stops.entry(event.task.as_str()).or_default() += 1;
        }
    }
    for task in ["sysmon", "communications", "track", "resman", "scheduling", "genericscales"] {
        assert_eq!(stops.get(task), Some(&1), "{task}");
    }

    // 3 blocks of 120 s plus the trailing questionnaire padding.
    assert_eq!(scenario.duration_sec(), 365.0);
    for event in scenario.events() {
        assert!(event.onset_sec <= 365.0, "{}", format_event(event));
    }
}

#[test]
fn events_stay_inside_their_block() {
    let scenario = generate_seeded(&config(), 3).unwrap();
    for event in scenario.events() {
        let Command::Set { parameter, .. } = &event.command else {
            continue;
        };
        if parameter.ends_with("-failure") {
            let in_block_one = event.onset_sec < 120.0;
            let in_block_three = (240.0..360.0).contains(&event.onset_sec);
            assert!(in_block_one || in_block_three, "{}", format_event(event));
        }
    }
}

#[test]
fn writes_text_file() {
    let cfg = config();
    let scenario = generate_seeded(&cfg, 11).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_text(&scenario, &cfg.name, dir.path()).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("# Name: session_a"));
    assert!(content.contains("# Block 3/3: average difficulty 0.90"));
    assert!(content.contains("0:06:00;genericscales;filename,nasa_tlx.txt"));
    assert!(content.contains("0:02:00;sysmon;alerttimeout,8000"));
}
