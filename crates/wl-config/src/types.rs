use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaskKind
// ---------------------------------------------------------------------------

/// The workload tasks whose activation and difficulty the generator controls.
///
/// Declaration order is the order in which the activation pre-pass and the
/// phase generator visit tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// System monitoring: warning lights and drifting scales.
    Sysmon,
    /// Compensatory tracking.
    Track,
    /// Auditory radio prompts.
    Communications,
    /// Resource management: fuel tanks and pumps.
    Resman,
    /// Task schedule display.
    Scheduling,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Sysmon,
        TaskKind::Track,
        TaskKind::Communications,
        TaskKind::Resman,
        TaskKind::Scheduling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Sysmon => "sysmon",
            TaskKind::Track => "track",
            TaskKind::Communications => "communications",
            TaskKind::Resman => "resman",
            TaskKind::Scheduling => "scheduling",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        TaskKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown task {s:?} (expected one of sysmon, track, communications, resman, scheduling)"
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A typed parameter value carried by a parameter-change command.
///
/// Deserialized untagged, so `true`, `5000`, `0.5` and `"text"` in TOML map to
/// the matching variant without any expression evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Render a float with at most six decimals, trailing zeros trimmed but one
/// decimal kept (`0.45`, `1.0`, `0.333333`).
fn format_float(x: f64) -> String {
    let fixed = format!("{x:.6}");
    let mut s = fixed.trim_end_matches('0').to_string();
    if s.ends_with('.') {
        s.push('0');
    }
    if s == "-0.0" {
        s = "0.0".to_string();
    }
    s
}

// ---------------------------------------------------------------------------
// RatioBalancing
// ---------------------------------------------------------------------------

/// Proportions are compared in thousandths: a ratio term that rounds to zero
/// at this resolution cannot be represented in a prompt pool.
pub const RATIO_RESOLUTION: f64 = 1000.0;

/// What to do when communications prompts cannot be balanced to the exact
/// target ratio within the retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioBalancing {
    /// Fail generation.
    Strict,
    /// Keep the sample whose realized ratio is closest to the target.
    #[default]
    Closest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_round_trips_names() {
        for kind in TaskKind::ALL {
            assert_eq!(kind.as_str().parse::<TaskKind>().unwrap(), kind);
        }
        assert!("radio".parse::<TaskKind>().is_err());
    }

    #[test]
    fn float_rendering_trims_noise() {
        assert_eq!(Value::Float(1.0 - 0.55).to_string(), "0.45");
        assert_eq!(Value::Float(0.75).to_string(), "0.75");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(1.0 / 3.0).to_string(), "0.333333");
        assert_eq!(Value::Float(-0.0000001).to_string(), "0.0");
    }

    #[test]
    fn value_rendering() {
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Int(5000).to_string(), "5000");
        assert_eq!(Value::from("own").to_string(), "own");
    }

    #[test]
    fn untagged_values_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            v: Vec<Value>,
        }
        let h: Holder = toml::from_str(r#"v = [true, 5000, 0.5, "x"]"#).unwrap();
        assert_eq!(
            h.v,
            vec![
                Value::Bool(true),
                Value::Int(5000),
                Value::Float(0.5),
                Value::Text("x".into())
            ]
        );
    }
}
