//! Task parameter tables read by the phase generator.
//!
//! These mirror the defaults of the live task instances; a scenario file may
//! override any of them under `[tasks.<name>]`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Read-only parameters of every task the phase generator needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskParameters {
    pub sysmon: SysmonParameters,
    pub communications: CommunicationsParameters,
    pub resman: ResmanParameters,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SysmonParameters {
    /// How long a failure stays armed before it times out, in milliseconds.
    pub alerttimeout: u32,
    /// Warning light identifiers (`lights-<id>-failure`).
    pub lights: Vec<String>,
    /// Scale identifiers (`scales-<id>-failure`).
    pub scales: Vec<String>,
}

impl Default for SysmonParameters {
    fn default() -> Self {
        Self {
            alerttimeout: 10_000,
            lights: vec!["1".into(), "2".into()],
            scales: vec!["1".into(), "2".into(), "3".into(), "4".into()],
        }
    }
}

impl SysmonParameters {
    /// Alert timeout rounded up to whole seconds.
    pub fn alert_timeout_secs(&self) -> u32 {
        self.alerttimeout.div_ceil(1000)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommunicationsParameters {
    /// Prompt value addressing the participant's own callsign.
    pub own_prompt: String,
    /// Prompt value addressing another callsign.
    pub other_prompt: String,
}

impl Default for CommunicationsParameters {
    fn default() -> Self {
        Self {
            own_prompt: "own".into(),
            other_prompt: "other".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResmanParameters {
    pub tanks: BTreeMap<String, TankSpec>,
    pub pumps: BTreeMap<String, PumpSpec>,
}

/// A fuel tank. `capacity = None` means an unlimited reservoir.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TankSpec {
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub target: Option<u32>,
}

/// A pump moving `flow` units per minute from one tank to another.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PumpSpec {
    pub from: String,
    pub to: String,
    pub flow: u32,
}

impl Default for ResmanParameters {
    fn default() -> Self {
        let tank = |capacity: Option<u32>, target: Option<u32>| TankSpec { capacity, target };
        let pump = |from: &str, to: &str, flow: u32| PumpSpec {
            from: from.into(),
            to: to.into(),
            flow,
        };

        let tanks = BTreeMap::from([
            ("a".to_string(), tank(Some(4000), Some(2500))),
            ("b".to_string(), tank(Some(4000), Some(2500))),
            ("c".to_string(), tank(Some(2000), None)),
            ("d".to_string(), tank(Some(2000), None)),
            ("e".to_string(), tank(None, None)),
            ("f".to_string(), tank(None, None)),
        ]);
        let pumps = BTreeMap::from([
            ("1".to_string(), pump("c", "a", 800)),
            ("2".to_string(), pump("e", "a", 600)),
            ("3".to_string(), pump("d", "b", 800)),
            ("4".to_string(), pump("f", "b", 600)),
            ("5".to_string(), pump("e", "c", 600)),
            ("6".to_string(), pump("f", "d", 600)),
            ("7".to_string(), pump("a", "b", 400)),
            ("8".to_string(), pump("b", "a", 400)),
        ]);
        Self { tanks, pumps }
    }
}

impl ResmanParameters {
    /// Tanks that carry a target level, in name order.
    pub fn target_tanks(&self) -> impl Iterator<Item = &str> {
        self.tanks
            .iter()
            .filter(|(_, t)| t.target.is_some())
            .map(|(name, _)| name.as_str())
    }

    /// Total flow per minute feeding the target tanks from reservoir tanks.
    ///
    /// Transfers between two target tanks move fuel around without adding
    /// any, so they are excluded.
    pub fn total_feed_capacity(&self) -> u32 {
        let is_target =
            |name: &str| self.tanks.get(name).is_some_and(|t| t.target.is_some());
        self.pumps
            .values()
            .filter(|p| is_target(&p.to) && !is_target(&p.from))
            .map(|p| p.flow)
            .sum()
    }

    /// The largest leak a single target tank may be given.
    pub fn max_single_leak(&self) -> f64 {
        f64::from(self.total_feed_capacity()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feed_capacity_counts_limited_and_unlimited_feeds() {
        let resman = ResmanParameters::default();
        // c->a 800, e->a 600, d->b 800, f->b 600
        assert_eq!(resman.total_feed_capacity(), 2800);
        assert_eq!(resman.max_single_leak(), 1400.0);
        assert_eq!(resman.target_tanks().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn alert_timeout_rounds_up() {
        let mut sysmon = SysmonParameters::default();
        assert_eq!(sysmon.alert_timeout_secs(), 10);
        sysmon.alerttimeout = 2500;
        assert_eq!(sysmon.alert_timeout_secs(), 3);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let params: TaskParameters = toml::from_str(
            r#"
[sysmon]
alerttimeout = 5000

[communications]
own_prompt = "self"
"#,
        )
        .unwrap();
        assert_eq!(params.sysmon.alerttimeout, 5000);
        assert_eq!(params.sysmon.lights.len(), 2);
        assert_eq!(params.communications.own_prompt, "self");
        assert_eq!(params.communications.other_prompt, "other");
        assert_eq!(params.resman.pumps.len(), 8);
    }
}
