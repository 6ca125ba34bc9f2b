use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::logging::LoggingConfig;
use crate::tasks::TaskParameters;
use crate::types::{RatioBalancing, TaskKind, Value};
use crate::validate;

// ---------------------------------------------------------------------------
// Raw TOML structure (intermediate representation)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ScenarioConfigRaw {
    name: String,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_refractory")]
    events_refractory_duration: u32,
    #[serde(default = "default_target_ratio")]
    communications_target_ratio: f64,
    #[serde(default = "default_prompt_duration")]
    average_auditory_prompt_duration: u32,
    #[serde(default)]
    inter_block_padding: u32,
    #[serde(default)]
    ratio_balancing: RatioBalancing,
    #[serde(default)]
    blocks: Vec<BlockConfigRaw>,
    #[serde(default)]
    inter_block: Vec<InterBlockEvent>,
    #[serde(default)]
    tasks: TaskParameters,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
struct BlockConfigRaw {
    duration: u32,
    #[serde(default)]
    plugins: BTreeMap<String, f64>,
    #[serde(default)]
    extra_events: Vec<ExtraEvent>,
}

fn default_refractory() -> u32 {
    1
}

fn default_target_ratio() -> f64 {
    0.5
}

fn default_prompt_duration() -> u32 {
    13
}

// ---------------------------------------------------------------------------
// ScenarioConfig (resolved, validated)
// ---------------------------------------------------------------------------

/// Whole-scenario configuration handed to the generator.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    /// Seed of the random source; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Minimum seconds between two consecutive events of the same task.
    pub events_refractory_duration: u32,
    /// Target share of prompts addressed to the participant's own callsign.
    pub communications_target_ratio: f64,
    /// Average duration of one auditory prompt, in seconds.
    pub average_auditory_prompt_duration: u32,
    /// Seconds added to the timeline after each inter-block insertion.
    pub inter_block_padding: u32,
    pub ratio_balancing: RatioBalancing,
    pub blocks: Vec<BlockConfig>,
    pub inter_block: Vec<InterBlockEvent>,
    pub tasks: TaskParameters,
    pub logging: LoggingConfig,
}

impl ScenarioConfig {
    /// A configuration with default globals and no blocks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
            events_refractory_duration: default_refractory(),
            communications_target_ratio: default_target_ratio(),
            average_auditory_prompt_duration: default_prompt_duration(),
            inter_block_padding: 0,
            ratio_balancing: RatioBalancing::default(),
            blocks: Vec::new(),
            inter_block: Vec::new(),
            tasks: TaskParameters::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Read and parse a scenario TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content.parse()
    }

    /// Check every invariant the generator relies on.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate::validate(self)
    }

    /// Sum of all block durations, in seconds.
    pub fn blocks_duration(&self) -> u64 {
        self.blocks.iter().map(|b| u64::from(b.duration_sec)).sum()
    }

    /// Inter-block events at `position`, in declaration order.
    pub fn inter_block_at(&self, position: usize) -> impl Iterator<Item = &InterBlockEvent> {
        self.inter_block.iter().filter(move |e| e.position == position)
    }
}

impl FromStr for ScenarioConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a resolved, validated [`ScenarioConfig`].
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let raw: ScenarioConfigRaw = toml::from_str(toml_str)?;

        let mut blocks = Vec::with_capacity(raw.blocks.len());
        for (i, block) in raw.blocks.into_iter().enumerate() {
            let mut plugins = BTreeMap::new();
            for (name, difficulty) in block.plugins {
                let kind: TaskKind = name
                    .parse()
                    .map_err(|e| anyhow::anyhow!("blocks[{i}].plugins: {e}"))?;
                plugins.insert(kind, difficulty);
            }
            blocks.push(BlockConfig {
                duration_sec: block.duration,
                plugins,
                extra_events: block.extra_events,
            });
        }

        let config = ScenarioConfig {
            name: raw.name,
            seed: raw.seed,
            events_refractory_duration: raw.events_refractory_duration,
            communications_target_ratio: raw.communications_target_ratio,
            average_auditory_prompt_duration: raw.average_auditory_prompt_duration,
            inter_block_padding: raw.inter_block_padding,
            ratio_balancing: raw.ratio_balancing,
            blocks,
            inter_block: raw.inter_block,
            tasks: raw.tasks,
            logging: raw.logging,
        };

        config.validate()?;

        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// One contiguous, fixed-duration segment of the scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockConfig {
    pub duration_sec: u32,
    /// Requested tasks and their difficulty in `[0, 1]`.
    pub plugins: BTreeMap<TaskKind, f64>,
    /// Parameter events applied verbatim at block start.
    pub extra_events: Vec<ExtraEvent>,
}

impl BlockConfig {
    pub fn new(duration_sec: u32) -> Self {
        Self {
            duration_sec,
            plugins: BTreeMap::new(),
            extra_events: Vec::new(),
        }
    }

    pub fn with_task(mut self, kind: TaskKind, difficulty: f64) -> Self {
        self.plugins.insert(kind, difficulty);
        self
    }

    /// Mean difficulty over the requested tasks, `0.0` when none is requested.
    pub fn average_difficulty(&self) -> f64 {
        if self.plugins.is_empty() {
            return 0.0;
        }
        self.plugins.values().sum::<f64>() / self.plugins.len() as f64
    }
}

/// A `(task, parameter, value)` triple, written in TOML as
/// `["sysmon", "alerttimeout", 5000]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, String, Value)")]
pub struct ExtraEvent {
    pub task: String,
    pub parameter: String,
    pub value: Value,
}

impl From<(String, String, Value)> for ExtraEvent {
    fn from((task, parameter, value): (String, String, Value)) -> Self {
        Self {
            task,
            parameter,
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Inter-block insertions
// ---------------------------------------------------------------------------

/// Kind of untimed insertion between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterBlockKind {
    /// An instruction page.
    Instructions,
    /// A rating-scale questionnaire.
    Genericscales,
}

impl InterBlockKind {
    /// Name of the task that displays this insertion.
    pub fn task_name(&self) -> &'static str {
        match self {
            InterBlockKind::Instructions => "instructions",
            InterBlockKind::Genericscales => "genericscales",
        }
    }
}

/// An untimed insertion before, between or after blocks. `position` 0 is
/// before the first block, `blocks.len()` after the last.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterBlockEvent {
    #[serde(alias = "type")]
    pub kind: InterBlockKind,
    pub filename: String,
    pub position: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
