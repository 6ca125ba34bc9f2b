#[macro_use]
mod log_macros;

pub mod builder;
pub mod distribute;
pub mod error;
pub mod event;
pub mod generate;
pub mod output;
pub mod phase;
pub mod sampling;
pub mod state;

pub use builder::{Scenario, ScenarioBuilder};
pub use error::{GenError, GenReason, GenResult};
pub use event::{Command, Event, PendingEvent, ScenarioLine, Verb};
pub use generate::{generate, generate_seeded};
pub use state::{TaskState, task_state};
