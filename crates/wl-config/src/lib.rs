pub mod logging;
pub mod scenario;
pub mod tasks;
pub mod types;
mod validate;

pub use logging::{LogFormat, LoggingConfig};
pub use scenario::{BlockConfig, ExtraEvent, InterBlockEvent, InterBlockKind, ScenarioConfig};
pub use tasks::{
    CommunicationsParameters, PumpSpec, ResmanParameters, SysmonParameters, TankSpec,
    TaskParameters,
};
pub use types::{RATIO_RESOLUTION, RatioBalancing, TaskKind, Value};
