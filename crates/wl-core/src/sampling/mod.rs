//! Randomized building blocks shared by the phase generators.

pub mod cyclic;
pub mod partition;
pub mod ratio;

pub use cyclic::choices;
pub use partition::get_parts;
pub use ratio::reduce_ratio;
