pub mod rules;
pub mod simulation;

pub use simulation::{critical_flag_self_check, Simulation};
