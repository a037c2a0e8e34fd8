pub mod random;
pub mod scripted;

pub use random::RandomSensorSource;
pub use scripted::ScriptedSource;

use crate::models::Reading;

/// Supplies one reading per simulated interval.
pub trait ReadingSource {
    /// Human-readable name, used in logs
    fn name(&self) -> &'static str;

    fn next_reading(&mut self) -> Reading;
}
