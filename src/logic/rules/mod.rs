pub mod alerts;
pub mod critical;
pub mod engine;
pub mod shading;
pub mod trend;
pub mod watering;

pub use alerts::evaluate_alerts;
pub use critical::track_consecutive_alerts;
pub use engine::DecisionEngine;
pub use shading::control_shading;
pub use trend::recommend_future_watering;
pub use watering::control_watering;

/// Consecutive alert intervals tolerated before an interval is flagged critical.
/// The flag is raised only once the count is strictly greater than this value.
pub const CRITICAL_ALERT_THRESHOLD: u32 = 2;

/// Number of trailing soil moisture readings averaged by the trend recommender.
pub const MOISTURE_HISTORY_WINDOW: usize = 3;

/// Minimum number of co-occurring risk conditions that raise an alert.
pub const MIN_ALERT_CONDITIONS: usize = 3;
