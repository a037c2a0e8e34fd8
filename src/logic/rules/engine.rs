use super::{
    control_shading, control_watering, evaluate_alerts, recommend_future_watering,
    track_consecutive_alerts,
};
use crate::models::{DecisionRecord, Reading, RollingState};

/// Applies every greenhouse rule to a reading, threading the rolling state.
pub struct DecisionEngine {
    rules: Vec<(&'static str, &'static str)>,
}

impl DecisionEngine {
    pub fn new() -> Self {
        let rules = vec![
            ("watering", "Watering Control"),
            ("shading", "Shading Control"),
            ("risk_alerts", "Risk Alerts"),
            ("critical_streak", "Critical Alert Streak"),
            ("moisture_trend", "Moisture Trend Recommendation"),
        ];

        Self { rules }
    }

    /// Evaluate one interval.
    ///
    /// The consecutive alert count is updated from this reading's alert, and
    /// the soil moisture is appended to the history before the trend is read,
    /// so the recommendation already includes the current hour.
    pub fn evaluate(&self, hour: u32, reading: &Reading, state: &mut RollingState) -> DecisionRecord {
        let watering = control_watering(reading.soil_moisture, reading.temperature, reading.humidity);
        let shading = control_shading(reading.light);
        let assessment = evaluate_alerts(reading);
        let critical = track_consecutive_alerts(state, assessment.alert);

        state.record_moisture(reading.soil_moisture);
        let recommendation = recommend_future_watering(&state.moisture_history);

        tracing::debug!(
            hour,
            watering = %watering,
            shading = %shading,
            alert = assessment.alert,
            consecutive_alerts = state.consecutive_alerts,
            "Evaluated interval"
        );

        DecisionRecord {
            hour,
            reading: *reading,
            watering,
            shading,
            alert: assessment.alert,
            conditions: assessment.conditions,
            critical,
            recommendation,
        }
    }

    pub fn list_rules(&self) -> &[(&'static str, &'static str)] {
        &self.rules
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
