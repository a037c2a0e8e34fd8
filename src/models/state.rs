/// State carried from one interval to the next by the simulation driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollingState {
    /// Number of back-to-back intervals that raised an alert
    pub consecutive_alerts: u32,
    /// Every soil moisture reading seen so far, oldest first
    pub moisture_history: Vec<f64>,
}

impl RollingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_moisture(&mut self, soil_moisture: f64) {
        self.moisture_history.push(soil_moisture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = RollingState::new();
        assert_eq!(state.consecutive_alerts, 0);
        assert!(state.moisture_history.is_empty());
    }

    #[test]
    fn record_moisture_appends_in_order() {
        let mut state = RollingState::new();
        state.record_moisture(55.0);
        state.record_moisture(42.5);
        assert_eq!(state.moisture_history, vec![55.0, 42.5]);
    }
}
