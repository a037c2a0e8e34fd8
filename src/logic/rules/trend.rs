use super::MOISTURE_HISTORY_WINDOW;
use crate::models::WateringRecommendation;

/// Recommend the next watering from the trailing average of soil moisture.
///
/// Only the last [`MOISTURE_HISTORY_WINDOW`] entries are averaged; a shorter
/// history yields [`WateringRecommendation::InsufficientData`].
pub fn recommend_future_watering(moisture_history: &[f64]) -> WateringRecommendation {
    if moisture_history.len() < MOISTURE_HISTORY_WINDOW {
        return WateringRecommendation::InsufficientData;
    }

    let tail = &moisture_history[moisture_history.len() - MOISTURE_HISTORY_WINDOW..];
    let avg_moisture = tail.iter().sum::<f64>() / MOISTURE_HISTORY_WINDOW as f64;

    if avg_moisture < 40.0 {
        WateringRecommendation::RecommendWatering
    } else {
        WateringRecommendation::DelayWatering
    }
}
