use crate::models::WateringAction;

/// Watering decision for the current interval.
///
/// Evaluated in priority order:
/// - Soil moisture <35% with dry air (<40% RH) or heat (>30°C): full watering
/// - Soil moisture 35-50% (inclusive) with temps >35°C: light watering
/// - Anything else: skip
pub fn control_watering(soil_moisture: f64, temperature: f64, humidity: f64) -> WateringAction {
    if soil_moisture < 35.0 && (humidity < 40.0 || temperature > 30.0) {
        return WateringAction::FullWatering;
    }

    if (35.0..=50.0).contains(&soil_moisture) && temperature > 35.0 {
        return WateringAction::LightWatering;
    }

    WateringAction::Skip
}
