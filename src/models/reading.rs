use serde::{Deserialize, Serialize};

/// One simulated snapshot of the five greenhouse sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Light intensity in lux
    pub light: u32,
    /// Volumetric soil moisture in %
    pub soil_moisture: f64,
    /// CO2 concentration in ppm
    pub co2: u32,
}

impl Reading {
    pub fn new(temperature: f64, humidity: f64, light: u32, soil_moisture: f64, co2: u32) -> Self {
        Self {
            temperature,
            humidity,
            light,
            soil_moisture,
            co2,
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1}°C, {:.1}% RH, {} lux, {:.1}% soil, {} ppm CO2",
            self.temperature, self.humidity, self.light, self.soil_moisture, self.co2
        )
    }
}

/// Round to one decimal place, the resolution the simulated sensors report at.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
