pub mod gauge;

pub use gauge::{co2_gauge, humidity_gauge, light_gauge, moisture_gauge, temperature_gauge};
