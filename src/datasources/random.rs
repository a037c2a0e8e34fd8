use super::ReadingSource;
use crate::config::{SensorRange, SensorRanges};
use crate::models::{round_tenths, Reading};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random sensors sampling each value uniformly from its configured range.
///
/// Float readings are rounded to one decimal place; light and CO2 are whole
/// numbers. A fixed seed reproduces the same sequence of readings.
pub struct RandomSensorSource {
    rng: StdRng,
    ranges: SensorRanges,
}

impl RandomSensorSource {
    pub fn new(ranges: SensorRanges, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng, ranges }
    }

    fn sample_f64(&mut self, range: SensorRange) -> f64 {
        round_tenths(self.rng.gen_range(range.min..=range.max))
    }

    /// Bounds are validated by `Config` to hold at least one whole number.
    fn sample_u32(&mut self, range: SensorRange) -> u32 {
        let min = range.min.ceil() as u32;
        let max = range.max.floor() as u32;
        self.rng.gen_range(min..=max)
    }
}

impl ReadingSource for RandomSensorSource {
    fn name(&self) -> &'static str {
        "Simulated Sensors"
    }

    fn next_reading(&mut self) -> Reading {
        let ranges = self.ranges;
        Reading {
            temperature: self.sample_f64(ranges.temperature),
            humidity: self.sample_f64(ranges.humidity),
            light: self.sample_u32(ranges.light),
            soil_moisture: self.sample_f64(ranges.soil_moisture),
            co2: self.sample_u32(ranges.co2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_within_default_ranges() {
        let ranges = SensorRanges::default();
        let mut source = RandomSensorSource::new(ranges, Some(7));

        for _ in 0..500 {
            let r = source.next_reading();
            assert!((20.0..=45.0).contains(&r.temperature), "{}", r);
            assert!((15.0..=80.0).contains(&r.humidity), "{}", r);
            assert!((100..=1200).contains(&r.light), "{}", r);
            assert!((20.0..=80.0).contains(&r.soil_moisture), "{}", r);
            assert!((300..=1500).contains(&r.co2), "{}", r);
        }
    }

    #[test]
    fn float_readings_have_one_decimal() {
        let mut source = RandomSensorSource::new(SensorRanges::default(), Some(11));

        for _ in 0..50 {
            let r = source.next_reading();
            for value in [r.temperature, r.humidity, r.soil_moisture] {
                let scaled = value * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-6, "{}", value);
            }
        }
    }

    #[test]
    fn same_seed_same_readings() {
        let mut a = RandomSensorSource::new(SensorRanges::default(), Some(42));
        let mut b = RandomSensorSource::new(SensorRanges::default(), Some(42));

        for _ in 0..10 {
            assert_eq!(a.next_reading(), b.next_reading());
        }
    }

    #[test]
    fn fractional_whole_number_bounds_respected() {
        let ranges = SensorRanges {
            light: SensorRange::new(100.2, 101.7),
            co2: SensorRange::new(399.5, 400.5),
            ..SensorRanges::default()
        };
        let mut source = RandomSensorSource::new(ranges, Some(3));

        for _ in 0..50 {
            let r = source.next_reading();
            assert_eq!(r.light, 101);
            assert_eq!(r.co2, 400);
        }
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let ranges = SensorRanges {
            temperature: SensorRange::new(30.0, 30.0),
            light: SensorRange::new(500.0, 500.0),
            ..SensorRanges::default()
        };
        let mut source = RandomSensorSource::new(ranges, Some(1));

        for _ in 0..10 {
            let r = source.next_reading();
            assert_eq!(r.temperature, 30.0);
            assert_eq!(r.light, 500);
        }
    }
}
