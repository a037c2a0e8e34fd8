use super::ReadingSource;
use crate::models::Reading;

/// Replays a fixed list of readings, wrapping around when exhausted.
pub struct ScriptedSource {
    readings: Vec<Reading>,
    position: usize,
}

impl ScriptedSource {
    /// Returns `None` when there is nothing to replay.
    pub fn new(readings: Vec<Reading>) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }

        Some(Self {
            readings,
            position: 0,
        })
    }

    #[cfg(test)]
    pub fn repeat(reading: Reading) -> Self {
        Self {
            readings: vec![reading],
            position: 0,
        }
    }
}

impl ReadingSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "Scripted Readings"
    }

    fn next_reading(&mut self) -> Reading {
        let reading = self.readings[self.position % self.readings.len()];
        self.position += 1;
        reading
    }
}
