use crate::datasources::{ReadingSource, ScriptedSource};
use crate::error::{GreenhouseError, Result};
use crate::logic::rules::{DecisionEngine, CRITICAL_ALERT_THRESHOLD};
use crate::models::{DecisionRecord, Reading, Report, RollingState};

/// Drives the decision engine over a fixed number of hourly intervals.
pub struct Simulation {
    engine: DecisionEngine,
    intervals: u32,
}

impl Simulation {
    pub fn new(intervals: u32) -> Self {
        Self {
            engine: DecisionEngine::new(),
            intervals,
        }
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Run hours `1..=intervals`, one reading each, with a fresh rolling state.
    pub fn run(&self, source: &mut dyn ReadingSource, seed: Option<u64>) -> Report {
        tracing::info!(
            intervals = self.intervals,
            source = source.name(),
            "Starting simulation"
        );

        let mut state = RollingState::new();
        let mut report = Report::new(source.name(), seed);

        for hour in 1..=self.intervals {
            let reading = source.next_reading();
            let record = self.engine.evaluate(hour, &reading, &mut state);

            if record.critical {
                tracing::warn!(
                    hour,
                    consecutive_alerts = state.consecutive_alerts,
                    conditions = %record.conditions_label(),
                    "Critical: sustained risk conditions"
                );
            }

            report.push(record);
        }

        let summary = report.summary();
        tracing::info!(
            alerts = summary.alert_intervals,
            critical = summary.critical_intervals,
            "Simulation complete"
        );

        report
    }
}

/// A reading that trips all five risk conditions.
pub fn worst_case_reading() -> Reading {
    Reading::new(40.0, 10.0, 1200, 20.0, 1300)
}

/// Replays the worst-case reading for one more interval than the critical
/// threshold allows and confirms only the last interval is flagged critical.
pub fn critical_flag_self_check() -> Result<Vec<DecisionRecord>> {
    let intervals = CRITICAL_ALERT_THRESHOLD + 1;
    let script = vec![worst_case_reading(); intervals as usize];
    let mut source = ScriptedSource::new(script)
        .ok_or_else(|| GreenhouseError::SelfCheck("no readings to replay".into()))?;
    let report = Simulation::new(intervals).run(&mut source, None);

    for record in &report.records {
        let expected = record.hour > CRITICAL_ALERT_THRESHOLD;
        if !record.alert {
            return Err(GreenhouseError::SelfCheck(format!(
                "hour {} did not raise an alert",
                record.hour
            )));
        }
        if record.critical != expected {
            return Err(GreenhouseError::SelfCheck(format!(
                "hour {}: critical flag was {}, expected {}",
                record.hour, record.critical, expected
            )));
        }
    }

    Ok(report.records)
}
