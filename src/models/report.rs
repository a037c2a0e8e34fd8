use super::decision::{DecisionRecord, WateringAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every decision record produced by one simulation run, in hour order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub records: Vec<DecisionRecord>,
}

/// Aggregate counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub intervals: usize,
    pub alert_intervals: usize,
    pub critical_intervals: usize,
    pub full_waterings: usize,
    pub light_waterings: usize,
}

impl Report {
    pub fn new(source: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            seed,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: DecisionRecord) {
        self.records.push(record);
    }

    pub fn summary(&self) -> ReportSummary {
        let count_watering = |action: WateringAction| {
            self.records
                .iter()
                .filter(|r| r.watering == action)
                .count()
        };

        ReportSummary {
            intervals: self.records.len(),
            alert_intervals: self.records.iter().filter(|r| r.alert).count(),
            critical_intervals: self.records.iter().filter(|r| r.critical).count(),
            full_waterings: count_watering(WateringAction::FullWatering),
            light_waterings: count_watering(WateringAction::LightWatering),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reading, ShadingAction, WateringRecommendation};

    fn record(hour: u32, watering: WateringAction, alert: bool, critical: bool) -> DecisionRecord {
        DecisionRecord {
            hour,
            reading: Reading::new(30.0, 40.0, 600, 40.0, 800),
            watering,
            shading: ShadingAction::NoAction,
            alert,
            conditions: Vec::new(),
            critical,
            recommendation: WateringRecommendation::InsufficientData,
        }
    }

    #[test]
    fn summary_counts() {
        let mut report = Report::new("Scripted Readings", None);
        report.push(record(1, WateringAction::FullWatering, true, false));
        report.push(record(2, WateringAction::LightWatering, true, false));
        report.push(record(3, WateringAction::FullWatering, true, true));
        report.push(record(4, WateringAction::Skip, false, false));

        let summary = report.summary();
        assert_eq!(summary.intervals, 4);
        assert_eq!(summary.alert_intervals, 3);
        assert_eq!(summary.critical_intervals, 1);
        assert_eq!(summary.full_waterings, 2);
        assert_eq!(summary.light_waterings, 1);
    }

    #[test]
    fn empty_report_summary() {
        let report = Report::new("Simulated Sensors", Some(3));
        assert_eq!(report.summary(), ReportSummary::default());
    }
}
