pub mod table;

pub use table::render_table;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::Report;

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One-line footer printed under the table.
pub fn render_summary(report: &Report) -> String {
    let summary = report.summary();
    let mut line = format!(
        "{} intervals | alerts: {} | critical: {} | watering: {} full, {} light",
        summary.intervals,
        summary.alert_intervals,
        summary.critical_intervals,
        summary.full_waterings,
        summary.light_waterings
    );
    if let Some(seed) = report.seed {
        line.push_str(&format!(" | seed: {}", seed));
    }
    line
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\n\n{}",
            render_table(report),
            render_summary(report)
        )),
        OutputFormat::Json => render_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::ScriptedSource;
    use crate::logic::simulation::{worst_case_reading, Simulation};

    fn worst_case_report() -> Report {
        let mut source = ScriptedSource::repeat(worst_case_reading());
        Simulation::new(3).run(&mut source, Some(8))
    }

    #[test]
    fn summary_line() {
        let line = render_summary(&worst_case_report());
        assert_eq!(
            line,
            "3 intervals | alerts: 3 | critical: 1 | watering: 3 full, 0 light | seed: 8"
        );
    }

    #[test]
    fn json_round_trips_records() {
        let report = worst_case_report();
        let json = render(&report, OutputFormat::Json).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.records, report.records);
        assert_eq!(parsed.seed, Some(8));
    }

    #[test]
    fn table_format_includes_summary() {
        let out = render(&worst_case_report(), OutputFormat::Table).unwrap();
        assert!(out.contains("Recomm."));
        assert!(out.ends_with("seed: 8"));
    }
}
