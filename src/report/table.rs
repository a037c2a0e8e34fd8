use crate::models::{DecisionRecord, Report};

const HEADERS: [&str; 12] = [
    "Hour",
    "Temp(°C)",
    "Hum(%)",
    "Light(lux)",
    "Soil(%)",
    "CO2(ppm)",
    "Watering",
    "Shading",
    "Alert",
    "Conditions",
    "Critical",
    "Recomm.",
];

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn row_cells(record: &DecisionRecord) -> [String; 12] {
    let r = &record.reading;
    [
        record.hour.to_string(),
        format!("{:.1}", r.temperature),
        format!("{:.1}", r.humidity),
        r.light.to_string(),
        format!("{:.1}", r.soil_moisture),
        r.co2.to_string(),
        record.watering.to_string(),
        record.shading.to_string(),
        bool_label(record.alert).to_string(),
        record.conditions_label(),
        bool_label(record.critical).to_string(),
        record.recommendation.to_string(),
    ]
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the report as a right-aligned plain-text table, one row per hour.
pub fn render_table(report: &Report) -> String {
    let rows: Vec<[String; 12]> = report.records.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&HEADERS, &widths));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_line(&cells, &widths));
    }

    lines.join("\n")
}
