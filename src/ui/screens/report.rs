use crate::models::{DecisionRecord, Report};
use crate::ui::components::{
    co2_gauge, humidity_gauge, light_gauge, moisture_gauge, temperature_gauge,
};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

pub struct ReportScreen<'a> {
    pub report: &'a Report,
    pub records: Vec<&'a DecisionRecord>,
    pub selected_index: usize,
    pub alerts_only: bool,
}

impl<'a> ReportScreen<'a> {
    pub fn new(report: &'a Report, records: Vec<&'a DecisionRecord>) -> Self {
        Self {
            report,
            records,
            selected_index: 0,
            alerts_only: false,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn alerts_only(mut self, alerts_only: bool) -> Self {
        self.alerts_only = alerts_only;
        self
    }
}

impl Widget for ReportScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Title
        let summary = self.report.summary();
        let mut title = vec![
            Span::styled("Greenhouse Decisions", Theme::title()),
            Span::styled(
                format!(
                    " - {} intervals, {} alerts, {} critical",
                    summary.intervals, summary.alert_intervals, summary.critical_intervals
                ),
                Theme::dim(),
            ),
        ];
        if let Some(seed) = self.report.seed {
            title.push(Span::styled(format!(" (seed {})", seed), Theme::dim()));
        }
        if self.alerts_only {
            title.push(Span::styled(" [alerts only]", Theme::alert_style(true, false)));
        }
        Paragraph::new(Line::from(title)).render(chunks[0], buf);

        // Content: hourly table on left, details on right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_table(content[0], buf);
        self.render_details(content[1], buf);

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::key_hint()),
            Span::styled("Navigate ", Theme::dim()),
            Span::styled("[Home/End]", Theme::key_hint()),
            Span::styled("First/Last ", Theme::dim()),
            Span::styled("[a]", Theme::key_hint()),
            Span::styled("Alerts Only ", Theme::dim()),
            Span::styled("[q]", Theme::key_hint()),
            Span::styled("Quit", Theme::dim()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl ReportScreen<'_> {
    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Hourly Decisions")
            .borders(Borders::ALL)
            .border_style(Theme::dim());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            let para = Paragraph::new(Span::styled("No intervals to show", Theme::dim()));
            para.render(inner, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Hour"),
            Cell::from("Watering"),
            Cell::from("Shading"),
            Cell::from("Risk"),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let risk = if record.critical {
                    "CRITICAL"
                } else if record.alert {
                    "Alert"
                } else {
                    "-"
                };

                Row::new(vec![
                    Cell::from(format!("{:>2}", record.hour)),
                    Cell::from(record.watering.as_str())
                        .style(Style::default().fg(record.watering.color())),
                    Cell::from(record.shading.as_str())
                        .style(Style::default().fg(record.shading.color())),
                    Cell::from(risk).style(Theme::alert_style(record.alert, record.critical)),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Length(23),
            Constraint::Length(15),
            Constraint::Min(8),
        ];

        let table = Table::new(rows, widths).header(header);
        Widget::render(table, inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::dim());

        let inner = block.inner(area);
        block.render(area, buf);

        let record = match self.records.get(self.selected_index) {
            Some(r) => *r,
            None => {
                let para = Paragraph::new(Span::styled(
                    "Select an interval to view details",
                    Theme::dim(),
                ));
                para.render(inner, buf);
                return;
            }
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Climate gauges
                Constraint::Length(4), // Soil/CO2 gauges
                Constraint::Min(6),    // Decisions
            ])
            .split(inner);

        let climate = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let reading = &record.reading;
        temperature_gauge("Temperature", reading.temperature).render(climate[0], buf);
        humidity_gauge("Humidity", reading.humidity).render(climate[1], buf);

        let soil = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(rows[1]);
        moisture_gauge("Soil", reading.soil_moisture).render(soil[0], buf);
        light_gauge("Light", f64::from(reading.light)).render(soil[1], buf);
        co2_gauge("CO2", f64::from(reading.co2)).render(soil[2], buf);

        let mut lines = vec![
            Line::from(vec![Span::styled(
                format!("Hour {}", record.hour),
                Theme::header(),
            )]),
            Line::from(vec![
                Span::styled("Watering: ", Theme::dim()),
                Span::styled(
                    record.watering.as_str(),
                    Style::default().fg(record.watering.color()),
                ),
            ]),
            Line::from(vec![
                Span::styled("Shading: ", Theme::dim()),
                Span::styled(
                    record.shading.as_str(),
                    Style::default().fg(record.shading.color()),
                ),
            ]),
            Line::from(vec![
                Span::styled("Outlook: ", Theme::dim()),
                Span::styled(record.recommendation.as_str(), Theme::info()),
            ]),
        ];

        let status = if record.critical {
            "Critical - sustained risk"
        } else if record.alert {
            "Alert"
        } else {
            "Normal"
        };
        lines.push(Line::from(vec![
            Span::styled("Status: ", Theme::dim()),
            Span::styled(status, Theme::alert_style(record.alert, record.critical)),
        ]));

        if !record.conditions.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Risks: ", Theme::dim()),
                Span::styled(record.conditions_label(), Theme::normal()),
            ]));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        para.render(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::ScriptedSource;
    use crate::logic::simulation::{worst_case_reading, Simulation};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_selected_interval() {
        let mut source = ScriptedSource::repeat(worst_case_reading());
        let report = Simulation::new(3).run(&mut source, Some(2));
        let records: Vec<&DecisionRecord> = report.records.iter().collect();

        let area = Rect::new(0, 0, 140, 30);
        let mut buf = Buffer::empty(area);
        ReportScreen::new(&report, records)
            .with_selection(2)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Greenhouse Decisions"));
        assert!(text.contains("3 intervals, 3 alerts, 1 critical"));
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("Hour 3"));
    }

    #[test]
    fn renders_empty_placeholder() {
        let report = Report::new("Scripted Readings", None);

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        ReportScreen::new(&report, Vec::new())
            .alerts_only(true)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("No intervals to show"));
        assert!(text.contains("[alerts only]"));
    }
}
