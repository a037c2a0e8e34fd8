use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: f64,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
    limit: Option<f64>,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: f64, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
            limit: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Mark the rule threshold on the bar with a `│` tick.
    pub fn limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn bar_offset(&self, value: f64, width: u16) -> u16 {
        let ratio = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        (width as f64 * ratio) as u16
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::dim());

        let inner = block.inner(area);
        block.render(area, buf);

        let color = self.get_color(self.value);
        let value_str = format!("{:.prec$}{}", self.value, self.unit, prec = self.precision);

        let value_line = Line::from(vec![Span::styled(value_str, Style::default().fg(color))]);
        Paragraph::new(value_line).render(inner, buf);

        // Bar on the second row if space allows
        if inner.height < 2 {
            return;
        }
        let bar_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: 1,
        };

        let filled = self.bar_offset(self.value, bar_area.width);
        let tick = self
            .limit
            .map(|limit| self.bar_offset(limit, bar_area.width).min(bar_area.width - 1));

        for offset in 0..bar_area.width {
            let ch = if Some(offset) == tick {
                '│'
            } else if offset < filled {
                '█'
            } else {
                '░'
            };
            buf[(bar_area.x + offset, bar_area.y)]
                .set_char(ch)
                .set_fg(color);
        }
    }
}

pub fn temperature_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .range(0.0, 50.0)
        .thresholds(vec![
            (0.0, Theme::INFO),
            (30.0, Theme::ALERT),
            (36.0, Theme::CRITICAL),
        ])
        .limit(36.0)
}

pub fn humidity_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .thresholds(vec![
            (0.0, Theme::CRITICAL),
            (25.0, Theme::ALERT),
            (40.0, Theme::CALM),
        ])
        .limit(25.0)
}

pub fn moisture_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .thresholds(vec![
            (0.0, Theme::ALERT),
            (35.0, Theme::CALM),
            (70.0, Theme::SOIL_WET),
        ])
        .limit(30.0)
}

pub fn light_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " lux")
        .range(0.0, 1500.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::FG),
            (800.0, Theme::ALERT),
            (1100.0, Theme::CRITICAL),
        ])
        .limit(1100.0)
}

pub fn co2_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " ppm")
        .range(0.0, 2000.0)
        .precision(0)
        .thresholds(vec![(0.0, Theme::CALM), (1200.0, Theme::CRITICAL)])
        .limit(1200.0)
}
