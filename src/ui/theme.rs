use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;

    // Risk levels, shared by the table and the gauges
    pub const CALM: Color = Color::Green;
    pub const ALERT: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;

    pub const INFO: Color = Color::Cyan;
    pub const SOIL_WET: Color = Color::LightBlue;

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Labels, borders and placeholders.
    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Self::DIM)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Critical beats alert beats calm.
    pub fn alert_style(alert: bool, critical: bool) -> Style {
        if critical {
            Style::default()
                .fg(Self::CRITICAL)
                .add_modifier(Modifier::BOLD)
        } else if alert {
            Style::default().fg(Self::ALERT)
        } else {
            Style::default().fg(Self::CALM)
        }
    }

    pub fn key_hint() -> Style {
        Self::title()
    }
}
