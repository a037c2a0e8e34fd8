use crate::models::{DecisionRecord, Report};

pub struct ReportViewState {
    pub selected_index: usize,
}

impl ReportViewState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn first(&mut self) {
        self.selected_index = 0;
    }

    pub fn last(&mut self, max: usize) {
        self.selected_index = max.saturating_sub(1);
    }
}

/// State for the interactive report viewer.
pub struct App {
    pub report: Report,
    pub view_state: ReportViewState,
    pub alerts_only: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            view_state: ReportViewState::new(),
            alerts_only: false,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records currently listed, honouring the alert filter.
    pub fn visible_records(&self) -> Vec<&DecisionRecord> {
        self.report
            .records
            .iter()
            .filter(|r| !self.alerts_only || r.alert)
            .collect()
    }

    pub fn toggle_alert_filter(&mut self) {
        self.alerts_only = !self.alerts_only;
        self.view_state.first();
    }

    pub fn select_next(&mut self) {
        let count = self.visible_records().len();
        self.view_state.next(count);
    }

    pub fn select_prev(&mut self) {
        self.view_state.prev();
    }

    pub fn select_first(&mut self) {
        self.view_state.first();
    }

    pub fn select_last(&mut self) {
        let count = self.visible_records().len();
        self.view_state.last(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::ScriptedSource;
    use crate::logic::simulation::{worst_case_reading, Simulation};
    use crate::models::Reading;

    fn selected_hour(app: &App) -> Option<u32> {
        app.visible_records()
            .get(app.view_state.selected_index)
            .map(|r| r.hour)
    }

    fn mixed_report() -> Report {
        let calm = Reading::new(25.0, 60.0, 500, 55.0, 400);
        let script = vec![calm, worst_case_reading(), calm, worst_case_reading()];
        let mut source = ScriptedSource::new(script).unwrap();
        Simulation::new(4).run(&mut source, None)
    }

    #[test]
    fn selection_clamps_to_records() {
        let mut app = App::new(mixed_report());

        app.select_prev();
        assert_eq!(app.view_state.selected_index, 0);

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.view_state.selected_index, 3);
        assert_eq!(selected_hour(&app), Some(4));

        app.select_first();
        assert_eq!(selected_hour(&app), Some(1));

        app.select_last();
        assert_eq!(selected_hour(&app), Some(4));
    }

    #[test]
    fn alert_filter_hides_quiet_hours() {
        let mut app = App::new(mixed_report());
        app.select_last();

        app.toggle_alert_filter();
        assert_eq!(app.view_state.selected_index, 0);
        let hours: Vec<u32> = app.visible_records().iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![2, 4]);

        app.toggle_alert_filter();
        assert_eq!(app.visible_records().len(), 4);
    }

    #[test]
    fn empty_report_has_no_selection() {
        let mut app = App::new(Report::new("Scripted Readings", None));
        app.select_next();
        app.select_last();
        assert_eq!(app.view_state.selected_index, 0);
        assert!(selected_hour(&app).is_none());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(mixed_report());
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
