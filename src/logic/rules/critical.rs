use super::CRITICAL_ALERT_THRESHOLD;
use crate::models::RollingState;

/// Update the consecutive alert count and report whether the interval is critical.
///
/// An alert extends the streak, anything else resets it. The interval is
/// critical once the streak is strictly longer than
/// [`CRITICAL_ALERT_THRESHOLD`], so with a threshold of 2 the third alert in
/// a row is the first critical one.
pub fn track_consecutive_alerts(state: &mut RollingState, alert: bool) -> bool {
    if alert {
        state.consecutive_alerts = state.consecutive_alerts.saturating_add(1);
    } else {
        state.consecutive_alerts = 0;
    }

    state.consecutive_alerts > CRITICAL_ALERT_THRESHOLD
}
