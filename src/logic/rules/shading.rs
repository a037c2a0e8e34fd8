use crate::models::ShadingAction;

/// Shade position for the current light intensity.
///
/// - <300 lux: open shades
/// - 300-799 lux: no action
/// - 800-999 lux: close partially
/// - 1000+ lux: close fully
pub fn control_shading(light: u32) -> ShadingAction {
    match light {
        0..=299 => ShadingAction::OpenShades,
        300..=799 => ShadingAction::NoAction,
        800..=999 => ShadingAction::ClosePartially,
        _ => ShadingAction::CloseFully,
    }
}
