use super::reading::Reading;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WateringAction {
    Skip,
    LightWatering,
    FullWatering,
}

impl WateringAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WateringAction::Skip => "Skip Watering",
            WateringAction::LightWatering => "Initiate Light Watering",
            WateringAction::FullWatering => "Initiate Watering",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            WateringAction::Skip => Color::Gray,
            WateringAction::LightWatering => Color::Cyan,
            WateringAction::FullWatering => Color::Blue,
        }
    }
}

impl std::fmt::Display for WateringAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadingAction {
    OpenShades,
    NoAction,
    ClosePartially,
    CloseFully,
}

impl ShadingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingAction::OpenShades => "Open Shades",
            ShadingAction::NoAction => "No Action",
            ShadingAction::ClosePartially => "Close Partially",
            ShadingAction::CloseFully => "Close Fully",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            ShadingAction::OpenShades => Color::LightYellow,
            ShadingAction::NoAction => Color::Gray,
            ShadingAction::ClosePartially => Color::Yellow,
            ShadingAction::CloseFully => Color::LightRed,
        }
    }
}

impl std::fmt::Display for ShadingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named risk predicate that contributed to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCondition {
    HighTemp,
    LowHumidity,
    HighCo2,
    DrySoil,
    ExcessLight,
}

impl RiskCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCondition::HighTemp => "High Temp",
            RiskCondition::LowHumidity => "Low Humidity",
            RiskCondition::HighCo2 => "High CO2",
            RiskCondition::DrySoil => "Dry Soil",
            RiskCondition::ExcessLight => "Excess Light",
        }
    }
}

impl std::fmt::Display for RiskCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WateringRecommendation {
    InsufficientData,
    RecommendWatering,
    DelayWatering,
}

impl WateringRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            WateringRecommendation::InsufficientData => "Insufficient data for recommendation",
            WateringRecommendation::RecommendWatering => "Recommend watering in next interval",
            WateringRecommendation::DelayWatering => "Delay watering: moisture trending stable",
        }
    }
}

impl std::fmt::Display for WateringRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the rule engine decided for one simulated hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub hour: u32,
    pub reading: Reading,
    pub watering: WateringAction,
    pub shading: ShadingAction,
    pub alert: bool,
    pub conditions: Vec<RiskCondition>,
    pub critical: bool,
    pub recommendation: WateringRecommendation,
}

impl DecisionRecord {
    /// Conditions joined the way the report prints them, e.g. `High Temp; Dry Soil`.
    pub fn conditions_label(&self) -> String {
        self.conditions
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watering_labels() {
        assert_eq!(WateringAction::Skip.as_str(), "Skip Watering");
        assert_eq!(
            WateringAction::LightWatering.as_str(),
            "Initiate Light Watering"
        );
        assert_eq!(WateringAction::FullWatering.as_str(), "Initiate Watering");
    }

    #[test]
    fn shading_labels() {
        assert_eq!(ShadingAction::OpenShades.to_string(), "Open Shades");
        assert_eq!(ShadingAction::NoAction.to_string(), "No Action");
        assert_eq!(ShadingAction::ClosePartially.to_string(), "Close Partially");
        assert_eq!(ShadingAction::CloseFully.to_string(), "Close Fully");
    }

    #[test]
    fn conditions_label_joins_in_order() {
        let record = DecisionRecord {
            hour: 1,
            reading: Reading::new(40.0, 50.0, 500, 20.0, 400),
            watering: WateringAction::FullWatering,
            shading: ShadingAction::NoAction,
            alert: false,
            conditions: vec![RiskCondition::HighTemp, RiskCondition::DrySoil],
            critical: false,
            recommendation: WateringRecommendation::InsufficientData,
        };
        assert_eq!(record.conditions_label(), "High Temp; Dry Soil");
    }

    #[test]
    fn conditions_label_empty() {
        let record = DecisionRecord {
            hour: 2,
            reading: Reading::new(25.0, 50.0, 500, 60.0, 400),
            watering: WateringAction::Skip,
            shading: ShadingAction::NoAction,
            alert: false,
            conditions: Vec::new(),
            critical: false,
            recommendation: WateringRecommendation::InsufficientData,
        };
        assert_eq!(record.conditions_label(), "");
    }

    #[test]
    fn record_serializes_enum_variants() {
        let record = DecisionRecord {
            hour: 3,
            reading: Reading::new(25.0, 50.0, 500, 60.0, 400),
            watering: WateringAction::Skip,
            shading: ShadingAction::CloseFully,
            alert: false,
            conditions: vec![RiskCondition::ExcessLight],
            critical: false,
            recommendation: WateringRecommendation::DelayWatering,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"watering\":\"Skip\""));
        assert!(json.contains("\"shading\":\"CloseFully\""));
        assert!(json.contains("\"ExcessLight\""));
    }
}
