use super::MIN_ALERT_CONDITIONS;
use crate::models::{Reading, RiskCondition};

/// Outcome of checking one reading against the risk predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertAssessment {
    pub alert: bool,
    /// Triggered conditions in evaluation order
    pub conditions: Vec<RiskCondition>,
}

/// Risk alert aggregation.
///
/// Risk factors, evaluated in this order:
/// - Temperature >36°C (High Temp)
/// - Humidity <25% (Low Humidity)
/// - CO2 >1200 ppm (High CO2)
/// - Soil moisture <30% (Dry Soil)
/// - Light >1100 lux (Excess Light)
///
/// A single reading raises an alert once three or more factors co-occur.
pub fn evaluate_alerts(reading: &Reading) -> AlertAssessment {
    let checks = [
        (reading.temperature > 36.0, RiskCondition::HighTemp),
        (reading.humidity < 25.0, RiskCondition::LowHumidity),
        (reading.co2 > 1200, RiskCondition::HighCo2),
        (reading.soil_moisture < 30.0, RiskCondition::DrySoil),
        (reading.light > 1100, RiskCondition::ExcessLight),
    ];

    let conditions: Vec<RiskCondition> = checks
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, condition)| condition)
        .collect();

    AlertAssessment {
        alert: conditions.len() >= MIN_ALERT_CONDITIONS,
        conditions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_conditions() {
        let reading = Reading::new(40.0, 10.0, 1200, 20.0, 1300);
        let assessment = evaluate_alerts(&reading);

        assert!(assessment.alert);
        assert_eq!(
            assessment.conditions,
            vec![
                RiskCondition::HighTemp,
                RiskCondition::LowHumidity,
                RiskCondition::HighCo2,
                RiskCondition::DrySoil,
                RiskCondition::ExcessLight,
            ]
        );
    }

    #[test]
    fn benign_reading() {
        let reading = Reading::new(25.0, 60.0, 500, 55.0, 400);
        let assessment = evaluate_alerts(&reading);

        assert!(!assessment.alert);
        assert!(assessment.conditions.is_empty());
    }

    #[test]
    fn two_conditions_do_not_alert() {
        let reading = Reading::new(38.0, 60.0, 500, 25.0, 400);
        let assessment = evaluate_alerts(&reading);

        assert!(!assessment.alert);
        assert_eq!(
            assessment.conditions,
            vec![RiskCondition::HighTemp, RiskCondition::DrySoil]
        );
    }

    #[test]
    fn three_conditions_alert() {
        let reading = Reading::new(25.0, 20.0, 1150, 60.0, 1250);
        let assessment = evaluate_alerts(&reading);

        assert!(assessment.alert);
        assert_eq!(
            assessment.conditions,
            vec![
                RiskCondition::LowHumidity,
                RiskCondition::HighCo2,
                RiskCondition::ExcessLight,
            ]
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        // Every value sits exactly on its threshold, so nothing triggers
        let reading = Reading::new(36.0, 25.0, 1100, 30.0, 1200);
        let assessment = evaluate_alerts(&reading);

        assert!(!assessment.alert);
        assert!(assessment.conditions.is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let reading = Reading::new(38.0, 20.0, 1150, 28.0, 900);
        let first = evaluate_alerts(&reading);
        assert!(first.alert);

        for _ in 0..5 {
            assert_eq!(evaluate_alerts(&reading), first);
        }
    }
}
