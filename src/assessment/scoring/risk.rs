use crate::assessment::domain::RiskLevel;

/// Score percentage below which the rule-based policy flags professional help.
const PROFESSIONAL_HELP_THRESHOLD: f64 = 40.0;

/// Percentage-threshold risk policy used when no classifier is available.
///
/// Total over [0, 100]; boundary values resolve to the upper band.
pub fn risk_for_percentage(score_percentage: f64) -> RiskLevel {
    if score_percentage >= 80.0 {
        RiskLevel::Low
    } else if score_percentage >= 60.0 {
        RiskLevel::LowMedium
    } else if score_percentage >= 40.0 {
        RiskLevel::Medium
    } else if score_percentage >= 20.0 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

pub fn help_needed_for_percentage(score_percentage: f64) -> bool {
    score_percentage < PROFESSIONAL_HELP_THRESHOLD
}

/// Label-lookup risk policy for the classifier path.
///
/// A disclosed suicidal-ideation feature forces the maximum band no matter
/// what the classifier decided.
pub fn risk_for_diagnosis(diagnosis: &str, suicidal_ideation: bool) -> RiskLevel {
    if suicidal_ideation {
        return RiskLevel::VeryHigh;
    }

    match diagnosis {
        "Normal" => RiskLevel::Low,
        "Depression" => RiskLevel::Medium,
        "Bipolar Type-1" => RiskLevel::High,
        "Bipolar Type-2" => RiskLevel::MediumHigh,
        _ => RiskLevel::Medium,
    }
}

pub fn help_needed_for_risk(risk: RiskLevel) -> bool {
    risk >= RiskLevel::High
}
