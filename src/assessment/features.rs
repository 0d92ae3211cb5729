use serde::Serialize;

/// Errors raised while coercing raw questionnaire labels into model features.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    #[error("feature '{feature}' has unparsable range value '{raw}'")]
    UnparsableRange { feature: String, raw: String },
    #[error("feature '{feature}' has non-numeric value '{raw}'")]
    NonNumeric { feature: String, raw: String },
}

/// Features answered on the Seldom..Most-Often ordinal scale.
const ORDINAL_FEATURES: [&str; 4] = ["sadness", "euphoric", "exhausted", "sleep_disorder"];

/// Features answered YES/NO.
const BINARY_FEATURES: [&str; 10] = [
    "mood_swing",
    "suicidal_thoughts",
    "anorexia",
    "authority_respect",
    "try_explanation",
    "aggressive_response",
    "ignore_move_on",
    "nervous_breakdown",
    "admit_mistakes",
    "overthinking",
];

/// Features answered as range text ("3 From 10").
const RANGE_FEATURES: [&str; 3] = ["sexual_activity", "concentration", "optimism"];

const RANGE_DELIMITER: &str = "From";
const ORDINAL_DEFAULT: f64 = 1.0;
const RANGE_DEFAULT: f64 = 5.0;

/// Normalized features in a stable column order.
///
/// Columns keep the submission order of the raw inputs, with derived
/// interaction features appended last. The classifier owns the training
/// schema; it is expected to reject a vector whose columns do not line up
/// rather than coerce it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    columns: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[(String, f64)] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn push(&mut self, name: String, value: f64) {
        match self.columns.iter_mut().find(|(column, _)| *column == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name, value)),
        }
    }
}

/// Stateless mapper from raw questionnaire labels to numeric model features.
#[derive(Debug, Clone, Default)]
pub struct FeatureNormalizer;

impl FeatureNormalizer {
    /// Coerce raw (feature name, label) pairs into a numeric vector.
    ///
    /// Defaults are deliberate leniency for the label sets the questionnaire
    /// owns; anything else that fails to parse is a normalization error
    /// reported to the caller.
    pub fn normalize(
        &self,
        raw: &[(String, String)],
    ) -> Result<FeatureVector, NormalizationError> {
        let mut features = FeatureVector { columns: Vec::with_capacity(raw.len() + 3) };

        for (name, value) in raw {
            let column = canonical_name(name);
            let numeric = if ORDINAL_FEATURES.contains(&column.as_str()) {
                ordinal_value(value)
            } else if BINARY_FEATURES.contains(&column.as_str()) {
                binary_value(value)
            } else if RANGE_FEATURES.contains(&column.as_str()) {
                range_value(&column, value)?
            } else {
                passthrough_value(&column, value)?
            };
            features.push(column, numeric);
        }

        let mood_swing = features.get("mood_swing").unwrap_or(0.0);
        let suicidal = features.get("suicidal_thoughts").unwrap_or(0.0);
        let exhausted = features.get("exhausted").unwrap_or(0.0);
        let sleep_disorder = features.get("sleep_disorder").unwrap_or(0.0);
        let sadness = features.get("sadness").unwrap_or(0.0);

        features.push("mood_suicidal_interaction".to_string(), mood_swing * suicidal);
        features.push("exhaustion_sleep".to_string(), exhausted * sleep_disorder);
        features.push(
            "total_symptom_score".to_string(),
            sadness + exhausted + sleep_disorder,
        );

        Ok(features)
    }
}

/// Lowercase snake_case so frontend spellings like "Mood_Swing" and
/// "Sleep-Disorder" hit the same column.
fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

fn ordinal_value(raw: &str) -> f64 {
    match raw.trim() {
        "Seldom" => 0.0,
        "Sometimes" => 1.0,
        "Usually" => 2.0,
        "Most-Often" => 3.0,
        _ => ORDINAL_DEFAULT,
    }
}

fn binary_value(raw: &str) -> f64 {
    if raw.trim() == "YES" {
        1.0
    } else {
        0.0
    }
}

fn range_value(feature: &str, raw: &str) -> Result<f64, NormalizationError> {
    if !raw.contains(RANGE_DELIMITER) {
        return Ok(RANGE_DEFAULT);
    }

    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .map(|value| value as f64)
        .ok_or_else(|| NormalizationError::UnparsableRange {
            feature: feature.to_string(),
            raw: raw.to_string(),
        })
}

fn passthrough_value(feature: &str, raw: &str) -> Result<f64, NormalizationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NormalizationError::NonNumeric {
            feature: feature.to_string(),
            raw: raw.to_string(),
        })
}
