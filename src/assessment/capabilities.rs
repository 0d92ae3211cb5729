use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Answer, Category, Interpretation, RiskLevel};
use super::features::FeatureVector;

/// Prediction returned by an external classifier capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
    pub importances: BTreeMap<String, f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The feature vector does not line up with the training schema. This is
    /// a contract breach between service and model, never coerced away.
    #[error("feature vector does not match the model schema: {detail}")]
    SchemaMismatch { detail: String },
    #[error("classifier inference failed: {detail}")]
    Inference { detail: String },
}

/// External capability mapping normalized features to a diagnostic label,
/// confidence and per-feature importances. The process bootstrap owns the
/// lifecycle; the pipeline only borrows it.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError>;
}

/// Inputs handed to an external narrative generator, one variant per scoring
/// strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NarrativeRequest {
    RuleBased {
        score_percentage: f64,
        interpretations: BTreeMap<Category, Interpretation>,
        answers: Vec<Answer>,
    },
    Classified {
        diagnosis: String,
        confidence: f64,
        risk_level: RiskLevel,
        /// Feature importances, strongest first.
        ranked_factors: Vec<(String, f64)>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResponse {
    pub narrative: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative generator unavailable: {detail}")]
    Unavailable { detail: String },
    /// Remote generators answer in free text; anything that fails to parse
    /// into a `NarrativeResponse` lands here and triggers the fallback.
    #[error("narrative generator returned malformed output: {detail}")]
    MalformedOutput { detail: String },
}

/// External capability producing a free-text explanation plus optional
/// follow-up recommendations.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, request: &NarrativeRequest) -> Result<NarrativeResponse, NarrativeError>;
}
