//! Self-assessment scoring: validated intake, pure rule-based scoring,
//! optional classifier-backed diagnosis and narrative assembly with
//! deterministic fallbacks.

pub mod capabilities;
pub mod domain;
pub mod features;
pub mod intake;
pub mod pipeline;
pub mod scoring;

pub use capabilities::{
    Classifier, ClassifierError, NarrativeError, NarrativeGenerator, NarrativeRequest,
    NarrativeResponse, Prediction,
};
pub use domain::{
    AnalysisResult, Answer, Category, CategoryAnalysis, Interpretation, NarrativeSource,
    RiskLevel, Submission,
};
pub use features::{FeatureNormalizer, FeatureVector, NormalizationError};
pub use intake::{AssessmentPolicy, IntakeGuard, ValidationError};
pub use pipeline::{AnalysisPipeline, AssessmentError, FallbackReason, NarrativeOutcome};
