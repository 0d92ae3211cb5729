use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::capabilities::{
    Classifier, ClassifierError, NarrativeGenerator, NarrativeRequest, NarrativeResponse,
    Prediction,
};
use super::domain::{AnalysisResult, NarrativeSource, Submission};
use super::features::{FeatureNormalizer, NormalizationError};
use super::intake::{AssessmentPolicy, IntakeGuard, ValidationError};
use super::scoring::{categories, narrative, recommend, risk};

/// Failures the pipeline reports to its caller. Collaborator outages are not
/// errors; they degrade to the deterministic fallbacks instead.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error("feature vector rejected by the classifier: {0}")]
    Schema(#[source] ClassifierError),
}

/// Why a response fell back to a deterministic narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    GeneratorMissing,
    GeneratorFailed,
}

/// Explicit result of narrative generation, so degradation stays visible to
/// response assembly, tests and logs instead of being swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeOutcome {
    Generated(NarrativeResponse),
    Fallback {
        reason: FallbackReason,
        narrative: String,
    },
}

impl NarrativeOutcome {
    pub fn source(&self) -> NarrativeSource {
        match self {
            NarrativeOutcome::Generated(_) => NarrativeSource::Generated,
            NarrativeOutcome::Fallback { .. } => NarrativeSource::Fallback,
        }
    }
}

/// End-to-end scoring pipeline with injected collaborator capabilities.
///
/// The rule-based scoring always runs. When a classifier capability is wired
/// in, the risk level, diagnosis and professional-help flag come from the
/// classifier policy instead of the percentage thresholds; the narrative
/// generator is consulted last and always has a deterministic substitute.
pub struct AnalysisPipeline {
    guard: IntakeGuard,
    normalizer: FeatureNormalizer,
    classifier: Option<Arc<dyn Classifier>>,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
}

impl AnalysisPipeline {
    pub fn new(policy: AssessmentPolicy) -> Self {
        Self {
            guard: IntakeGuard::with_policy(policy),
            normalizer: FeatureNormalizer,
            classifier: None,
            narrator: None,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_narrative_generator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn policy(&self) -> &AssessmentPolicy {
        self.guard.policy()
    }

    pub fn classifier_available(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn narrative_available(&self) -> bool {
        self.narrator.is_some()
    }

    pub fn analyze(
        &self,
        submission: &Submission,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AssessmentError> {
        self.guard.admit(submission)?;

        let scale_max = self.guard.policy().scale_max;
        let category_analysis = categories::aggregate(&submission.answers, scale_max);
        let score_percentage = submission.score_percentage;

        let mut risk_level = risk::risk_for_percentage(score_percentage);
        let mut professional_help = risk::help_needed_for_percentage(score_percentage);
        let mut classified: Option<Prediction> = None;

        if let Some(classifier) = &self.classifier {
            let features = self.normalizer.normalize(&raw_features(submission))?;
            match classifier.predict(&features) {
                Ok(prediction) => {
                    let suicidal = features.get("suicidal_thoughts") == Some(1.0);
                    risk_level = risk::risk_for_diagnosis(&prediction.label, suicidal);
                    professional_help = risk::help_needed_for_risk(risk_level);
                    classified = Some(prediction);
                }
                Err(err @ ClassifierError::SchemaMismatch { .. }) => {
                    return Err(AssessmentError::Schema(err));
                }
                Err(err) => {
                    warn!(error = %err, "classifier failed; using rule-based risk policy");
                }
            }
        }

        let request = match &classified {
            Some(prediction) => NarrativeRequest::Classified {
                diagnosis: prediction.label.clone(),
                confidence: prediction.confidence,
                risk_level,
                ranked_factors: ranked_factors(&prediction.importances),
            },
            None => NarrativeRequest::RuleBased {
                score_percentage,
                interpretations: category_analysis
                    .iter()
                    .map(|(category, analysis)| (category.clone(), analysis.interpretation))
                    .collect(),
                answers: submission.answers.clone(),
            },
        };

        let outcome = self.narrate(
            &request,
            score_percentage,
            classified.as_ref().map(|prediction| prediction.label.as_str()),
        );

        // Rule-based advice is the stable base list; generator extras are
        // appended behind it so the base set survives any narrative outcome.
        let mut recommendations = recommend::recommendations(score_percentage, &category_analysis);
        if let NarrativeOutcome::Generated(response) = &outcome {
            for extra in &response.recommendations {
                recommend::push_unique(&mut recommendations, extra);
            }
        }

        let narrative_source = outcome.source();
        let narrative_text = match outcome {
            NarrativeOutcome::Generated(response) => response.narrative,
            NarrativeOutcome::Fallback { narrative, .. } => narrative,
        };

        Ok(AnalysisResult {
            analysis_id: format!("analysis_{}", now.format("%Y%m%d_%H%M%S")),
            timestamp: now,
            total_score: submission.total_score,
            max_score: submission.max_score,
            score_percentage,
            narrative: narrative_text,
            narrative_source,
            category_analysis,
            recommendations,
            risk_level,
            professional_help_needed: professional_help,
            diagnosis: classified.as_ref().map(|prediction| prediction.label.clone()),
            confidence: classified.as_ref().map(|prediction| prediction.confidence),
        })
    }

    fn narrate(
        &self,
        request: &NarrativeRequest,
        score_percentage: f64,
        diagnosis: Option<&str>,
    ) -> NarrativeOutcome {
        let fallback = |reason: FallbackReason| NarrativeOutcome::Fallback {
            reason,
            narrative: match diagnosis {
                Some(label) => narrative::diagnosis_fallback(label),
                None => narrative::fallback_narrative(score_percentage).to_string(),
            },
        };

        let Some(narrator) = &self.narrator else {
            return fallback(FallbackReason::GeneratorMissing);
        };

        match narrator.generate(request) {
            Ok(response) if !response.narrative.trim().is_empty() => {
                NarrativeOutcome::Generated(response)
            }
            Ok(_) => {
                warn!("narrative generator returned an empty narrative; using fallback");
                fallback(FallbackReason::GeneratorFailed)
            }
            Err(err) => {
                warn!(error = %err, "narrative generation failed; using fallback");
                fallback(FallbackReason::GeneratorFailed)
            }
        }
    }
}

fn raw_features(submission: &Submission) -> Vec<(String, String)> {
    submission
        .answers
        .iter()
        .map(|answer| {
            (
                answer.category.label().to_string(),
                answer.answer_label.clone(),
            )
        })
        .collect()
}

fn ranked_factors(importances: &BTreeMap<String, f64>) -> Vec<(String, f64)> {
    let mut factors: Vec<(String, f64)> = importances
        .iter()
        .map(|(name, value)| (name.clone(), *value))
        .collect();
    factors.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    factors
}
