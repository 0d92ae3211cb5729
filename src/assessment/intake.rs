use serde::{Deserialize, Serialize};

use super::domain::Submission;

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("submission must contain at least {required} answers, found {found}")]
    TooFewAnswers { required: usize, found: usize },
    #[error("answer {question_id} has value {value} outside the {min}-{max} scale")]
    ValueOutOfScale {
        question_id: u32,
        value: u8,
        min: u8,
        max: u8,
    },
    #[error("max_score must be greater than zero")]
    ZeroMaxScore,
    #[error("score percentage {declared:.1} is outside 0-100")]
    PercentageOutOfBounds { declared: f64 },
    #[error(
        "declared score percentage {declared:.1} does not match {total_score}/{max_score} ({computed:.1})"
    )]
    ScorePercentageMismatch {
        declared: f64,
        computed: f64,
        total_score: u32,
        max_score: u32,
    },
}

/// Scale and consistency dials backing submission validation.
///
/// The questionnaire length and the Likert scale are deliberate configuration
/// rather than literals baked into the scoring code, so a larger question set
/// only needs a policy change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentPolicy {
    pub min_answers: usize,
    pub scale_min: u8,
    pub scale_max: u8,
    pub percentage_tolerance: f64,
}

impl Default for AssessmentPolicy {
    fn default() -> Self {
        Self {
            min_answers: 10,
            scale_min: 1,
            scale_max: 5,
            percentage_tolerance: 0.1,
        }
    }
}

/// Guard responsible for admitting submissions into the scoring pipeline.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: AssessmentPolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: AssessmentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AssessmentPolicy {
        &self.policy
    }

    /// Reject a submission that breaks any declared invariant. No partial
    /// result is ever produced from a rejected submission.
    pub fn admit(&self, submission: &Submission) -> Result<(), ValidationError> {
        if submission.answers.len() < self.policy.min_answers {
            return Err(ValidationError::TooFewAnswers {
                required: self.policy.min_answers,
                found: submission.answers.len(),
            });
        }

        for answer in &submission.answers {
            if answer.value < self.policy.scale_min || answer.value > self.policy.scale_max {
                return Err(ValidationError::ValueOutOfScale {
                    question_id: answer.question_id,
                    value: answer.value,
                    min: self.policy.scale_min,
                    max: self.policy.scale_max,
                });
            }
        }

        if submission.max_score == 0 {
            return Err(ValidationError::ZeroMaxScore);
        }

        if !(0.0..=100.0).contains(&submission.score_percentage) {
            return Err(ValidationError::PercentageOutOfBounds {
                declared: submission.score_percentage,
            });
        }

        let computed =
            submission.total_score as f64 / submission.max_score as f64 * 100.0;
        if (submission.score_percentage - computed).abs() > self.policy.percentage_tolerance {
            return Err(ValidationError::ScorePercentageMismatch {
                declared: submission.score_percentage,
                computed,
                total_score: submission.total_score,
                max_score: submission.max_score,
            });
        }

        Ok(())
    }
}
