use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Grouping label attached to every questionnaire item.
///
/// The rule-based questionnaire uses the ten fixed wellbeing categories. The
/// classifier intake path reuses the same field to carry open model feature
/// names, which land in the `Feature` variant untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Mood,
    Sleep,
    Anxiety,
    Social,
    Concentration,
    Energy,
    Stress,
    Relationships,
    SelfEsteem,
    Future,
    Feature(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::Mood => "Mood",
            Category::Sleep => "Sleep",
            Category::Anxiety => "Anxiety",
            Category::Social => "Social",
            Category::Concentration => "Concentration",
            Category::Energy => "Energy",
            Category::Stress => "Stress",
            Category::Relationships => "Relationships",
            Category::SelfEsteem => "Self-esteem",
            Category::Future => "Future",
            Category::Feature(name) => name,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Mood" => Category::Mood,
            "Sleep" => Category::Sleep,
            "Anxiety" => Category::Anxiety,
            "Social" => Category::Social,
            "Concentration" => Category::Concentration,
            "Energy" => Category::Energy,
            "Stress" => Category::Stress,
            "Relationships" => Category::Relationships,
            "Self-esteem" => Category::SelfEsteem,
            "Future" => Category::Future,
            other => Category::Feature(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::from_label(&raw))
    }
}

/// One questionnaire response, category tagged and value weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub category: Category,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "answer")]
    pub answer_label: String,
    pub value: u8,
}

/// A completed test session exactly as submitted by the client.
///
/// Immutable once received; the intake guard rejects it outright instead of
/// repairing inconsistent declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub answers: Vec<Answer>,
    pub total_score: u32,
    pub max_score: u32,
    pub score_percentage: f64,
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    pub completed_at: DateTime<Utc>,
}

/// Ordered risk bands derived from the score percentage or classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Low-Medium Risk")]
    LowMedium,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "Medium-High Risk")]
    MediumHigh,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Very High Risk")]
    VeryHigh,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::LowMedium => "Low-Medium Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::MediumHigh => "Medium-High Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::VeryHigh => "Very High Risk",
        }
    }
}

/// Qualitative five-band reading of a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpretation {
    Excellent,
    Good,
    Moderate,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl Interpretation {
    pub const fn label(self) -> &'static str {
        match self {
            Interpretation::Excellent => "Excellent",
            Interpretation::Good => "Good",
            Interpretation::Moderate => "Moderate",
            Interpretation::Low => "Low",
            Interpretation::VeryLow => "Very Low",
        }
    }
}

/// Per-category aggregate computed fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAnalysis {
    pub total_score: u32,
    pub question_count: u32,
    pub average_score: f64,
    pub percentage: f64,
    pub interpretation: Interpretation,
    pub answers: Vec<Answer>,
}

/// Where the narrative text in a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Generated,
    Fallback,
}

/// The response payload assembled by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub analysis_id: String,
    pub timestamp: DateTime<Utc>,
    pub total_score: u32,
    pub max_score: u32,
    pub score_percentage: f64,
    pub narrative: String,
    pub narrative_source: NarrativeSource,
    pub category_analysis: BTreeMap<Category, CategoryAnalysis>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    pub professional_help_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
