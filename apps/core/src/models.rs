use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Sentiment polarity assigned to the whole text.
///
/// Serialized as the exact label strings the model is constrained to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Overall sentiment of the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Sentiment intensity from 0 to 1.
    #[validate(range(min = 0.0, max = 1.0))]
    pub score: f64,
    pub explanation: String,
}

/// A named thing detected in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Entity {
    pub name: String,
    /// Category like Person, Org, Location, Product, Date.
    #[serde(rename = "type")]
    pub kind: String,
    /// Relevance weight from 0 to 1.
    #[validate(range(min = 0.0, max = 1.0))]
    pub relevance: f64,
}

/// Readability estimate with improvement suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Readability {
    pub score: f64,
    /// Categorical level label (e.g. "Easy", "Difficult").
    pub level: String,
    pub suggestions: Vec<String>,
}

/// Tone of voice and register of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub primary: String,
    pub secondary: String,
    /// How formal the register is, from 0 to 100.
    #[validate(range(min = 0.0, max = 100.0))]
    pub formality_score: f64,
}

/// The full structured report returned by the model for one submission.
///
/// Every field is required on the wire; a payload missing any of them does
/// not deserialize and the whole result is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalysisResult {
    pub summary: String,
    #[validate(nested)]
    pub sentiment: Sentiment,
    #[validate(nested)]
    pub entities: Vec<Entity>,
    pub keyphrases: Vec<String>,
    #[validate(nested)]
    pub readability: Readability,
    #[validate(nested)]
    pub tone: Tone,
    pub intent: String,
    pub language: String,
}

/// One past submission kept in the session history.
///
/// Created exactly once per successful analysis and never mutated after
/// that; the bulk clear operation is the only way an item leaves the list.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// The source text as it was submitted.
    pub text: String,
    pub result: AnalysisResult,
}

impl HistoryItem {
    /// Wraps a finished analysis with a fresh id and creation instant.
    pub fn new(text: String, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            text,
            result,
        }
    }
}
