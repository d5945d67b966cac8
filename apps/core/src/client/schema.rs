//! Structured-output schema sent with every analysis request.
//!
//! The model is asked to emit JSON conforming to this shape; the field set
//! mirrors [`crate::models::AnalysisResult`] exactly, with every top-level
//! property required.

use serde_json::{json, Value};

/// Builds the fixed response schema for the `generateContent` call.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING", "description": "A concise summary of the text." },
            "sentiment": {
                "type": "OBJECT",
                "properties": {
                    "label": { "type": "STRING", "enum": ["Positive", "Negative", "Neutral"] },
                    "score": { "type": "NUMBER", "description": "Sentiment intensity from 0 to 1." },
                    "explanation": { "type": "STRING" }
                },
                "required": ["label", "score", "explanation"]
            },
            "entities": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "type": { "type": "STRING", "description": "Category like Person, Org, Location, Product, Date." },
                        "relevance": { "type": "NUMBER" }
                    },
                    "required": ["name", "type", "relevance"]
                }
            },
            "keyphrases": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "readability": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "level": { "type": "STRING" },
                    "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["score", "level", "suggestions"]
            },
            "tone": {
                "type": "OBJECT",
                "properties": {
                    "primary": { "type": "STRING" },
                    "secondary": { "type": "STRING" },
                    "formalityScore": { "type": "NUMBER" }
                },
                "required": ["primary", "secondary", "formalityScore"]
            },
            "intent": { "type": "STRING" },
            "language": { "type": "STRING" }
        },
        "required": ["summary", "sentiment", "entities", "keyphrases", "readability", "tone", "intent", "language"]
    })
}
