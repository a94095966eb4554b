#![allow(dead_code)]

//! Request and suggestion types for the content generation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of marketing content requested. Selects the system-instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Campaign,
    Post,
    Email,
    Social,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Campaign,
        ContentType::Post,
        ContentType::Email,
        ContentType::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Campaign => "campaign",
            ContentType::Post => "post",
            ContentType::Email => "email",
            ContentType::Social => "social",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Enthusiastic,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Friendly,
    ];
}

/// Desired output length. Drives both the instruction and the length-fit bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementType {
    Engagement,
    Clarity,
    Seo,
    Tone,
}

/// A single generation request. Never persisted; lives for one orchestration call.
///
/// Prompt length (10–1000 chars) is checked by the HTTP layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub length: Option<Length>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            prompt: prompt.into(),
            content_type,
            tone: None,
            length: None,
            target_audience: None,
            keywords: Vec::new(),
        }
    }
}

/// A scored piece of generated content.
///
/// `content` is non-empty after trimming. `confidence` is in [0, 1] except for
/// decayed variations, which may fall below the base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestion {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    pub confidence: f64,
    /// Reserved. No code path populates it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}
