// Content Generation Engine
// Implements: prompt building, model invocation and fan-out, output parsing, confidence scoring.
// All model calls go through llm_client; no direct Gemini calls here.

pub mod confidence;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod output_parser;
pub mod prompts;
pub mod tone;
