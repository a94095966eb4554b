//! Content Generation: orchestrates prompt → model call → parse → score.
//!
//! Flow per request: build_prompt → TextCompletion::complete → parse_output →
//!       compute_confidence → ContentSuggestion.
//!
//! Stateless across requests. Failures are never retried here; callers own
//! retry and backoff policy. Only the hashtag path swallows provider errors.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::confidence::{compute_confidence, variation_decay};
use crate::generation::models::{ContentSuggestion, GenerationRequest, ImprovementType};
use crate::generation::output_parser::{parse_hashtags, parse_output};
use crate::generation::prompts::{
    build_hashtag_prompt, build_prompt, improvement_request, variation_request,
};
use crate::llm_client::TextCompletion;

/// Upper bound on variations per batch.
pub const MAX_VARIATIONS: usize = 5;

/// Drives the generative model for all content operations.
#[derive(Clone)]
pub struct ContentGenerator {
    llm: Arc<dyn TextCompletion>,
}

impl ContentGenerator {
    pub fn new(llm: Arc<dyn TextCompletion>) -> Self {
        Self { llm }
    }

    /// Single-shot generation: one provider call, one scored suggestion.
    pub async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<ContentSuggestion, AppError> {
        let suggestion = self.generate_one(request).await?;
        info!(
            "Generated {} content (title: {}, confidence: {:.2})",
            request.content_type,
            suggestion.title.is_some(),
            suggestion.confidence
        );
        Ok(suggestion)
    }

    /// Issues `count` suffixed copies of `request` concurrently and waits for
    /// all of them. Any failure fails the batch; no partial results.
    ///
    /// The i-th issued call has its confidence multiplied by `1 - 0.1 * i`,
    /// regardless of the order in which calls complete.
    ///
    /// `count` above `MAX_VARIATIONS` is clamped to it (logged at `warn`).
    pub async fn generate_variations(
        &self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<ContentSuggestion>, AppError> {
        if count > MAX_VARIATIONS {
            warn!("Requested {count} variations, clamping to {MAX_VARIATIONS}");
        }
        let count = count.min(MAX_VARIATIONS);
        if count == 0 {
            return Ok(Vec::new());
        }

        let variation = variation_request(request);
        let calls = (0..count).map(|index| {
            let variation = &variation;
            async move { (index, self.generate_one(variation).await) }
        });

        // join_all polls in issuance order and yields results in that order;
        // the carried index is what binds each result to its decay factor.
        let outcomes = join_all(calls).await;

        let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
        if failed > 0 {
            warn!("{failed}/{count} variation calls failed, discarding batch");
        }

        let mut suggestions = Vec::with_capacity(count);
        for (index, outcome) in outcomes {
            let mut suggestion = outcome?;
            suggestion.confidence *= variation_decay(index);
            suggestions.push(suggestion);
        }

        info!(
            "Generated {} {} variations",
            suggestions.len(),
            request.content_type
        );
        Ok(suggestions)
    }

    /// Rewrites `content` per `improvement_type` as a single-shot `post` generation.
    pub async fn improve_content(
        &self,
        content: &str,
        improvement_type: ImprovementType,
        target_audience: Option<String>,
    ) -> Result<ContentSuggestion, AppError> {
        let request = improvement_request(content, improvement_type, target_audience);
        let suggestion = self.generate_one(&request).await?;
        info!(
            "Improved content ({:?}, confidence: {:.2})",
            improvement_type, suggestion.confidence
        );
        Ok(suggestion)
    }

    /// Best-effort hashtag suggestions. Provider failure yields an empty list.
    pub async fn generate_hashtags(&self, content: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let prompt = build_hashtag_prompt(content, count);
        match self.llm.complete(&prompt).await {
            Ok(raw) => {
                let hashtags = parse_hashtags(&raw, count);
                debug!("Parsed {} hashtags (requested {count})", hashtags.len());
                hashtags
            }
            Err(e) => {
                warn!("Hashtag generation failed, returning none: {e}");
                Vec::new()
            }
        }
    }

    async fn generate_one(&self, request: &GenerationRequest) -> Result<ContentSuggestion, AppError> {
        let prompt = build_prompt(request);
        debug!("Sending {}-char prompt to model", prompt.len());

        let raw = self
            .llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Generation {
                context: format!("{} generation call failed: {e}", request.content_type),
                source: Some(e),
            })?;

        suggestion_from_raw(&raw, request)
    }
}

/// Parses and scores raw model text. Blank output is a generation failure.
fn suggestion_from_raw(
    raw: &str,
    request: &GenerationRequest,
) -> Result<ContentSuggestion, AppError> {
    let parsed = parse_output(raw);

    if parsed.content.trim().is_empty() {
        return Err(AppError::Generation {
            context: "Model returned no usable content".to_string(),
            source: None,
        });
    }

    let confidence = compute_confidence(&parsed.content, request);

    Ok(ContentSuggestion {
        content: parsed.content,
        title: parsed.title,
        hashtags: None,
        confidence,
        alternatives: None,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::generation::models::{ContentType, Length};
    use crate::generation::prompts::VARIATION_SUFFIX;
    use crate::llm_client::fake::FakeCompletion;
    use crate::llm_client::LlmError;

    fn setup(fake: FakeCompletion) -> (ContentGenerator, Arc<FakeCompletion>) {
        let fake = Arc::new(fake);
        (ContentGenerator::new(fake.clone()), fake)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("Announce our weekend flash sale", ContentType::Post)
    }

    #[tokio::test]
    async fn test_generate_content_parses_title_and_scores() {
        let (generator, fake) = setup(FakeCompletion::replying(
            "Flash Sale This Weekend\nEverything is 30% off until Sunday.",
        ));
        let mut req = request();
        req.length = Some(Length::Short);

        let suggestion = generator.generate_content(&req).await.unwrap();

        assert_eq!(suggestion.title.as_deref(), Some("Flash Sale This Weekend"));
        assert_eq!(suggestion.content, "Everything is 30% off until Sunday.");
        assert!((suggestion.confidence - 0.9).abs() < 1e-9);
        assert!(suggestion.hashtags.is_none());
        assert!(suggestion.alternatives.is_none());
        assert_eq!(fake.prompts(), vec![build_prompt(&req)]);
    }

    #[tokio::test]
    async fn test_generate_content_propagates_provider_failure() {
        let (generator, fake) = setup(FakeCompletion::failing());

        let err = generator.generate_content(&request()).await.unwrap_err();

        assert!(err.to_string().contains("model overloaded"));
        assert!(matches!(
            err,
            AppError::Generation {
                source: Some(LlmError::Api { status: 503, .. }),
                ..
            }
        ));
        assert_eq!(fake.call_count(), 1, "no internal retry");
    }

    #[tokio::test]
    async fn test_blank_model_output_is_a_generation_failure() {
        let (generator, _) = setup(FakeCompletion::replying("  \n \n"));
        let err = generator.generate_content(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_empty_content_error_maps_to_generation_failure() {
        let (generator, _) = setup(FakeCompletion::with_responder(|_| Err(LlmError::EmptyContent)));
        let err = generator.generate_content(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_variations_apply_decay_in_order() {
        let (generator, fake) = setup(FakeCompletion::replying("one plain line of copy"));

        let suggestions = generator.generate_variations(&request(), 3).await.unwrap();

        let confidences: Vec<f64> = suggestions.iter().map(|s| s.confidence).collect();
        let expected = [0.8, 0.72, 0.64];
        assert_eq!(confidences.len(), 3);
        for (got, want) in confidences.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(fake.call_count(), 3);
    }

    #[tokio::test]
    async fn test_variation_prompts_carry_suffix() {
        let (generator, fake) = setup(FakeCompletion::replying("copy"));
        let req = request();

        generator.generate_variations(&req, 2).await.unwrap();

        let expected_prompt = build_prompt(&variation_request(&req));
        assert!(expected_prompt.contains(VARIATION_SUFFIX));
        assert_eq!(fake.prompts(), vec![expected_prompt.clone(), expected_prompt]);
    }

    /// Later-issued calls finish first; decay must still follow issuance order.
    #[tokio::test(start_paused = true)]
    async fn test_variation_decay_ignores_completion_order() {
        let fake = FakeCompletion::with_responder(|i| Ok(format!("variation {i} body")))
            .with_delays(vec![
                Duration::from_millis(300),
                Duration::from_millis(200),
                Duration::from_millis(100),
            ]);
        let (generator, _) = setup(fake);

        let suggestions = generator.generate_variations(&request(), 3).await.unwrap();

        for (i, suggestion) in suggestions.iter().enumerate() {
            assert_eq!(suggestion.content, format!("variation {i} body"));
            let want = 0.8 * (1.0 - i as f64 * 0.1);
            assert!((suggestion.confidence - want).abs() < 1e-9);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_variations_run_concurrently() {
        let fake = FakeCompletion::replying("copy").with_delays(vec![
            Duration::from_millis(200),
            Duration::from_millis(200),
            Duration::from_millis(200),
        ]);
        let (generator, _) = setup(fake);

        let started = tokio::time::Instant::now();
        generator.generate_variations(&request(), 3).await.unwrap();
        // Sequential calls would need 600ms of virtual time.
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_one_failed_variation_fails_the_batch() {
        let fake = FakeCompletion::with_responder(|i| {
            if i == 1 {
                Err(LlmError::EmptyContent)
            } else {
                Ok("fine copy".to_string())
            }
        });
        let (generator, fake) = setup(fake);

        let result = generator.generate_variations(&request(), 3).await;

        assert!(matches!(result, Err(AppError::Generation { .. })));
        assert_eq!(fake.call_count(), 3, "every issued call runs to completion");
    }

    #[tokio::test]
    async fn test_variation_count_is_capped_and_zero_is_empty() {
        let (generator, fake) = setup(FakeCompletion::replying("copy"));

        assert!(generator.generate_variations(&request(), 0).await.unwrap().is_empty());
        assert_eq!(fake.call_count(), 0);

        let suggestions = generator.generate_variations(&request(), 9).await.unwrap();
        assert_eq!(suggestions.len(), MAX_VARIATIONS);
    }

    #[tokio::test]
    async fn test_improve_content_sends_post_prompt() {
        let (generator, fake) = setup(FakeCompletion::replying("A clearer version of the copy."));

        let suggestion = generator
            .improve_content(
                "our shoes r good",
                ImprovementType::Clarity,
                Some("runners".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(suggestion.content, "A clearer version of the copy.");
        assert_eq!(suggestion.confidence, 0.8);
        let prompt = &fake.prompts()[0];
        assert!(prompt.contains("Create post content based on: Rewrite the following content"));
        assert!(prompt.contains("our shoes r good"));
        assert!(prompt.contains("Target audience: runners."));
    }

    #[tokio::test]
    async fn test_improve_content_propagates_failure() {
        let (generator, _) = setup(FakeCompletion::failing());
        let result = generator
            .improve_content("copy", ImprovementType::Seo, None)
            .await;
        assert!(matches!(result, Err(AppError::Generation { .. })));
    }

    #[tokio::test]
    async fn test_hashtags_are_parsed_and_truncated() {
        let (generator, fake) = setup(FakeCompletion::replying("#sale, #deals , #retail"));

        let hashtags = generator.generate_hashtags("Big weekend sale", 2).await;

        assert_eq!(hashtags, vec!["sale", "deals"]);
        assert_eq!(fake.prompts()[0], build_hashtag_prompt("Big weekend sale", 2));
    }

    #[tokio::test]
    async fn test_hashtags_swallow_provider_failure() {
        let (generator, _) = setup(FakeCompletion::failing());
        assert!(generator.generate_hashtags("Big weekend sale", 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_hashtags_skips_provider() {
        let (generator, fake) = setup(FakeCompletion::replying("#a"));
        assert!(generator.generate_hashtags("content", 0).await.is_empty());
        assert_eq!(fake.call_count(), 0);
    }
}
