//! Prompt construction for the content generation pipeline.
//!
//! Pure functions only: the same request always yields byte-identical
//! instructions, so every builder here is tested by exact string comparison.

use crate::generation::models::{ContentType, GenerationRequest, ImprovementType};
use crate::generation::tone::{length_instruction, tone_description};

pub const CAMPAIGN_SYSTEM: &str = "You are an expert marketing campaign strategist. \
    Create compelling campaign content that drives engagement and conversions.";

pub const POST_SYSTEM: &str = "You are a social media expert. \
    Create engaging posts that capture attention and encourage interaction.";

pub const EMAIL_SYSTEM: &str = "You are an email marketing specialist. \
    Create effective email content with a strong subject line and a clear call to action.";

pub const SOCIAL_SYSTEM: &str = "You are a creative social content creator. \
    Create shareable content optimized for social platforms.";

/// Closing sentence appended to every system instruction.
pub const ORIGINALITY_INSTRUCTION: &str =
    "Always produce original, engaging content that resonates with the audience.";

/// Appended to the prompt of every request in a variation batch.
pub const VARIATION_SUFFIX: &str = " (Generate a unique variation)";

/// Hashtag prompt template. Replace `{count}` and `{content}` before sending.
pub const HASHTAG_PROMPT_TEMPLATE: &str = "Generate {count} relevant hashtags for the following content. \
Return only the hashtags separated by commas, without the # symbol.

Content: {content}";

/// Returns the role description for a content type.
pub fn system_template(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Campaign => CAMPAIGN_SYSTEM,
        ContentType::Post => POST_SYSTEM,
        ContentType::Email => EMAIL_SYSTEM,
        ContentType::Social => SOCIAL_SYSTEM,
    }
}

/// Returns the instruction prefixed to content submitted for improvement.
pub fn improvement_instruction(improvement_type: ImprovementType) -> &'static str {
    match improvement_type {
        ImprovementType::Engagement => {
            "Rewrite the following content to be more engaging and compelling for readers:"
        }
        ImprovementType::Clarity => {
            "Rewrite the following content to be clearer and easier to understand:"
        }
        ImprovementType::Seo => {
            "Rewrite the following content to be optimized for search engines while keeping it natural:"
        }
        ImprovementType::Tone => {
            "Rewrite the following content with a more polished and consistent tone:"
        }
    }
}

/// Builds the system instruction: role, optional tone, optional audience, closing.
///
/// An empty `target_audience` is treated as absent.
pub fn build_system_instruction(request: &GenerationRequest) -> String {
    let mut instruction = system_template(request.content_type).to_string();

    if let Some(tone) = request.tone {
        instruction.push_str(&format!(" Use a {} tone.", tone_description(tone)));
    }

    if let Some(audience) = request
        .target_audience
        .as_deref()
        .filter(|a| !a.is_empty())
    {
        instruction.push_str(&format!(" Target audience: {audience}."));
    }

    instruction.push(' ');
    instruction.push_str(ORIGINALITY_INSTRUCTION);
    instruction
}

/// Builds the user instruction: the request prompt, then length, then keywords.
pub fn build_user_instruction(request: &GenerationRequest) -> String {
    let mut instruction = format!(
        "Create {} content based on: {}",
        request.content_type, request.prompt
    );

    if let Some(length) = request.length {
        instruction.push(' ');
        instruction.push_str(length_instruction(length));
    }

    if !request.keywords.is_empty() {
        instruction.push_str(&format!(
            " Include these keywords naturally: {}.",
            request.keywords.join(", ")
        ));
    }

    instruction
}

/// Composes the single user-role message sent to the provider.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "{}\n\n{}",
        build_system_instruction(request),
        build_user_instruction(request)
    )
}

/// Copies `request` with the variation suffix appended to its prompt.
pub fn variation_request(request: &GenerationRequest) -> GenerationRequest {
    GenerationRequest {
        prompt: format!("{}{VARIATION_SUFFIX}", request.prompt),
        ..request.clone()
    }
}

/// Rewrites an improvement into a plain `post` generation request.
pub fn improvement_request(
    content: &str,
    improvement_type: ImprovementType,
    target_audience: Option<String>,
) -> GenerationRequest {
    GenerationRequest {
        prompt: format!("{}\n\n{content}", improvement_instruction(improvement_type)),
        content_type: ContentType::Post,
        tone: None,
        length: None,
        target_audience,
        keywords: Vec::new(),
    }
}

pub fn build_hashtag_prompt(content: &str, count: usize) -> String {
    HASHTAG_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{content}", content)
}
