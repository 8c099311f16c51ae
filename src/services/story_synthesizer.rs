use std::sync::Arc;

use crate::{
    constants::prompts::{STORY_SYNTHESIS_INSTRUCTIONS, STORY_SYNTHESIS_PREAMBLE},
    errors::{AppError, AppResult},
    models::domain::{section::categories_for, ResultGroup, Story, StoryCopy},
    services::{
        model_service::GenerativeProvider,
        normalizer::{self, Labeler},
    },
};

const PROMPT_CONTENT_CHARS: usize = 500;
const FALLBACK_SUMMARY_CHARS: usize = 200;
pub const NO_SUMMARY: &str = "No summary available";
pub const FALLBACK_ANALYSIS: &str = "This story combines insights from multiple sources to provide comprehensive coverage of this developing topic.";

/// Returns the first balanced `{...}` span in `text`. Braces inside JSON
/// strings are skipped.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Best-effort structured extraction of story copy from free text.
pub fn parse_story_copy(text: &str) -> AppResult<StoryCopy> {
    let json = extract_json_object(text).ok_or_else(|| {
        AppError::MalformedProviderOutput("no JSON object in response".to_string())
    })?;
    let copy: StoryCopy = serde_json::from_str(json)?;

    if copy.headline.trim().is_empty() || copy.summary.trim().is_empty() {
        return Err(AppError::MalformedProviderOutput(
            "headline and summary must be non-empty".to_string(),
        ));
    }
    Ok(copy)
}

pub fn build_prompt(group: &ResultGroup<'_>, section: &str) -> String {
    let articles = group
        .contributors()
        .enumerate()
        .map(|(i, result)| {
            let content = result
                .content
                .as_deref()
                .map(|c| c.chars().take(PROMPT_CONTENT_CHARS).collect::<String>())
                .unwrap_or_else(|| "No content available".to_string());
            format!(
                "Article {}:\nTitle: {}\nContent: {}\nURL: {}\n",
                i + 1,
                result.title,
                content,
                result.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nARTICLES TO SYNTHESIZE:\n{}\nSECTION CONTEXT: {}\nUse a tone appropriate for the {} audience.\n\n{}",
        STORY_SYNTHESIS_PREAMBLE, articles, section, section, STORY_SYNTHESIS_INSTRUCTIONS
    )
}

/// Turns one result group into one story, via the generative provider when
/// it cooperates and a deterministic fallback otherwise.
pub struct StorySynthesizer {
    generator: Arc<dyn GenerativeProvider>,
}

impl StorySynthesizer {
    pub fn new(generator: Arc<dyn GenerativeProvider>) -> Self {
        Self { generator }
    }

    /// Network half: one provider call, no retry.
    pub async fn request_copy(&self, group: &ResultGroup<'_>, section: &str) -> AppResult<StoryCopy> {
        let prompt = build_prompt(group, section);
        let text = self.generator.generate(&prompt).await?;
        parse_story_copy(&text)
    }

    /// Local half: attaches derived fields, falling back on any copy error.
    pub fn assemble(
        &self,
        group: &ResultGroup<'_>,
        section: &str,
        copy: AppResult<StoryCopy>,
        labeler: &mut Labeler,
    ) -> Story {
        match copy {
            Ok(copy) => story_from_copy(group, section, copy, labeler),
            Err(err) => {
                log::warn!(
                    "Story synthesis failed for {:?}, using fallback: {}",
                    group.lead().title,
                    err.detail()
                );
                fallback_story(group, section, labeler)
            }
        }
    }

    pub async fn synthesize(
        &self,
        group: &ResultGroup<'_>,
        section: &str,
        labeler: &mut Labeler,
    ) -> Story {
        let copy = self.request_copy(group, section).await;
        self.assemble(group, section, copy, labeler)
    }
}

fn story_from_copy(
    group: &ResultGroup<'_>,
    section: &str,
    copy: StoryCopy,
    labeler: &mut Labeler,
) -> Story {
    let category = labeler.category_of(&copy.headline, categories_for(section));
    let time = labeler.recency_label(group.lead().published_date.as_deref());

    Story {
        headline: copy.headline,
        summary: copy.summary,
        analysis: copy.analysis,
        sources: group.contributors().map(normalizer::source_ref).collect(),
        thumbnail: group_thumbnail(group),
        category,
        time: time.text,
        time_estimated: time.estimated,
        featured: false,
    }
}

/// Story built from the group's lead result alone.
pub fn fallback_story(group: &ResultGroup<'_>, section: &str, labeler: &mut Labeler) -> Story {
    let lead = group.lead();
    let summary = match lead.content.as_deref() {
        Some(content) => normalizer::snippet(content, FALLBACK_SUMMARY_CHARS),
        None => NO_SUMMARY.to_string(),
    };
    let category = labeler.category_of(&lead.title, categories_for(section));
    let time = labeler.recency_label(lead.published_date.as_deref());

    Story {
        headline: lead.title.clone(),
        summary,
        analysis: Some(FALLBACK_ANALYSIS.to_string()),
        sources: group.contributors().map(normalizer::source_ref).collect(),
        thumbnail: group_thumbnail(group),
        category,
        time: time.text,
        time_estimated: time.estimated,
        featured: false,
    }
}

/// First real image among contributors, else the lead's placeholder.
fn group_thumbnail(group: &ResultGroup<'_>) -> String {
    group
        .contributors()
        .find_map(|result| result.image())
        .map(str::to_string)
        .unwrap_or_else(|| normalizer::thumbnail_of(group.lead()))
}
