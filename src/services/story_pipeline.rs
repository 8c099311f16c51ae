use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::{stream, FutureExt, StreamExt};

use crate::{
    models::domain::{RawResult, ResultGroup, Story},
    services::{
        model_service::GenerativeProvider,
        normalizer::Labeler,
        story_synthesizer::{fallback_story, StorySynthesizer},
        topic_grouper::group_results,
    },
};

/// Most stories in one feed.
pub const MAX_STORIES: usize = 6;

pub struct StoryPipeline {
    synthesizer: StorySynthesizer,
    concurrency: usize,
}

impl StoryPipeline {
    pub fn new(generator: Arc<dyn GenerativeProvider>, concurrency: usize) -> Self {
        Self {
            synthesizer: StorySynthesizer::new(generator),
            concurrency: concurrency.max(1),
        }
    }

    /// Groups, synthesizes and ranks stories for one section. The first story
    /// is marked featured.
    pub async fn build_stories(
        &self,
        results: &[RawResult],
        section: &str,
        labeler: &mut Labeler,
    ) -> Vec<Story> {
        let attempt = AssertUnwindSafe(self.synthesize_all(results, section, labeler))
            .catch_unwind()
            .await;

        let mut stories = match attempt {
            Ok(stories) => stories,
            Err(_) => {
                log::error!("Story generation failed for {}, serving raw results", section);
                raw_result_stories(results, section, labeler)
            }
        };

        if let Some(first) = stories.first_mut() {
            first.featured = true;
        }
        stories
    }

    async fn synthesize_all(
        &self,
        results: &[RawResult],
        section: &str,
        labeler: &mut Labeler,
    ) -> Vec<Story> {
        let groups = group_results(results, section);
        log::info!(
            "Synthesizing {} story groups from {} results for {}",
            groups.len(),
            results.len(),
            section
        );

        // buffered keeps group order regardless of completion order
        let copies: Vec<_> = stream::iter(groups.iter())
            .map(|group| self.synthesizer.request_copy(group, section))
            .buffered(self.concurrency)
            .collect()
            .await;

        groups
            .iter()
            .zip(copies)
            .map(|(group, copy)| self.synthesizer.assemble(group, section, copy, labeler))
            .take(MAX_STORIES)
            .collect()
    }
}

/// One fallback story per raw result, skipping grouping entirely.
pub fn raw_result_stories(results: &[RawResult], section: &str, labeler: &mut Labeler) -> Vec<Story> {
    results
        .iter()
        .take(MAX_STORIES)
        .enumerate()
        .map(|(index, result)| fallback_story(&ResultGroup::single(index, result), section, labeler))
        .collect()
}
