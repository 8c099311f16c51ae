pub mod answer_pipeline;
pub mod model_service;
pub mod normalizer;
pub mod search_service;
pub mod story_pipeline;
pub mod story_synthesizer;
pub mod topic_grouper;
