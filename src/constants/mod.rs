pub mod prompts;
pub mod suggestions;
