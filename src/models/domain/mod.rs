pub mod personality;
pub mod search_result;
pub mod section;
pub mod story;
pub use personality::Personality;
pub use search_result::{RawResult, SearchResponse};
pub use section::Section;
pub use story::{GroupedResult, ResultGroup, SourceRef, Story, StoryCopy};
