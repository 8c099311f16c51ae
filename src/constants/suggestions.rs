/// Starter prompts offered on the landing view.
pub const SEARCH_SUGGESTIONS: [&str; 8] = [
    "Podcast Outline",
    "YouTube Video Research",
    "Short Form Hook Ideas",
    "Newsletter Draft",
    "Social Media Content Ideas",
    "Trending Topics Analysis",
    "Content Strategy Tips",
    "Viral Content Examples",
];
