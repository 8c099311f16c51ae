use serde::Serialize;

use crate::constants::prompts;

/// Persona that sets tone and format of a generated answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    General,
    NewsMap,
    Scholar,
    LaunchLens,
    ViralForge,
    LegalAi,
}

impl Personality {
    /// Resolves a persona name; anything unrecognised is `General`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("newsmap") => Personality::NewsMap,
            Some("scholar") => Personality::Scholar,
            Some("launchlens") => Personality::LaunchLens,
            Some("viralforge") => Personality::ViralForge,
            Some("legalai") => Personality::LegalAi,
            _ => Personality::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::General => "general",
            Personality::NewsMap => "newsmap",
            Personality::Scholar => "scholar",
            Personality::LaunchLens => "launchlens",
            Personality::ViralForge => "viralforge",
            Personality::LegalAi => "legalai",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Personality::General => prompts::GENERAL_PERSONA,
            Personality::NewsMap => prompts::NEWSMAP_PERSONA,
            Personality::Scholar => prompts::SCHOLAR_PERSONA,
            Personality::LaunchLens => prompts::LAUNCHLENS_PERSONA,
            Personality::ViralForge => prompts::VIRALFORGE_PERSONA,
            Personality::LegalAi => prompts::LEGALAI_PERSONA,
        }
    }
}
