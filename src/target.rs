use crate::options::Field;

/// Output shape the compiler renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Nested JSON document.
    Structured,
    /// Single-line `/imagine` command.
    SlashCommand,
    /// Sectioned plain-text paragraph.
    Narrative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Video,
    Image,
}

impl MediaType {
    pub fn models(self) -> &'static [TargetModel] {
        match self {
            MediaType::Video => &[
                TargetModel::Sora,
                TargetModel::Runway,
                TargetModel::Flow,
                TargetModel::Json,
            ],
            MediaType::Image => &[
                TargetModel::Midjourney,
                TargetModel::Dalle,
                TargetModel::Gemini,
            ],
        }
    }

    /// Model selected whenever the media type is switched.
    pub fn default_model(self) -> TargetModel {
        match self {
            MediaType::Video => TargetModel::Sora,
            MediaType::Image => TargetModel::Midjourney,
        }
    }
}

/// Downstream model the prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetModel {
    Sora,
    Runway,
    Flow,
    Json,
    Midjourney,
    Dalle,
    Gemini,
}

impl TargetModel {
    pub const ALL: [TargetModel; 7] = [
        TargetModel::Sora,
        TargetModel::Runway,
        TargetModel::Flow,
        TargetModel::Json,
        TargetModel::Midjourney,
        TargetModel::Dalle,
        TargetModel::Gemini,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TargetModel::Sora => "sora",
            TargetModel::Runway => "runway",
            TargetModel::Flow => "flow",
            TargetModel::Json => "json",
            TargetModel::Midjourney => "midjourney",
            TargetModel::Dalle => "dalle",
            TargetModel::Gemini => "gemini",
        }
    }

    pub fn from_id(id: &str) -> Option<TargetModel> {
        TargetModel::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TargetModel::Sora => "Sora",
            TargetModel::Runway => "Runway Gen-3",
            TargetModel::Flow => "Flow",
            TargetModel::Json => "JSON Style",
            TargetModel::Midjourney => "Midjourney v6",
            TargetModel::Dalle => "DALL-E 3",
            TargetModel::Gemini => "Gemini",
        }
    }

    pub fn media_type(self) -> MediaType {
        match self {
            TargetModel::Midjourney | TargetModel::Dalle | TargetModel::Gemini => MediaType::Image,
            _ => MediaType::Video,
        }
    }

    pub fn target(self) -> Target {
        match self {
            TargetModel::Json => Target::Structured,
            TargetModel::Midjourney => Target::SlashCommand,
            _ => Target::Narrative,
        }
    }

    /// Technical fields a form shows for this model.
    pub fn technical_fields(self) -> [Field; 2] {
        match self {
            TargetModel::Midjourney => [Field::BatchSize, Field::VideoToggle],
            _ => [Field::Duration, Field::Fps],
        }
    }
}

impl std::fmt::Display for TargetModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
