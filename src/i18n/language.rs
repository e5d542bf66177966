use strum::EnumIter;

/// Languages the bundled country tables are available in.
#[derive(Debug, Default, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Sv,
}

impl Language {
    /// Maps a free-form language tag onto a supported language. Swedish is
    /// recognised as either `sv` or `se`, anything else falls back to English.
    pub fn normalize(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sv" | "se" => Self::Sv,
            _ => Self::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Sv => "sv",
        }
    }
}
