#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of content categories browsable for every country.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "inspiration"))]
    Inspiration,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "music"))]
    Music,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "comedy"))]
    Comedy,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "cooking"))]
    Cooking,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "street_voices"))]
    StreetVoices,
}

impl Category {
    /// Display order used by the sidebar.
    pub const ALL: &'static [Category] = &[
        Self::Inspiration,
        Self::Music,
        Self::Comedy,
        Self::Cooking,
        Self::StreetVoices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inspiration => "inspiration",
            Self::Music => "music",
            Self::Comedy => "comedy",
            Self::Cooking => "cooking",
            Self::StreetVoices => "street_voices",
        }
    }

    /// Stable human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inspiration => "Inspiration",
            Self::Music => "Music",
            Self::Comedy => "Comedy",
            Self::Cooking => "Food",
            Self::StreetVoices => "Talks",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Inspiration => "\u{1F4A1}",
            Self::Music => "\u{1F3B5}",
            Self::Comedy => "\u{1F604}",
            Self::Cooking => "\u{1F373}",
            Self::StreetVoices => "\u{1F3A4}",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Inspiration => "Short pieces that lift you up straight from the street.",
            Self::Music => "Live sessions, buskers, and raw local talent.",
            Self::Comedy => "Street humor, sketches, and cultural riffs.",
            Self::Cooking => "Home kitchens and street food classics, unfiltered.",
            Self::StreetVoices => "Candid conversations and micro-docs shot on the street.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
