#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a viewer reported a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    /// Video removed, private, or no longer embeddable.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "broken"))]
    Broken,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "wrong_category"))]
    WrongCategory,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "inappropriate"))]
    Inappropriate,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "other"))]
    Other,
}

impl FlagReason {
    pub const ALL: &'static [FlagReason] = &[
        Self::Broken,
        Self::WrongCategory,
        Self::Inappropriate,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Broken => "broken",
            Self::WrongCategory => "wrong_category",
            Self::Inappropriate => "inappropriate",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
