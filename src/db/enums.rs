use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Storefronts an album can be distributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum StoreName {
    #[sea_orm(string_value = "spotify")]
    Spotify,
    #[sea_orm(string_value = "apple")]
    Apple,
    #[sea_orm(string_value = "youtube")]
    Youtube,
}

impl StoreName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Spotify => "spotify",
            Self::Apple => "apple",
            Self::Youtube => "youtube",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "spotify" => Some(Self::Spotify),
            "apple" => Some(Self::Apple),
            "youtube" => Some(Self::Youtube),
            _ => None,
        }
    }
}

impl From<StoreName> for String {
    fn from(name: StoreName) -> String {
        name.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ArtistRole {
    #[default]
    #[sea_orm(string_value = "primary_artist")]
    PrimaryArtist,
    #[sea_orm(string_value = "secondary_artist")]
    SecondaryArtist,
}

impl ArtistRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PrimaryArtist => "primary_artist",
            Self::SecondaryArtist => "secondary_artist",
        }
    }
}

impl From<ArtistRole> for String {
    fn from(role: ArtistRole) -> String {
        role.as_str().to_string()
    }
}
