//! League clubs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Closed set of league clubs, identified by their short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Club {
    Ars,
    Avl,
    Bha,
    Bou,
    Bre,
    Che,
    Cry,
    Eve,
    Ful,
    Lee,
    Lei,
    Liv,
    Mci,
    Mun,
    New,
    Nfo,
    Sou,
    Tot,
    Whu,
    Wol,
}

impl Club {
    /// Every club in the league, alphabetical by code.
    pub const ALL: [Club; 20] = [
        Club::Ars,
        Club::Avl,
        Club::Bha,
        Club::Bou,
        Club::Bre,
        Club::Che,
        Club::Cry,
        Club::Eve,
        Club::Ful,
        Club::Lee,
        Club::Lei,
        Club::Liv,
        Club::Mci,
        Club::Mun,
        Club::New,
        Club::Nfo,
        Club::Sou,
        Club::Tot,
        Club::Whu,
        Club::Wol,
    ];

    /// Three-letter short code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Club::Ars => "ARS",
            Club::Avl => "AVL",
            Club::Bha => "BHA",
            Club::Bou => "BOU",
            Club::Bre => "BRE",
            Club::Che => "CHE",
            Club::Cry => "CRY",
            Club::Eve => "EVE",
            Club::Ful => "FUL",
            Club::Lee => "LEE",
            Club::Lei => "LEI",
            Club::Liv => "LIV",
            Club::Mci => "MCI",
            Club::Mun => "MUN",
            Club::New => "NEW",
            Club::Nfo => "NFO",
            Club::Sou => "SOU",
            Club::Tot => "TOT",
            Club::Whu => "WHU",
            Club::Wol => "WOL",
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Club {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Club::ALL
            .into_iter()
            .find(|club| club.code() == code)
            .ok_or_else(|| DomainError::UnknownClub(s.to_string()))
    }
}
