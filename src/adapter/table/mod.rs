//! Canonical player table loading.
//!
//! The data normalizer upstream exports one row per player as CSV or as a
//! JSON array. Rows are read into [`PlayerRecord`], whose fields are all
//! optional so that a missing column is reported as a validation error
//! naming the player and field rather than as an opaque parse failure.
//!
//! Column names follow the canonical schema; `team` and `value` are accepted
//! as aliases for `club` and `price`.

use std::fs;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::{Club, Player, PlayerId, PlayerTable, Position};
use crate::error::{Result, TableError};

/// One raw row of the canonical player table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRecord {
    pub id: Option<u32>,
    pub name: Option<String>,
    #[serde(alias = "team")]
    pub club: Option<String>,
    pub position: Option<String>,
    #[serde(alias = "value")]
    pub price: Option<Decimal>,
    pub expected_points: Option<Decimal>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub in_squad: Option<bool>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_available: Option<bool>,
}

impl PlayerRecord {
    /// Validate the row and build a [`Player`].
    ///
    /// `in_squad` defaults to false and `is_available` to true.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] for an absent `id`, `name`,
    /// `club`, `position`, `price` or `expected_points`, and the matching
    /// parse or range error otherwise.
    pub fn into_player(self) -> std::result::Result<Player, DomainError> {
        let label = self
            .id
            .map(|id| id.to_string())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "<unnamed>".to_string());
        let missing = |field: &'static str| DomainError::MissingField {
            player: label.clone(),
            field,
        };

        let id = self.id.ok_or_else(|| missing("id"))?;
        let name = self.name.clone().ok_or_else(|| missing("name"))?;
        let club: Club = self.club.as_deref().ok_or_else(|| missing("club"))?.parse()?;
        let position: Position = self
            .position
            .as_deref()
            .ok_or_else(|| missing("position"))?
            .parse()?;
        let price = self.price.ok_or_else(|| missing("price"))?;
        let expected_points = self
            .expected_points
            .ok_or_else(|| missing("expected_points"))?;

        Ok(
            Player::try_new(PlayerId::new(id), name, club, position, price, expected_points)?
                .with_in_squad(self.in_squad.unwrap_or(false))
                .with_available(self.is_available.unwrap_or(true)),
        )
    }
}

/// Accept `true`/`false`, `1`/`0`, `yes`/`no` in any case.
fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    let raw: Option<BoolLike> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(BoolLike::Bool(b)) => Ok(Some(b)),
        Some(BoolLike::Int(0)) => Ok(Some(false)),
        Some(BoolLike::Int(1)) => Ok(Some(true)),
        Some(BoolLike::Int(other)) => Err(serde::de::Error::custom(format!(
            "expected 0 or 1, got {other}"
        ))),
        Some(BoolLike::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "t" | "yes" | "y" | "1" => Ok(Some(true)),
            "false" | "f" | "no" | "n" | "0" => Ok(Some(false)),
            _ => Err(serde::de::Error::custom(format!(
                "expected a boolean, got `{text}`"
            ))),
        },
    }
}

/// Convert raw records into a validated table. Row numbers are 1-based.
fn into_table(records: Vec<PlayerRecord>) -> Result<PlayerTable> {
    let players = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .into_player()
                .map_err(|source| TableError::Row { row: i + 1, source })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(PlayerTable::try_new(players)?)
}

/// Read a CSV player table.
///
/// # Errors
///
/// Returns [`TableError::Csv`] for malformed CSV and a row or domain error
/// for invalid content.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<PlayerTable> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = csv
        .deserialize::<PlayerRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(TableError::Csv)?;
    into_table(records)
}

/// Read a JSON array player table.
///
/// # Errors
///
/// Returns [`TableError::Json`] for malformed JSON and a row or domain error
/// for invalid content.
pub fn from_json_str(content: &str) -> Result<PlayerTable> {
    let records: Vec<PlayerRecord> = serde_json::from_str(content).map_err(TableError::Json)?;
    into_table(records)
}

/// Load a player table, choosing the format from the file extension.
///
/// # Errors
///
/// Returns an error when the file cannot be read, has an unsupported
/// extension, or fails validation.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PlayerTable> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let table = match extension.as_str() {
        "csv" => from_csv_reader(fs::File::open(path).map_err(TableError::ReadFile)?)?,
        "json" => from_json_str(&fs::read_to_string(path).map_err(TableError::ReadFile)?)?,
        _ => return Err(TableError::UnsupportedFormat { extension }.into()),
    };

    info!(
        path = %path.display(),
        players = table.len(),
        squad_value = %table.squad_value(),
        "Loaded player table"
    );
    Ok(table)
}
