use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::types::Json;
use sqlx::{Decode, Encode, FromRow, Postgres, Type};

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a game. Only ever moves forward:
/// scheduled → live → finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Finished => "finished",
        }
    }

    /// True if `next` is a legal forward step from `self`.
    /// Staying put is not a transition.
    pub fn can_advance_to(&self, next: GameStatus) -> bool {
        next > *self
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(GameStatus::Scheduled),
            "live" => Ok(GameStatus::Live),
            "finished" => Ok(GameStatus::Finished),
            other => Err(anyhow::anyhow!("unknown game status: {other}")),
        }
    }
}

// Stored as TEXT (CHECK-constrained), not as a Postgres enum type.
impl Type<Postgres> for GameStatus {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for GameStatus {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for GameStatus {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Score blob stored as JSONB on the games row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub home: i32,
    pub away: i32,
    pub quarter: i32,
}

/// Database row for the games table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub status: GameStatus,
    pub score: Json<GameScore>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_moves_forward() {
        assert!(GameStatus::Scheduled.can_advance_to(GameStatus::Live));
        assert!(GameStatus::Live.can_advance_to(GameStatus::Finished));
        assert!(GameStatus::Scheduled.can_advance_to(GameStatus::Finished));

        assert!(!GameStatus::Finished.can_advance_to(GameStatus::Live));
        assert!(!GameStatus::Live.can_advance_to(GameStatus::Scheduled));
        assert!(!GameStatus::Live.can_advance_to(GameStatus::Live));
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [GameStatus::Scheduled, GameStatus::Live, GameStatus::Finished] {
            assert_eq!(status.as_str().parse::<GameStatus>().unwrap(), status);
        }
        assert!("postponed".parse::<GameStatus>().is_err());
        assert!("LIVE".parse::<GameStatus>().is_err());
    }

    #[test]
    fn test_game_serializes_camel_case_with_flat_score() {
        let game = Game {
            id: 7,
            home_team: "Lakers".into(),
            away_team: "Celtics".into(),
            status: GameStatus::Live,
            score: Json(GameScore { home: 54, away: 50, quarter: 2 }),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["homeTeam"], "Lakers");
        assert_eq!(json["awayTeam"], "Celtics");
        assert_eq!(json["score"]["home"], 54);
        assert_eq!(json["score"]["quarter"], 2);
        assert_eq!(json["status"], "live");

        let back: Game = serde_json::from_value(json).unwrap();
        assert_eq!(back.status, GameStatus::Live);
    }
}
