pub mod alert;
pub mod game;
pub mod odds;
pub mod player;
pub mod system;
pub mod team;

pub use alert::{Alert, AlertMetadata, MetadataOdds};
pub use game::{Game, GameScore, GameStatus};
pub use odds::Odds;
pub use player::{
    ContextualFactors, HealthStatus, Player, PlayerGameStats, PlayerProp, PlayerTrend,
    PsychologicalProfile, SeasonStats,
};
pub use system::SystemStats;
pub use team::{PerformancePoint, Team, TeamStats};
