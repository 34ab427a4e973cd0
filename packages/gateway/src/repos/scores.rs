//! Score repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::scores_sea as scores_adapter;
use crate::errors::domain::DomainError;

/// Number of leaderboard rows returned when callers do not choose a limit.
pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;

const POINTS_PER_ENEMY: i32 = 10;
const POINTS_PER_TREASURE: i32 = 5;

/// Data for submitting a score (reduces parameter count)
#[derive(Debug, Clone)]
pub struct ScoreData {
    pub player_id: i64,
    pub level_reached: i32,
    pub enemies_defeated: i32,
    pub treasures_collected: i32,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub score: i32,
}

/// Derive the submitted score from its play-session counters.
pub fn compute_score(enemies_defeated: i32, treasures_collected: i32) -> i32 {
    enemies_defeated * POINTS_PER_ENEMY + treasures_collected * POINTS_PER_TREASURE
}

/// Record a play session's score. Scores are immutable; a player
/// accumulates one row per session.
pub async fn save_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    data: ScoreData,
) -> Result<(), DomainError> {
    let dto = scores_adapter::ScoreCreate {
        player_id: data.player_id,
        level_reached: data.level_reached,
        enemies_defeated: data.enemies_defeated,
        treasures_collected: data.treasures_collected,
        score: compute_score(data.enemies_defeated, data.treasures_collected),
    };
    scores_adapter::create_score(conn, dto).await?;

    Ok(())
}

/// Top `limit` scores, highest first; ties unordered. Returns fewer rows
/// when fewer exist.
pub async fn get_leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<LeaderboardEntry>, DomainError> {
    let rows = scores_adapter::leaderboard(conn, limit).await?;
    Ok(rows
        .into_iter()
        .map(|(score, player_id)| LeaderboardEntry { player_id, score })
        .collect())
}
