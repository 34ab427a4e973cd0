//! DTOs for scores_sea adapter.

/// DTO for submitting a score. `score` arrives pre-derived from the
/// session counters; the adapter stores it verbatim.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub player_id: i64,
    pub level_reached: i32,
    pub enemies_defeated: i32,
    pub treasures_collected: i32,
    pub score: i32,
}
