//! DTOs for games_sea adapter.

/// DTO for creating a new game. Score starts at zero and the game open.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub total_score: i32,
    pub completed: bool,
}

impl GameCreate {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Score summary written back after every roll, guarded by `expected_version`.
#[derive(Debug, Clone)]
pub struct GameUpdateSummary {
    pub id: i64,
    pub total_score: i32,
    pub completed: bool,
    pub expected_version: i32,
}

impl GameUpdateSummary {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            total_score: 0,
            completed: false,
            expected_version,
        }
    }

    pub fn with_total_score(mut self, total_score: i32) -> Self {
        self.total_score = total_score;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
