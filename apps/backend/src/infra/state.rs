use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for `AppState`, shared by `main` and tests.
#[derive(Default)]
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Connect (and migrate) when a profile was given; otherwise build a DB-less state.
    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_profile {
            Some(profile) => {
                let conn = bootstrap_db(profile, DbOwner::App).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
