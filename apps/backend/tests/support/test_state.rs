use bowling_backend::config::db::DbProfile;
use bowling_backend::infra::state::build_state;
use bowling_backend::state::app_state::AppState;
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated in-memory SQLite state; nothing is shared between tests.
pub async fn in_memory_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .build()
        .await
        .expect("build in-memory state")
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("state has a database")
}
