use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never touch storage)
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
