use sea_orm::DatabaseConnection;

/// Shared handler state
///
/// `DatabaseConnection` is a pool, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
