use sea_orm::DatabaseConnection;

use crate::server::feed::AttendanceFeed;

/// Shared application state handed to every request handler.
///
/// Constructed once at process start and torn down at process exit; the change feed
/// hub is injected here rather than reached through any process-global.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub feed: AttendanceFeed,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            feed: AttendanceFeed::new(),
        }
    }
}
