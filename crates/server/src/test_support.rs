use db::DbService;

use crate::AppState;

/// Fresh state over an in-memory database with the schema applied.
pub async fn test_state() -> AppState {
    let db = DbService::new("sqlite::memory:")
        .await
        .expect("in-memory database");
    AppState::new(db)
}
