use db::DbService;
use sea_orm::DatabaseConnection;

pub mod error;
pub mod http;
pub mod routes;

#[cfg(test)]
pub mod test_support;

/// Shared handler state: a cheap clone handle over the database service.
#[derive(Clone)]
pub struct AppState {
    db: DbService,
}

impl AppState {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.db.conn()
    }
}
