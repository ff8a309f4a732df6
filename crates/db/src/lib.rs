use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub use sea_orm::{DbErr, TransactionTrait};

pub mod entities;
pub mod models;
pub mod types;

/// Owns the database connection. Migrations run on construction so every
/// caller sees a fully provisioned schema.
#[derive(Clone)]
pub struct DbService {
    conn: DatabaseConnection,
}

impl DbService {
    pub async fn new(database_url: &str) -> Result<Self, DbErr> {
        let conn = Database::connect(database_url).await?;
        db_migration::Migrator::up(&conn, None).await?;
        tracing::debug!("Database connected and schema provisioned");
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}
