//! Shared fixtures for integration tests.

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use petclinic_vets::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Temporary SQLite database with every migration applied.
///
/// The seed migration loads the six reference vets (James Carter, Helen
/// Leary, Linda Douglas, Rafael Ortega, Henry Stevens, Sharon Jenkins).
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 database path").to_string();

        let pool = establish_connection_pool(&url).expect("connection pool");
        {
            let mut conn = pool.get().expect("pooled connection");
            let conn: &mut SqliteConnection = &mut conn;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("migrations applied");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
