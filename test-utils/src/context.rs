use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const MEMORY_URL: &str = "sqlite::memory:";

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing, or a file-backed one when a test needs several pooled connections to see the
/// same data. The database is created lazily on first access and persists for the lifetime
/// of the test context.
pub struct TestContext {
    /// Optional database connection to the SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,
    url: String,
    /// Database file removed when the context is dropped.
    file: Option<DatabaseFile>,
}

/// Temp SQLite file deleted along with its journal files on drop.
struct DatabaseFile(PathBuf);

impl Drop for DatabaseFile {
    fn drop(&mut self) {
        remove_database_files(&self.0);
    }
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self {
            db: None,
            url: MEMORY_URL.to_string(),
            file: None,
        }
    }

    /// Creates a test context backed by a SQLite file in the temp directory.
    ///
    /// The file name combines `name` with the process ID, so tests running in parallel
    /// must pass distinct names. Any leftover file of the same name is removed first.
    ///
    /// # Arguments
    /// - `name` - Name unique to the calling test
    pub fn file_backed(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "collegeboard-{}-{}.db",
            std::process::id(),
            name
        ));
        remove_database_files(&path);

        Self {
            db: None,
            url: format!("sqlite://{}?mode=rwc", path.display()),
            file: Some(DatabaseFile(path)),
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// connects to the configured SQLite database and stores the connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect(self.url.as_str()).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence. Typically called internally by
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(db.get_database_backend().build(&stmt)).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes a SQLite database file along with its journal files, ignoring missing ones.
fn remove_database_files(path: &Path) {
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}
