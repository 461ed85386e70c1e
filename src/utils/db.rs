use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// helper method to build the connection pool for the configured database
pub(crate) async fn build_db_pool(config: &Configuration) -> LibraryResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(config.database_url.as_str())?
        .create_if_missing(true);
    let pool_options = if config.is_in_memory() {
        // each connection to an in-memory url opens its own database, so keep exactly one alive
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
    };
    let pool = pool_options.connect_with(options).await?;
    info!(environment = %config.environment, database_url = %config.database_url, "connected to database");
    Ok(pool)
}

pub(crate) async fn create_table(pool: &SqlitePool, table_name: &str) -> LibraryResult<()> {
    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS {} (
            isbn TEXT PRIMARY KEY,
            amazon_url TEXT NOT NULL,
            author TEXT NOT NULL,
            language TEXT NOT NULL,
            pages INTEGER NOT NULL,
            publisher TEXT NOT NULL,
            title TEXT NOT NULL,
            year INTEGER NOT NULL
        )", table_name);
    match sqlx::query(ddl.as_str()).execute(pool).await {
        Ok(_) => Ok(()),
        Err(err) => {
            Err(LibraryError::database(format!("failed to create {} table due to {}",
                                               table_name, err).as_str(), None))
        }
    }
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes show up garbled in CloudWatch logs.
        .with_ansi(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, Environment};
    use crate::utils::db::{build_db_pool, create_table};

    #[tokio::test]
    async fn test_should_create_table() {
        let pool = build_db_pool(&Configuration::new(Environment::Test)).await.expect("should connect");
        create_table(&pool, "books").await.expect("should create table");
        // idempotent
        create_table(&pool, "books").await.expect("should create table again");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool).await.expect("should count");
        assert_eq!(0, count.0);
    }

    #[tokio::test]
    async fn test_should_share_in_memory_database_across_queries() {
        let pool = build_db_pool(&Configuration::new(Environment::Test)).await.expect("should connect");
        create_table(&pool, "shared").await.expect("should create table");
        for _ in 0..3 {
            let _ = sqlx::query("SELECT COUNT(*) FROM shared").fetch_one(&pool).await.expect("should see table");
        }
    }

    #[tokio::test]
    async fn test_should_isolate_separate_in_memory_pools() {
        let first = build_db_pool(&Configuration::new(Environment::Test)).await.expect("should connect");
        let second = build_db_pool(&Configuration::new(Environment::Test)).await.expect("should connect");
        create_table(&first, "isolated").await.expect("should create table");
        assert!(sqlx::query("SELECT COUNT(*) FROM isolated").fetch_one(&second).await.is_err());
    }
}
