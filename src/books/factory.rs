use crate::books::repository::BookRepository;
use crate::books::repository::sql_book_repository::SqlBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::db::{build_db_pool, create_table};

pub(crate) const BOOKS_TABLE: &str = "books";

pub(crate) async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    let pool = build_db_pool(config).await?;
    create_table(&pool, BOOKS_TABLE).await?;
    Ok(Box::new(SqlBookRepository::new(pool, BOOKS_TABLE)))
}
