use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const BOOK_COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

#[derive(Debug)]
pub struct SqlBookRepository {
    pool: SqlitePool,
    table_name: String,
}

impl SqlBookRepository {
    pub(crate) fn new(pool: SqlitePool, table_name: &str) -> Self {
        Self {
            pool,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for SqlBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {}",
            self.table_name, BOOK_COLUMNS, BOOK_COLUMNS);
        debug!(isbn = %entity.isbn, "inserting book");
        sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(&entity.isbn)
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .fetch_one(&self.pool)
            .await.map_err(|err| match LibraryError::from(err) {
            LibraryError::DuplicateKey { .. } => {
                LibraryError::duplicate_key(format!("book already exists for isbn '{}'", entity.isbn).as_str())
            }
            other => other,
        })
    }

    // isbn is the key and is never rewritten
    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let sql = format!(
            "UPDATE {} SET amazon_url = ?2, author = ?3, language = ?4, pages = ?5, publisher = ?6, title = ?7, year = ?8 \
             WHERE isbn = ?1 RETURNING {}",
            self.table_name, BOOK_COLUMNS);
        debug!(isbn = %entity.isbn, "updating book");
        sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(&entity.isbn)
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from).and_then(|row| {
            row.ok_or_else(|| LibraryError::not_found(
                format!("there is no book with an isbn '{}'", entity.isbn).as_str()))
        })
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let sql = format!("SELECT {} FROM {} WHERE isbn = ?1", BOOK_COLUMNS, self.table_name);
        sqlx::query_as::<_, BookEntity>(sql.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from).and_then(|row| {
            row.ok_or_else(|| LibraryError::not_found(
                format!("there is no book with an isbn '{}'", id).as_str()))
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let sql = format!("DELETE FROM {} WHERE isbn = ?1", self.table_name);
        debug!(isbn = %id, "deleting book");
        let res = sqlx::query(sql.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(LibraryError::not_found(format!("there is no book with an isbn '{}'", id).as_str()));
        }
        Ok(res.rows_affected() as usize)
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let sql = format!("SELECT {} FROM {} ORDER BY title, isbn", BOOK_COLUMNS, self.table_name);
        sqlx::query_as::<_, BookEntity>(sql.as_str())
            .fetch_all(&self.pool)
            .await.map_err(LibraryError::from)
    }
}

impl BookRepository for SqlBookRepository {}
