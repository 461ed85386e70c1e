use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(isbn = %saved.isbn, "added book");
        Ok(BookDto::from(&saved))
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(isbn = %saved.isbn, "updated book");
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(isbn).await?;
        info!(isbn = %isbn, "removed book");
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            amazon_url: other.amazon_url.to_string(),
            author: other.author.to_string(),
            language: other.language.to_string(),
            pages: other.pages,
            publisher: other.publisher.to_string(),
            title: other.title.to_string(),
            year: other.year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            amazon_url: other.amazon_url.to_string(),
            author: other.author.to_string(),
            language: other.language.to_string(),
            pages: other.pages,
            publisher: other.publisher.to_string(),
            title: other.title.to_string(),
            year: other.year,
        }
    }
}
