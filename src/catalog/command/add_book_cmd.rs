use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) amazon_url: String,
    pub(crate) author: String,
    pub(crate) language: String,
    pub(crate) pages: i32,
    pub(crate) publisher: String,
    pub(crate) title: String,
    pub(crate) year: i32,
}

impl AddBookCommandRequest {
    pub fn build_book(&self) -> BookDto {
        BookDto {
            isbn: self.isbn.to_string(),
            amazon_url: self.amazon_url.to_string(),
            author: self.author.to_string(),
            language: self.language.to_string(),
            pages: self.pages,
            publisher: self.publisher.to_string(),
            title: self.title.to_string(),
            year: self.year,
        }
    }
}

impl From<&BookDto> for AddBookCommandRequest {
    fn from(book: &BookDto) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            amazon_url: book.amazon_url.to_string(),
            author: book.author.to_string(),
            language: book.language.to_string(),
            pages: book.pages,
            publisher: book.publisher.to_string(),
            title: book.title.to_string(),
            year: book.year,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
