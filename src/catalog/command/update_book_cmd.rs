use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn always comes from the request path; a body isbn never renames a record
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl UpdateBookCommandRequest {
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

impl From<&BookDto> for UpdateBookCommandRequest {
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
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Environment};

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::new(Environment::Test)).await.expect("should build service");
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let mut book = BookDto::new("7777777", "Ozymandias", "Percy Shelly", 1, 1888);
        let _ = add_cmd.execute(AddBookCommandRequest::from(&book))
                                    .await.expect("should add book");
        book.title = "Swimming".to_string();
        book.author = "Mac Miller".to_string();
        let res = update_cmd.execute(UpdateBookCommandRequest::from(&book)).await.expect("should update book");
        assert_eq!(book, res.book);
    }

    #[tokio::test]
    async fn test_should_fail_update_missing_book() {
        let svc = factory::create_catalog_service(&Configuration::new(Environment::Test)).await.expect("should build service");
        let update_cmd = UpdateBookCommand::new(svc);

        let book = BookDto::new("missing", "Nothing", "Nobody", 1, 1900);
        let res = update_cmd.execute(UpdateBookCommandRequest::from(&book)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
