use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) const BOOK_DELETED: &str = "Book deleted";

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_DELETED.to_string(),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Environment};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = factory::create_catalog_service(&Configuration::new(Environment::Test)).await.expect("should build service");
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc);

        let book = BookDto::new("7777777", "Ozymandias", "Percy Shelly", 1, 1888);
        let _ = add_cmd.execute(AddBookCommandRequest::from(&book))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn.to_string())).await.expect("should remove book");
        assert_eq!("Book deleted", res.message);

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
