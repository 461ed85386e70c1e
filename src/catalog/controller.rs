use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use crate::books::validator;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};
use crate::core::library::LibraryError;

pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: axum::body::HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<axum::BoxError>,
{
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/", get(list_books).post(add_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .with_state(state)
}

fn json_body(json: Result<Json<Value>, JsonRejection>) -> Result<Value, ServerError> {
    json.map(|Json(value)| value)
        .map_err(|rejection| ServerError::new(rejection.status(), rejection.body_text().as_str()))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn);
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let payload = validator::validate_new_book(&json_body(json)?)?;
    let req: AddBookCommandRequest = serde_json::from_value(payload).map_err(LibraryError::from)?;
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut payload = validator::validate_book_update(&json_body(json)?)?;
    if let Value::Object(ref mut fields) = payload {
        fields.insert("isbn".to_string(), Value::String(isbn));
    }
    let req: UpdateBookCommandRequest = serde_json::from_value(payload).map_err(LibraryError::from)?;
    let res = UpdateBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn);
    let res = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}
