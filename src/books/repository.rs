pub mod sql_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository is the persistence capability set for books keyed by isbn
pub(crate) trait BookRepository: Repository<BookEntity> {}
