use serde::{Deserialize, Serialize};

// BookEntity is a row of the books table, keyed by isbn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

#[cfg(test)]
impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, pages: i32, year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            amazon_url: format!("http://a.co/{}", isbn),
            author: author.to_string(),
            language: "english".to_string(),
            pages,
            publisher: "Princeton University Press".to_string(),
            title: title.to_string(),
            year,
        }
    }
}
