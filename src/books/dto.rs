use serde::{Deserialize, Serialize};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
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
impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, pages: i32, year: i32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            amazon_url: "http://a.co/eobPtX2".to_string(),
            author: author.to_string(),
            language: "english".to_string(),
            pages,
            publisher: "Scholastic".to_string(),
            title: title.to_string(),
            year,
        }
    }
}
