use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::{json, Map, Value};
use crate::core::library::{LibraryError, LibraryResult};

const BOOK_FIELDS: [&str; 8] = ["isbn", "amazon_url", "author", "language", "pages", "publisher", "title", "year"];

lazy_static! {
    static ref NEW_BOOK_SCHEMA: JSONSchema = compile_book_schema(true);
    static ref BOOK_UPDATE_SCHEMA: JSONSchema = compile_book_schema(false);
}

fn book_schema(require_isbn: bool) -> Value {
    let mut required: Vec<&str> = BOOK_FIELDS.iter()
        .copied()
        .filter(|f| *f != "isbn")
        .collect();
    if require_isbn {
        required.insert(0, "isbn");
    }
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": required,
        "properties": {
            "isbn": { "type": "string" },
            "amazon_url": { "type": "string" },
            "author": { "type": "string" },
            "language": { "type": "string" },
            "pages": { "type": "integer", "minimum": 1, "maximum": i32::MAX },
            "publisher": { "type": "string" },
            "title": { "type": "string" },
            "year": { "type": "integer", "minimum": i32::MIN, "maximum": i32::MAX }
        }
    })
}

fn compile_book_schema(require_isbn: bool) -> JSONSchema {
    JSONSchema::compile(&book_schema(require_isbn)).expect("book schema is a valid draft-07 document")
}

/// Checks a payload for a new book: all eight fields, isbn included.
pub(crate) fn validate_new_book(payload: &Value) -> LibraryResult<Value> {
    validate(&NEW_BOOK_SCHEMA, payload)
}

/// Checks a payload for a book update. The isbn comes from the path, so it is optional here.
pub(crate) fn validate_book_update(payload: &Value) -> LibraryResult<Value> {
    validate(&BOOK_UPDATE_SCHEMA, payload)
}

// Collects every violation instead of stopping at the first one, then keeps only known fields.
fn validate(schema: &JSONSchema, payload: &Value) -> LibraryResult<Value> {
    let obj = match payload {
        Value::Object(obj) => obj,
        _ => {
            return Err(LibraryError::validation(
                "invalid book payload", vec!["payload must be an object".to_string()]));
        }
    };
    if let Err(errors) = schema.validate(payload) {
        let violations: Vec<String> = errors.map(|err| {
            let path = err.instance_path.to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{}: {}", path, err)
            }
        }).collect();
        return Err(LibraryError::validation("invalid book payload", violations));
    }
    let normalized: Map<String, Value> = obj.iter()
        .filter(|(k, _)| BOOK_FIELDS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(Value::Object(normalized))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::books::validator::{validate_book_update, validate_new_book};
    use crate::core::library::LibraryError;

    fn valid_payload() -> Value {
        json!({
            "isbn": "88888888",
            "amazon_url": "http://a.co/eobPtX2",
            "author": "Mac Miller",
            "language": "pure poetry",
            "pages": 13,
            "publisher": "Warner Records Inc",
            "title": "Swimming",
            "year": 2018
        })
    }

    fn violations(res: Result<Value, LibraryError>) -> Vec<String> {
        match res {
            Err(LibraryError::Validation { violations, .. }) => violations,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_accept_valid_book() {
        let normalized = validate_new_book(&valid_payload()).expect("should validate");
        assert_eq!(valid_payload(), normalized);
    }

    #[tokio::test]
    async fn test_should_reject_each_missing_field() {
        for field in ["amazon_url", "author", "language", "pages", "publisher", "title", "year"] {
            let mut payload = valid_payload();
            payload.as_object_mut().expect("object").remove(field);
            let found = violations(validate_new_book(&payload));
            assert_eq!(1, found.len(), "{:?}", found);
            assert!(found[0].contains(field), "{:?}", found);

            let found = violations(validate_book_update(&payload));
            assert_eq!(1, found.len(), "{:?}", found);
        }
    }

    #[tokio::test]
    async fn test_should_report_all_violations() {
        let payload = json!({
            "isbn": "88888888",
            "author": null,
            "pages": "thirteen",
            "title": "Swimming",
            "year": 2018
        });
        let found = violations(validate_new_book(&payload));
        // missing amazon_url, language, publisher; null author; string pages
        assert_eq!(5, found.len(), "{:?}", found);
        assert!(found.iter().any(|v| v.starts_with("/pages")));
        assert!(found.iter().any(|v| v.starts_with("/author")));
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_pages() {
        let mut payload = valid_payload();
        payload["pages"] = json!(0);
        let found = violations(validate_new_book(&payload));
        assert_eq!(1, found.len());
        assert!(found[0].starts_with("/pages"));
    }

    #[tokio::test]
    async fn test_should_reject_integers_outside_i32() {
        let mut payload = valid_payload();
        payload["pages"] = json!(4294967296_i64);
        payload["year"] = json!(99999999999_i64);
        let found = violations(validate_new_book(&payload));
        assert_eq!(2, found.len(), "{:?}", found);
        assert!(found.iter().any(|v| v.starts_with("/pages")));
        assert!(found.iter().any(|v| v.starts_with("/year")));

        let mut payload = valid_payload();
        payload["year"] = json!(-2147483649_i64);
        assert_eq!(1, violations(validate_book_update(&payload)).len());

        payload["year"] = json!(i32::MIN);
        payload["pages"] = json!(i32::MAX);
        assert!(validate_book_update(&payload).is_ok());
    }

    #[tokio::test]
    async fn test_should_require_isbn_only_for_new_books() {
        let mut payload = valid_payload();
        payload.as_object_mut().expect("object").remove("isbn");
        let found = violations(validate_new_book(&payload));
        assert!(found[0].contains("isbn"));

        let normalized = validate_book_update(&payload).expect("should validate update");
        assert!(normalized.get("isbn").is_none());
    }

    #[tokio::test]
    async fn test_should_drop_unknown_fields() {
        let mut payload = valid_payload();
        payload["rating"] = json!(5);
        let normalized = validate_new_book(&payload).expect("should validate");
        assert!(normalized.get("rating").is_none());
        assert_eq!(valid_payload(), normalized);
    }

    #[tokio::test]
    async fn test_should_reject_non_object_payload() {
        let found = violations(validate_new_book(&json!(["not", "a", "book"])));
        assert_eq!(vec!["payload must be an object".to_string()], found);
    }
}
