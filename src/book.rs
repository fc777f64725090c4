use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A persisted book. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Payload for creating a book.
///
/// An `id` sent by the client is ignored, the store always assigns one.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

impl NewBook {
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
        }
    }
}
