use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ids are UUIDv7 strings: unique and time-ordered, so insertion order and
/// id order agree for records created by the running process. Seed records
/// use short literal ids instead.
fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truth {
    pub id: String,
    pub truth: String,
    pub author_id: String,
}

impl Truth {
    pub fn new(truth: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            truth: truth.into(),
            author_id: author_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dare {
    pub id: String,
    pub dare: String,
    pub author_id: String,
}

impl Dare {
    pub fn new(dare: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            dare: dare.into(),
            author_id: author_id.into(),
        }
    }
}
