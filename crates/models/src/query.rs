use serde_json::Value;

use crate::codec::Document;

pub const ID: &str = "id";

/// Conjunction of exact field matches against top-level document keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self { Self::default() }

    pub fn by_id(id: &str) -> Self { Self::new().eq(ID, id) }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.clauses.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.iter().all(|(field, value)| doc.get(field) == Some(value))
    }
}
