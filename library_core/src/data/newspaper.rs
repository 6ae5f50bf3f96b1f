use chrono::{DateTime, Utc};

/// A newspaper issue. Both fields are fixed at construction. Newspapers never
/// carry a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Newspaper {
    name: String,
    /// When this issue was published.
    date: DateTime<Utc>,
}

impl Newspaper {
    pub fn new(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Newspaper { name: name.into(), date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
