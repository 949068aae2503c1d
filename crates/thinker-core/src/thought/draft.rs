//! Input types for creating and editing thoughts.

use super::model::DEFAULT_CATEGORY;

/// The caller-supplied fields of a new thought.
///
/// Defaults mirror the tool's behavior: category `"general"`, priority 3,
/// no tags. Priority is clamped to 1..=5 when the thought is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtDraft {
    pub content: String,
    pub category: String,
    pub priority: i64,
    pub tags: Vec<String>,
}

impl ThoughtDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: DEFAULT_CATEGORY.to_string(),
            priority: 3,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A partial edit of an existing thought. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThoughtUpdate {
    pub content: Option<String>,
    pub category: Option<String>,
    pub priority: Option<i64>,
    pub tags: Option<Vec<String>>,
}

impl ThoughtUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }
}
