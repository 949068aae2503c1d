//! Thought domain model.
//!
//! A `Thought` is a single note record. Its fields are crate-private so that
//! every mutation goes through the `Store`, which keeps timestamps and the
//! owning session in step.

use super::draft::{ThoughtDraft, ThoughtUpdate};
use crate::error::{Result, ThinkerError};
use crate::timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned when none (or a blank one) is given.
pub const DEFAULT_CATEGORY: &str = "general";

/// Thought priority on a 1 (low) to 5 (high) scale.
///
/// Any integer is clamped into range, both when constructed and when decoded
/// from a data file. Non-integer values still fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Clamps any integer into `[MIN, MAX]`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-entered note.
///
/// Serialized field names match the persisted data file format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    /// Short unique identifier (unique within the owning session)
    pub(crate) id: String,
    /// Note text, never blank
    pub(crate) content: String,
    /// Free-form grouping label
    pub(crate) category: String,
    pub(crate) priority: Priority,
    /// Labels in insertion order; duplicates allowed
    pub(crate) tags: Vec<String>,
    /// Creation timestamp (ISO 8601), immutable
    pub(crate) created_at: String,
    /// Last mutation timestamp (ISO 8601)
    pub(crate) updated_at: String,
    #[serde(default)]
    pub(crate) is_completed: bool,
}

impl Thought {
    /// Builds a new thought from a draft, validating its content.
    pub(crate) fn new(id: String, draft: ThoughtDraft, now: String) -> Result<Self> {
        let content = require_content(draft.content)?;
        Ok(Self {
            id,
            content,
            category: normalize_category(draft.category),
            priority: Priority::clamped(draft.priority),
            tags: draft.tags,
            created_at: now.clone(),
            updated_at: now,
            is_completed: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub(crate) fn complete(&mut self, now: String) {
        self.is_completed = true;
        self.updated_at = now;
    }

    /// Applies an edit. Nothing is changed if the new content is blank.
    pub(crate) fn apply(&mut self, update: ThoughtUpdate, now: String) -> Result<()> {
        let content = update.content.map(require_content).transpose()?;
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = update.category {
            self.category = normalize_category(category);
        }
        if let Some(priority) = update.priority {
            self.priority = Priority::clamped(priority);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Checks a record that was decoded rather than constructed.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ThinkerError::validation("thought id must not be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(ThinkerError::validation(format!(
                "thought '{}' has empty content",
                self.id
            )));
        }
        for (field, value) in [("created_at", &self.created_at), ("updated_at", &self.updated_at)] {
            if timestamp::parse(value).is_none() {
                return Err(ThinkerError::validation(format!(
                    "thought '{}' has invalid {}: '{}'",
                    self.id, field, value
                )));
            }
        }
        Ok(())
    }
}

fn require_content(content: String) -> Result<String> {
    if content.trim().is_empty() {
        Err(ThinkerError::validation("thought content must not be empty"))
    } else {
        Ok(content)
    }
}

fn normalize_category(category: String) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}
