//! Session domain model.
//!
//! This module contains the core Session entity that groups thoughts and is
//! exported as a unit.

use crate::error::{Result, ThinkerError};
use crate::thought::Thought;
use crate::timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered collection of thoughts.
///
/// A session exclusively owns its thoughts; their order is creation order and
/// is never changed by listing or exporting. Serialized field names match the
/// persisted data file format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Short unique identifier (unique within the store)
    pub(crate) id: String,
    /// Human-readable session title, never blank
    pub(crate) title: String,
    /// Optional free-form description (may be empty)
    pub(crate) description: String,
    pub(crate) thoughts: Vec<Thought>,
    /// Timestamp when the session was created (ISO 8601 format)
    pub(crate) created_at: String,
    /// Timestamp when the session or any of its thoughts last changed (ISO 8601 format)
    pub(crate) updated_at: String,
}

impl Session {
    pub(crate) fn new(id: String, title: String, description: String, now: String) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(ThinkerError::validation("session title must not be empty"));
        }
        Ok(Self {
            id,
            title,
            description,
            thoughts: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Thoughts in insertion order.
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn thought(&self, thought_id: &str) -> Option<&Thought> {
        self.thoughts.iter().find(|t| t.id() == thought_id)
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn completed_count(&self) -> usize {
        self.thoughts.iter().filter(|t| t.is_completed()).count()
    }

    pub(crate) fn thought_mut(&mut self, thought_id: &str) -> Option<&mut Thought> {
        self.thoughts.iter_mut().find(|t| t.id() == thought_id)
    }

    pub(crate) fn touch(&mut self, now: String) {
        self.updated_at = now;
    }

    /// Checks a record that was decoded rather than constructed.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ThinkerError::validation("session id must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(ThinkerError::validation(format!(
                "session '{}' has an empty title",
                self.id
            )));
        }
        for (field, value) in [("created_at", &self.created_at), ("updated_at", &self.updated_at)] {
            if timestamp::parse(value).is_none() {
                return Err(ThinkerError::validation(format!(
                    "session '{}' has invalid {}: '{}'",
                    self.id, field, value
                )));
            }
        }

        let mut seen = HashSet::new();
        for thought in &self.thoughts {
            thought.validate()?;
            if !seen.insert(thought.id()) {
                return Err(ThinkerError::validation(format!(
                    "session '{}' contains duplicate thought id '{}'",
                    self.id,
                    thought.id()
                )));
            }
        }
        Ok(())
    }
}

/// A one-line overview of a session for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thought_count: usize,
    pub completed_count: usize,
    pub created_at: String,
    /// Whether this is the store's current session
    pub is_current: bool,
}

impl SessionSummary {
    pub(crate) fn of(session: &Session, is_current: bool) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            description: session.description.clone(),
            thought_count: session.thoughts.len(),
            completed_count: session.completed_count(),
            created_at: session.created_at.clone(),
            is_current,
        }
    }
}
