//! The session store.
//!
//! `Store` owns every session and thought, tracks the current session, and
//! mediates every mutation so that ids stay unique and `updated_at`
//! timestamps stay in step between a thought and its session.

use crate::error::{Result, ThinkerError};
use crate::session::{Session, SessionRepository, SessionSummary};
use crate::thought::{Thought, ThoughtDraft, ThoughtFilter, ThoughtUpdate, by_priority};
use crate::timestamp;
use std::collections::HashSet;
use uuid::Uuid;

const SESSION: &str = "Session";
const THOUGHT: &str = "Thought";

/// Result of [`Store::load`].
///
/// Loading never fails outright: an unreadable or corrupt data file leaves
/// the store empty and reports the reason so the caller can warn the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sessions were read from storage
    Loaded { sessions: usize },
    /// Nothing was stored yet; the store is empty
    Missing,
    /// Stored data could not be used; the store was reset to empty
    Reset { error: ThinkerError },
}

/// In-memory owner of all sessions.
///
/// The current session is held as an id, never as an owning reference, and
/// always names a session that is present.
#[derive(Debug, Default, Clone)]
pub struct Store {
    sessions: Vec<Session>,
    current: Option<String>,
}

impl Store {
    /// Creates an empty store with no current session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from decoded sessions, validating every record.
    ///
    /// Fails with a validation error on blank titles or content, unparsable
    /// timestamps, or duplicate ids.
    pub fn from_sessions(sessions: Vec<Session>) -> Result<Self> {
        let mut seen = HashSet::new();
        for session in &sessions {
            session.validate()?;
            if !seen.insert(session.id()) {
                return Err(ThinkerError::validation(format!(
                    "duplicate session id '{}'",
                    session.id()
                )));
            }
        }
        Ok(Self {
            sessions,
            current: None,
        })
    }

    // ============================================================================
    // Sessions
    // ============================================================================

    /// All sessions in insertion order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == session_id)
    }

    pub fn current_session_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_deref().and_then(|id| self.session(id))
    }

    /// Creates a session and makes it current.
    pub fn create_session(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Session> {
        let id = unique_id(self.sessions.iter().map(|s| s.id()));
        let session = Session::new(id.clone(), title.into(), description.into(), timestamp::now())?;
        self.sessions.push(session);
        self.current = Some(id);
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    /// Makes the session with `session_id` current. No data changes.
    pub fn select_session(&mut self, session_id: &str) -> Result<&Session> {
        let index = self
            .session_index(session_id)
            .ok_or_else(|| ThinkerError::not_found(SESSION, session_id))?;
        self.current = Some(session_id.to_string());
        Ok(&self.sessions[index])
    }

    /// Clears the current-session pointer.
    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    /// Removes a session and returns it, clearing the selection if it was current.
    pub fn delete_session(&mut self, session_id: &str) -> Result<Session> {
        let index = self
            .session_index(session_id)
            .ok_or_else(|| ThinkerError::not_found(SESSION, session_id))?;
        let removed = self.sessions.remove(index);
        if self.current.as_deref() == Some(session_id) {
            self.current = None;
        }
        Ok(removed)
    }

    /// Overview of every session, in insertion order.
    pub fn session_summaries(&self) -> Vec<SessionSummary> {
        self.sessions
            .iter()
            .map(|s| SessionSummary::of(s, self.current.as_deref() == Some(s.id())))
            .collect()
    }

    // ============================================================================
    // Thoughts (all act on the current session)
    // ============================================================================

    /// Adds a thought to the current session.
    pub fn add_thought(&mut self, draft: ThoughtDraft) -> Result<&Thought> {
        let session = self.current_session_mut()?;
        let id = unique_id(session.thoughts.iter().map(|t| t.id()));
        let now = timestamp::now();
        let thought = Thought::new(id, draft, now.clone())?;
        session.thoughts.push(thought);
        session.touch(now);
        Ok(&session.thoughts[session.thoughts.len() - 1])
    }

    /// Marks a thought completed. Completing it again is a no-op success.
    pub fn complete_thought(&mut self, thought_id: &str) -> Result<&Thought> {
        let session = self.current_session_mut()?;
        let now = timestamp::now();
        let thought = session
            .thought_mut(thought_id)
            .ok_or_else(|| ThinkerError::not_found(THOUGHT, thought_id))?;
        if !thought.is_completed() {
            thought.complete(now.clone());
            session.touch(now);
        }
        session
            .thought(thought_id)
            .ok_or_else(|| ThinkerError::not_found(THOUGHT, thought_id))
    }

    /// Edits content, category, priority, or tags of a thought.
    ///
    /// An empty update changes nothing, timestamps included.
    pub fn update_thought(&mut self, thought_id: &str, update: ThoughtUpdate) -> Result<&Thought> {
        let session = self.current_session_mut()?;
        let thought = session
            .thought_mut(thought_id)
            .ok_or_else(|| ThinkerError::not_found(THOUGHT, thought_id))?;
        if !update.is_empty() {
            let now = timestamp::now();
            thought.apply(update, now.clone())?;
            session.touch(now);
        }
        session
            .thought(thought_id)
            .ok_or_else(|| ThinkerError::not_found(THOUGHT, thought_id))
    }

    /// Removes a thought from the current session and returns it.
    pub fn delete_thought(&mut self, thought_id: &str) -> Result<Thought> {
        let session = self.current_session_mut()?;
        let index = session
            .thoughts
            .iter()
            .position(|t| t.id() == thought_id)
            .ok_or_else(|| ThinkerError::not_found(THOUGHT, thought_id))?;
        let removed = session.thoughts.remove(index);
        session.touch(timestamp::now());
        Ok(removed)
    }

    /// Snapshot of the current session's thoughts matching `filter`, highest
    /// priority first. Stored order is left untouched.
    pub fn list_thoughts(&self, filter: &ThoughtFilter) -> Result<Vec<Thought>> {
        let session = self.current_session().ok_or(ThinkerError::NoActiveSession)?;
        let matching = session.thoughts().iter().filter(|t| filter.matches(t));
        Ok(by_priority(matching).into_iter().cloned().collect())
    }

    // ============================================================================
    // Persistence
    // ============================================================================

    /// Replaces the in-memory state with what `repository` holds.
    ///
    /// The current session is always cleared. On any read, decode, or
    /// validation failure the store is reset to empty and the error is
    /// returned inside [`LoadOutcome::Reset`]; unsaved data previously held
    /// in memory is discarded in every case.
    pub fn load(&mut self, repository: &dyn SessionRepository) -> LoadOutcome {
        self.current = None;
        let loaded = repository
            .load_all()
            .and_then(|stored| stored.map(Self::from_sessions).transpose());

        match loaded {
            Ok(Some(store)) => {
                self.sessions = store.sessions;
                LoadOutcome::Loaded {
                    sessions: self.sessions.len(),
                }
            }
            Ok(None) => {
                self.sessions.clear();
                LoadOutcome::Missing
            }
            Err(error) => {
                self.sessions.clear();
                let error = match error {
                    ThinkerError::Persistence { .. } => error,
                    other => ThinkerError::persistence(other.to_string()),
                };
                LoadOutcome::Reset { error }
            }
        }
    }

    /// Writes every session to `repository`.
    pub fn save(&self, repository: &dyn SessionRepository) -> Result<()> {
        repository.save_all(&self.sessions)
    }

    fn session_index(&self, session_id: &str) -> Option<usize> {
        self.sessions.iter().position(|s| s.id() == session_id)
    }

    fn current_session_mut(&mut self) -> Result<&mut Session> {
        let current = self.current.as_deref().ok_or(ThinkerError::NoActiveSession)?;
        self.sessions
            .iter_mut()
            .find(|s| s.id() == current)
            .ok_or(ThinkerError::NoActiveSession)
    }
}

/// Generates a short id (first 8 characters of a v4 UUID) not in `taken`.
fn unique_id<'a>(taken: impl Iterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = taken.collect();
    loop {
        let candidate = Uuid::new_v4().simple().to_string()[..8].to_string();
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}
