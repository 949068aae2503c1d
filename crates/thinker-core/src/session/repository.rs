//! Session repository trait.
//!
//! Defines the interface for whole-collection session persistence.

use super::model::Session;
use crate::error::Result;

/// An abstract repository for persisting the full list of sessions.
///
/// This trait decouples the `Store` from the storage mechanism (a JSON file
/// on disk in production, an in-memory vector in tests). Persistence has
/// whole-file replace semantics: every save writes every session.
pub trait SessionRepository {
    /// Loads every stored session in insertion order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(sessions))`: Sessions were read and decoded
    /// - `Ok(None)`: Nothing has been stored yet
    /// - `Err(_)`: The data could not be read or decoded
    fn load_all(&self) -> Result<Option<Vec<Session>>>;

    /// Replaces the stored collection with `sessions`.
    ///
    /// Implementations must never leave a partially written collection
    /// visible to a subsequent `load_all`.
    fn save_all(&self, sessions: &[Session]) -> Result<()>;
}
