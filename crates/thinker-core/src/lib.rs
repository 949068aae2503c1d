//! Domain core of Thinker: sessions of prioritized, tagged thoughts, the
//! `Store` that owns and mutates them, and the report exporters.
//!
//! This crate performs no I/O of its own. Persistence goes through the
//! [`session::SessionRepository`] trait; file-backed implementations live in
//! `thinker-infrastructure`.

pub mod config;
pub mod error;
pub mod export;
pub mod session;
pub mod store;
pub mod thought;
pub mod timestamp;

// Re-export common types
pub use error::{Result, ThinkerError};
pub use export::{ExportFormat, export_markdown, export_text};
pub use session::{Session, SessionRepository, SessionSummary};
pub use store::{LoadOutcome, Store};
pub use thought::{Priority, Thought, ThoughtDraft, ThoughtFilter, ThoughtUpdate};
