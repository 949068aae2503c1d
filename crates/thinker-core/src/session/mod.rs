//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `SessionSummary`)
//! - `repository`: Repository trait for session persistence

mod model;
mod repository;

pub use model::{Session, SessionSummary};
pub use repository::SessionRepository;
