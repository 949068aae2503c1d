pub mod config_service;
pub mod export_writer;
pub mod json_session_repository;
pub mod paths;
pub mod state_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::export_writer::{write_export, write_export_at};
pub use crate::json_session_repository::JsonSessionRepository;
pub use crate::paths::ThinkerPaths;
pub use crate::state_repository::{JsonStateRepository, SelectionState};
