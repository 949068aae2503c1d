//! Low-level file storage.
//!
//! - `atomic_file`: whole-file replace via temp file + rename, advisory locks
//! - `atomic_json`: typed JSON documents on top of `atomic_file`

pub mod atomic_file;
pub mod atomic_json;

pub use atomic_file::{FileLock, write_atomically};
pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
