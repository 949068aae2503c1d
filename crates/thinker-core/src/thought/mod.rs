//! Thought domain module.
//!
//! - `model`: the `Thought` entity and its `Priority`
//! - `draft`: input types for creating (`ThoughtDraft`) and editing (`ThoughtUpdate`)
//! - `filter`: read-only filtering (`ThoughtFilter`) and priority ordering

mod draft;
mod filter;
mod model;

pub use draft::{ThoughtDraft, ThoughtUpdate};
pub use filter::{ThoughtFilter, by_priority};
pub use model::{DEFAULT_CATEGORY, Priority, Thought};
