//! Session report rendering.
//!
//! Exporters are pure functions of a `Session` snapshot: they never touch the
//! `Store` and never write files. Choosing a destination is up to the caller.
//!
//! Both formats share one layout: a header block, then one block per
//! category in first-seen order, each block's thoughts sorted by priority
//! (highest first, ties in insertion order).

mod markdown;
mod text;

pub use markdown::{MarkdownReport, export_markdown};
pub use text::{TextReport, export_text};

use crate::error::{Result, ThinkerError};
use crate::session::Session;
use crate::thought::{Thought, by_priority};
use chrono::NaiveDateTime;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    #[strum(to_string = "txt", serialize = "text")]
    Text,
    #[strum(to_string = "md", serialize = "markdown")]
    Markdown,
}

impl ExportFormat {
    /// Parses `txt` or `md` (also `text` / `markdown`).
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            ThinkerError::validation(format!(
                "unsupported export format '{}', use 'txt' or 'md'",
                value
            ))
        })
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }

    /// Renders `session` in this format.
    pub fn render(self, session: &Session) -> String {
        match self {
            Self::Text => export_text(session),
            Self::Markdown => export_markdown(session),
        }
    }
}

/// Default file name for an export created at `at`:
/// `thinking_session_<session-id>_<YYYYmmdd_HHMMSS>.<ext>`.
pub fn export_file_name(session: &Session, format: ExportFormat, at: NaiveDateTime) -> String {
    format!(
        "thinking_session_{}_{}.{}",
        session.id(),
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Groups thoughts by exact category in first-seen order, each group sorted
/// by priority.
pub(crate) fn grouped_by_category(session: &Session) -> Vec<(&str, Vec<&Thought>)> {
    let mut groups: Vec<(&str, Vec<&Thought>)> = Vec::new();
    for thought in session.thoughts() {
        match groups.iter_mut().find(|(category, _)| *category == thought.category()) {
            Some((_, members)) => members.push(thought),
            None => groups.push((thought.category(), vec![thought])),
        }
    }
    groups
        .into_iter()
        .map(|(category, members)| (category, by_priority(members)))
        .collect()
}
