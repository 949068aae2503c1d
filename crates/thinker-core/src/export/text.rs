use super::grouped_by_category;
use crate::session::Session;
use crate::timestamp;
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Plain-text rendering of a session.
pub struct TextReport<'a>(pub &'a Session);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "Thinking Session: {}", session.title())?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        if !session.description().is_empty() {
            writeln!(f, "Description: {}", session.description())?;
            writeln!(f)?;
        }

        writeln!(f, "Created: {}", timestamp::to_seconds(session.created_at()))?;
        writeln!(f, "Updated: {}", timestamp::to_seconds(session.updated_at()))?;
        writeln!(f, "Total Thoughts: {}", session.thoughts().len())?;
        writeln!(f)?;

        for (category, thoughts) in grouped_by_category(session) {
            writeln!(f)?;
            writeln!(f, "{}", category.to_uppercase())?;
            writeln!(f, "{}", "-".repeat(category.chars().count()))?;
            writeln!(f)?;

            for thought in thoughts {
                let status = if thought.is_completed() { "[✓]" } else { "[ ]" };
                writeln!(f, "{} {}", status, thought.content())?;
                writeln!(
                    f,
                    "    Priority: {} | Tags: {}",
                    "★".repeat(thought.priority().value() as usize),
                    thought.tags().join(", ")
                )?;
                writeln!(f, "    Created: {}", timestamp::to_seconds(thought.created_at()))?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Renders `session` as a plain-text report.
pub fn export_text(session: &Session) -> String {
    TextReport(session).to_string()
}
