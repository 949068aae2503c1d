use super::grouped_by_category;
use crate::session::Session;
use crate::timestamp;
use std::fmt;

/// Markdown rendering of a session: headings per category and a checkbox
/// list item per thought.
pub struct MarkdownReport<'a>(pub &'a Session);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "# {}", session.title())?;
        writeln!(f)?;

        if !session.description().is_empty() {
            writeln!(f, "**Description:** {}", session.description())?;
            writeln!(f)?;
        }

        writeln!(f, "- **Created:** {}", timestamp::to_seconds(session.created_at()))?;
        writeln!(f, "- **Updated:** {}", timestamp::to_seconds(session.updated_at()))?;
        writeln!(f, "- **Total Thoughts:** {}", session.thoughts().len())?;
        writeln!(f)?;

        for (category, thoughts) in grouped_by_category(session) {
            writeln!(f)?;
            writeln!(f, "## {}", title_case(category))?;
            writeln!(f)?;

            for thought in thoughts {
                let checkbox = if thought.is_completed() { "- [x]" } else { "- [ ]" };
                writeln!(f, "{} **{}**", checkbox, thought.content())?;
                writeln!(
                    f,
                    "  - Priority: {}",
                    "⭐".repeat(thought.priority().value() as usize)
                )?;
                if !thought.tags().is_empty() {
                    writeln!(f, "  - Tags: {}", thought.tags().join(", "))?;
                }
                writeln!(f, "  - Created: {}", timestamp::to_seconds(thought.created_at()))?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Renders `session` as a markdown report.
pub fn export_markdown(session: &Session) -> String {
    MarkdownReport(session).to_string()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest,
/// so `"next steps"` becomes `"Next Steps"` and `"to-do"` becomes `"To-Do"`.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }
    result
}
