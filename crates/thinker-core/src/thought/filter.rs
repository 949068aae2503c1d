//! Read-only filtering and ordering of thoughts.

use super::model::Thought;

/// Criteria for listing thoughts.
///
/// An empty `category` string behaves like no category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThoughtFilter {
    /// Case-insensitive category match
    pub category: Option<String>,
    /// Match only completed (`true`) or open (`false`) thoughts
    pub completed: Option<bool>,
}

impl ThoughtFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn matches(&self, thought: &Thought) -> bool {
        let category_ok = match self.category.as_deref() {
            Some(category) if !category.is_empty() => {
                thought.category().to_lowercase() == category.to_lowercase()
            }
            _ => true,
        };
        let completed_ok = self
            .completed
            .map_or(true, |completed| thought.is_completed() == completed);
        category_ok && completed_ok
    }
}

/// Returns the thoughts ordered by priority, highest first.
///
/// The sort is stable, so thoughts of equal priority keep their relative order.
/// The input sequence is not modified.
pub fn by_priority<'a, I>(thoughts: I) -> Vec<&'a Thought>
where
    I: IntoIterator<Item = &'a Thought>,
{
    let mut sorted: Vec<&Thought> = thoughts.into_iter().collect();
    sorted.sort_by(|a, b| b.priority().cmp(&a.priority()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thought::ThoughtDraft;
    use crate::timestamp;

    fn thought(id: &str, category: &str, priority: i64, completed: bool) -> Thought {
        let mut thought = Thought::new(
            id.to_string(),
            ThoughtDraft::new(format!("thought {id}"))
                .with_category(category)
                .with_priority(priority),
            timestamp::now(),
        )
        .unwrap();
        if completed {
            thought.complete(timestamp::now());
        }
        thought
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let filter = ThoughtFilter::new().category("IDEAS");
        assert!(filter.matches(&thought("a", "ideas", 3, false)));
        assert!(filter.matches(&thought("b", "Ideas", 3, true)));
        assert!(!filter.matches(&thought("c", "goals", 3, false)));
    }

    #[test]
    fn test_empty_category_filter_matches_everything() {
        let filter = ThoughtFilter::new().category("");
        assert!(filter.matches(&thought("a", "anything", 1, false)));
    }

    #[test]
    fn test_completed_filter() {
        let open = ThoughtFilter::new().completed(false);
        let done = ThoughtFilter::new().completed(true);
        let finished = thought("a", "general", 3, true);
        assert!(done.matches(&finished));
        assert!(!open.matches(&finished));
    }

    #[test]
    fn test_by_priority_is_stable_and_descending() {
        let thoughts = vec![
            thought("a", "general", 2, false),
            thought("b", "general", 5, false),
            thought("c", "general", 2, false),
            thought("d", "general", 5, false),
            thought("e", "general", 3, false),
        ];
        let ids: Vec<&str> = by_priority(&thoughts).into_iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["b", "d", "e", "a", "c"]);
        // source order untouched
        assert_eq!(thoughts[0].id(), "a");
    }
}
