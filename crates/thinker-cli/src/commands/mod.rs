pub mod export;
pub mod session;
pub mod thought;

/// Splits a comma-separated tag list, trimming entries and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("email, admin ,,urgent"), ["email", "admin", "urgent"]);
        assert!(parse_tags(" , ").is_empty());
    }
}
