use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Ordering of the index, remembered per session once picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Case-insensitive by name
    Abc,
    /// Oldest modification first
    Date,
}

/// Order `documents` for display. With no mode the directory
///  enumeration order is kept as is.
///
/// Both sorts are stable, so ties keep enumeration order.
pub fn sort_documents(documents: &mut [Document], mode: Option<SortMode>) {
    match mode {
        Some(SortMode::Abc) => documents.sort_by_key(|doc| doc.name.to_lowercase()),
        Some(SortMode::Date) => documents.sort_by_key(|doc| doc.modified),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    fn doc(name: &str, age_secs: u64) -> Document {
        Document {
            name: name.to_string(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 - age_secs),
        }
    }

    fn names(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_abc_ignores_case() {
        let mut docs = vec![doc("changes.txt", 0), doc("About.md", 0), doc("b.md", 0)];
        sort_documents(&mut docs, Some(SortMode::Abc));
        assert_eq!(names(&docs), ["About.md", "b.md", "changes.txt"]);
    }

    #[test]
    fn test_date_is_oldest_first() {
        let mut docs = vec![doc("new.md", 10), doc("old.md", 300), doc("mid.md", 100)];
        sort_documents(&mut docs, Some(SortMode::Date));
        assert_eq!(names(&docs), ["old.md", "mid.md", "new.md"]);
    }

    #[test]
    fn test_no_mode_keeps_order() {
        let mut docs = vec![doc("z.md", 0), doc("a.md", 5)];
        sort_documents(&mut docs, None);
        assert_eq!(names(&docs), ["z.md", "a.md"]);
    }

    #[test]
    fn test_serde_names() {
        let abc: SortMode = parse_mode("abc");
        assert_eq!(abc, SortMode::Abc);
        let date: SortMode = parse_mode("date");
        assert_eq!(date, SortMode::Date);
    }

    // toml needs a table, so wrap the bare value in one
    fn parse_mode(value: &str) -> SortMode {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: SortMode,
        }
        let wrapper: Wrapper = toml::from_str(&format!("mode = \"{}\"", value)).unwrap();
        wrapper.mode
    }
}
