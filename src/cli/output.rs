//! Output formatting utilities

use crate::domain::{Entry, EntryCollection};

/// Format the entry collection for display, newest first
pub fn format_entry_list(collection: &EntryCollection) -> String {
    if collection.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for entry in collection.iter() {
        output.push_str(&format!(
            "{}  {}  {}\n",
            entry.taken_at_display(),
            entry.id,
            entry.caption
        ));
    }
    output
}

/// Format a single entry for display
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "id:      {}\n\
         taken:   {}\n\
         caption: {}\n\
         image:   {} base64 chars\n",
        entry.id,
        entry.taken_at_display(),
        entry.caption,
        entry.image.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(caption: &str) -> Entry {
        Entry::new(caption, "aW1hZ2U=".to_string()).unwrap()
    }

    #[test]
    fn test_format_empty_collection() {
        let collection = EntryCollection::new();
        assert_eq!(format_entry_list(&collection), "No entries yet");
    }

    #[test]
    fn test_format_entry_list() {
        let mut collection = EntryCollection::new();
        collection.prepend(entry("Breakfast"));
        collection.prepend(entry("Lunch"));

        let output = format_entry_list(&collection);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        // Newest first
        assert!(lines[0].contains("Lunch"));
        assert!(lines[1].contains("Breakfast"));
    }

    #[test]
    fn test_format_list_includes_id_and_timestamp() {
        let e = entry("Lunch");
        let mut collection = EntryCollection::new();
        collection.prepend(e.clone());

        let output = format_entry_list(&collection);
        assert!(output.contains(e.id.as_str()));
        assert!(output.contains(&e.taken_at_display()));
    }

    #[test]
    fn test_format_single_entry() {
        let e = entry("Lunch");
        let output = format_entry(&e);

        assert!(output.contains(e.id.as_str()));
        assert!(output.contains("caption: Lunch"));
        assert!(output.contains("8 base64 chars"));
    }

    #[test]
    fn test_format_entry_with_empty_caption() {
        let e = entry("");
        let output = format_entry(&e);
        assert!(output.contains("caption: \n"));
    }
}
