//! Grouping of annotations that anchor to identical text.

use crate::model::{AnnotationRecord, DuplicateGroup};
use std::collections::HashMap;

/// Group annotations by anchor text hash.
///
/// Only hashes shared by two or more records produce a group. Groups are
/// ordered by the first occurrence of their hash, and members keep input
/// order.
pub fn deduplicate_references(records: &[AnnotationRecord]) -> Vec<DuplicateGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&AnnotationRecord>> = HashMap::new();

    for record in records {
        let hash = record.anchor_text_hash.as_str();
        groups
            .entry(hash)
            .or_insert_with(|| {
                order.push(hash);
                Vec::new()
            })
            .push(record);
    }

    let duplicates: Vec<DuplicateGroup> = order
        .into_iter()
        .filter_map(|hash| {
            let members = groups.remove(hash)?;
            if members.len() < 2 {
                return None;
            }
            Some(DuplicateGroup {
                text_hash: hash.to_string(),
                text: members[0].anchor_text.clone(),
                count: members.len(),
                comments: members.into_iter().cloned().collect(),
            })
        })
        .collect();

    log::debug!(
        "Found {} duplicate groups among {} annotations",
        duplicates.len(),
        records.len()
    );
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, hash: &str, anchor: &str) -> AnnotationRecord {
        let mut r = AnnotationRecord::new(id, format!("comment {}", id), anchor);
        r.anchor_text_hash = hash.to_string();
        r
    }

    #[test]
    fn test_groups_by_hash() {
        let records = vec![
            record("a", "h1", "first"),
            record("b", "h2", "other"),
            record("c", "h1", "first again"),
        ];

        let groups = deduplicate_references(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text_hash, "h1");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].text, "first");
        let ids: Vec<&str> = groups[0].comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_group_order_follows_first_occurrence() {
        let records = vec![
            record("a", "h2", "x"),
            record("b", "h1", "y"),
            record("c", "h1", "y"),
            record("d", "h2", "x"),
        ];
        let hashes: Vec<String> = deduplicate_references(&records)
            .into_iter()
            .map(|g| g.text_hash)
            .collect();
        assert_eq!(hashes, vec!["h2", "h1"]);
    }

    #[test]
    fn test_no_duplicates() {
        assert!(deduplicate_references(&[]).is_empty());
        let records = vec![record("a", "h1", "x"), record("b", "h2", "y")];
        assert!(deduplicate_references(&records).is_empty());
    }
}
