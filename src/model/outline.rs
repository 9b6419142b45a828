//! Hierarchical document outline types.

use super::{FormatSnapshot, HeadingRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A hierarchical outline built from the document's headings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Top-level outline nodes
    pub nodes: Vec<OutlineNode>,

    /// Number of headings in the outline (including nested)
    pub total_headings: usize,

    /// Deepest heading level present (0 if empty)
    pub max_depth: u8,

    /// Number of headings per level
    pub level_counts: BTreeMap<u8, usize>,
}

impl DocumentOutline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Count every node reachable from the roots.
    pub fn total_items(&self) -> usize {
        fn count_items(nodes: &[OutlineNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + count_items(&node.children))
                .sum()
        }
        count_items(&self.nodes)
    }

    /// Iterate over all nodes depth-first, in document order.
    pub fn iter(&self) -> OutlineIter<'_> {
        OutlineIter {
            stack: self.nodes.iter().rev().collect(),
        }
    }

    /// Flatten into document order, dropping the nesting.
    pub fn flatten(&self) -> Vec<OutlineNode> {
        self.iter().map(OutlineNode::detached).collect()
    }
}

/// Depth-first iterator over outline nodes.
pub struct OutlineIter<'a> {
    stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for OutlineIter<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A single heading in the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Synthesized identifier (`heading-<sequence_index>`)
    pub id: String,

    /// Heading text
    pub text: String,

    /// Heading level (1-9)
    pub level: u8,

    /// Style name (e.g. "Heading 2")
    pub style: String,

    /// Child headings
    pub children: Vec<OutlineNode>,

    /// Position of the heading paragraph in the body
    pub sequence_index: usize,

    /// Heading formatting, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatSnapshot>,
}

impl OutlineNode {
    /// Create a node for a heading record.
    pub fn from_heading(heading: &HeadingRecord, include_format: bool) -> Self {
        Self {
            id: format!("heading-{}", heading.sequence_index),
            text: heading.text.clone(),
            level: heading.level,
            style: format!("Heading {}", heading.level),
            children: Vec::new(),
            sequence_index: heading.sequence_index,
            format: if include_format {
                heading.format.clone()
            } else {
                None
            },
        }
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: OutlineNode) {
        self.children.push(child);
    }

    /// Count this node's descendants.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    fn detached(&self) -> OutlineNode {
        OutlineNode {
            children: Vec::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(text: &str, level: u8, index: usize) -> OutlineNode {
        OutlineNode::from_heading(&HeadingRecord::new(text, level, index), false)
    }

    #[test]
    fn test_outline_new() {
        let outline = DocumentOutline::new();
        assert!(outline.is_empty());
        assert_eq!(outline.total_items(), 0);
        assert_eq!(outline.max_depth, 0);
    }

    #[test]
    fn test_node_from_heading() {
        let n = node("Intro", 2, 14);
        assert_eq!(n.id, "heading-14");
        assert_eq!(n.style, "Heading 2");
        assert!(n.children.is_empty());
    }

    #[test]
    fn test_iter_is_depth_first() {
        let mut chapter1 = node("Chapter 1", 1, 0);
        let mut section = node("Section 1.1", 2, 1);
        section.add_child(node("Detail", 3, 2));
        chapter1.add_child(section);
        chapter1.add_child(node("Section 1.2", 2, 3));

        let outline = DocumentOutline {
            nodes: vec![chapter1, node("Chapter 2", 1, 4)],
            ..Default::default()
        };

        let order: Vec<&str> = outline.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(
            order,
            vec!["Chapter 1", "Section 1.1", "Detail", "Section 1.2", "Chapter 2"]
        );
        assert_eq!(outline.total_items(), 5);
        assert_eq!(outline.nodes[0].descendant_count(), 3);

        let flat = outline.flatten();
        assert_eq!(flat.len(), 5);
        assert!(flat.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_format_only_when_requested() {
        let heading =
            HeadingRecord::new("Styled", 1, 0).with_format(FormatSnapshot::new().bold());
        assert!(OutlineNode::from_heading(&heading, false).format.is_none());
        assert!(OutlineNode::from_heading(&heading, true).format.is_some());
    }
}
