//! Markdown rendering for outlines.

use crate::model::{DocumentOutline, OutlineNode};

/// Render an outline as Markdown headings, one per line.
///
/// Nodes are written depth-first in document order as `#` repeated
/// `level` times, a space, and the heading text. An empty outline renders
/// as an empty string.
pub fn outline_to_markdown(outline: &DocumentOutline) -> String {
    let lines: Vec<String> = outline.iter().map(heading_line).collect();
    lines.join("\n")
}

/// Render a node list (nested or flat) as Markdown headings.
pub fn nodes_to_markdown(nodes: &[OutlineNode]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(&mut lines, node);
    }
    lines.join("\n")
}

fn push_node(lines: &mut Vec<String>, node: &OutlineNode) {
    lines.push(heading_line(node));
    for child in &node.children {
        push_node(lines, child);
    }
}

fn heading_line(node: &OutlineNode) -> String {
    format!("{} {}", "#".repeat(node.level as usize), node.text)
}
