//! JSON rendering for outlines and query results.

use crate::error::{Error, Result};
use crate::model::DocumentOutline;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any model value (outline, extraction result, comment report).
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Dump the full outline structure as pretty-printed JSON.
pub fn outline_to_json(outline: &DocumentOutline) -> Result<String> {
    to_json(outline, JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingRecord, OutlineNode};

    fn outline() -> DocumentOutline {
        let mut outline = DocumentOutline::new();
        let mut intro = OutlineNode::from_heading(&HeadingRecord::new("Intro", 1, 0), false);
        intro.add_child(OutlineNode::from_heading(
            &HeadingRecord::new("Scope", 2, 1),
            false,
        ));
        outline.nodes.push(intro);
        outline.total_headings = 2;
        outline.max_depth = 2;
        outline.level_counts.insert(1, 1);
        outline.level_counts.insert(2, 1);
        outline
    }

    #[test]
    fn test_outline_to_json() {
        let json = outline_to_json(&outline()).unwrap();
        assert!(json.contains("\"total_headings\": 2"));
        assert!(json.contains("\"Scope\""));
        assert!(json.contains('\n'));

        let parsed: DocumentOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outline());
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&outline(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
