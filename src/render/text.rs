//! Plain text rendering for extraction results.

use crate::extract::ExtractionResult;
use crate::model::ContentElement;

/// Render extracted elements as plain text.
///
/// Paragraphs and content controls contribute their (possibly truncated)
/// text; table rows are written with tab-separated cells. Images have no
/// text form and are skipped.
pub fn extraction_to_text(result: &ExtractionResult) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for element in &result.elements {
        match element {
            ContentElement::Paragraph(p) => {
                if let Some(text) = &p.text {
                    blocks.push(text.clone());
                }
            }
            ContentElement::Table(t) => {
                let rows: Vec<String> = t.cells.iter().map(|row| row.join("\t")).collect();
                if !rows.is_empty() {
                    blocks.push(rows.join("\n"));
                }
            }
            ContentElement::ContentControl(c) => {
                if let Some(text) = c.text.as_deref().filter(|t| !t.is_empty()) {
                    blocks.push(text.to_string());
                }
            }
            ContentElement::Image(_) | ContentElement::InlinePicture(_) => {}
        }
    }

    blocks.join("\n").trim().to_string()
}
