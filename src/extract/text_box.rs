//! Text box enumeration.

use super::options::{truncate_text, validate_max_text_length};
use crate::error::Result;
use crate::host::DocumentHost;
use serde::{Deserialize, Serialize};

/// Summary of one text box shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBoxInfo {
    /// Synthesized id (`text-box-<n>`)
    pub id: String,

    /// Shape name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Text content, paragraphs joined by newlines
    pub text: String,

    /// Whether `text` was cut to the length limit
    pub truncated: bool,

    /// Width in points
    pub width: f32,

    /// Height in points
    pub height: f32,

    /// Number of paragraphs inside the text box
    pub paragraph_count: usize,
}

/// List the document's text boxes in host order.
pub fn list_text_boxes<H: DocumentHost + ?Sized>(
    host: &H,
    max_text_length: Option<usize>,
) -> Result<Vec<TextBoxInfo>> {
    validate_max_text_length(max_text_length)?;

    let boxes: Vec<TextBoxInfo> = host
        .list_text_boxes()?
        .into_iter()
        .enumerate()
        .map(|(i, shape)| {
            let (text, truncated) = truncate_text(&shape.paragraphs.join("\n"), max_text_length);
            TextBoxInfo {
                id: format!("text-box-{}", i),
                name: shape.name,
                text,
                truncated,
                width: shape.width,
                height: shape.height,
                paragraph_count: shape.paragraphs.len(),
            }
        })
        .collect();

    log::debug!("Found {} text boxes", boxes.len());
    Ok(boxes)
}
