//! Rendering module for converting query results to output formats.

mod json;
mod markdown;
mod text;

pub use json::{outline_to_json, to_json, JsonFormat};
pub use markdown::{nodes_to_markdown, outline_to_markdown};
pub use text::extraction_to_text;
