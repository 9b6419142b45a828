//! Range walker producing typed content elements.

use super::{ExtractOptions, ExtractionMetadata, ExtractionResult, ExtractionScope};
use crate::error::Result;
use crate::host::{
    ContentControlHandle, DocumentHost, ImageAnchor, ImageHandle, ParagraphHandle, TableHandle,
};
use crate::model::{
    ContentControlElement, ContentElement, ImageElement, ParagraphElement, RangeHandle,
    TableElement,
};

/// Extracts typed elements from a range.
pub struct ContentExtractor<'h, H: ?Sized> {
    host: &'h H,
    options: ExtractOptions,
}

impl<'h, H: DocumentHost + ?Sized> ContentExtractor<'h, H> {
    /// Create an extractor over a host document.
    pub fn new(host: &'h H, options: ExtractOptions) -> Self {
        Self { host, options }
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Walk `range` and collect its elements.
    ///
    /// Elements are emitted per kind in host enumeration order: each
    /// paragraph followed by its images, then tables, then content
    /// controls. Counts in the metadata cover emitted elements only.
    pub fn extract(&self, range: &RangeHandle, scope: ExtractionScope) -> Result<ExtractionResult> {
        self.options.validate()?;

        let mut walk = Walk::new(scope);

        for paragraph in self.host.list_paragraphs(Some(range))? {
            let element = self.paragraph_element(&paragraph, walk.next_paragraph_id());
            let paragraph_id = element.id.clone();
            if self.options.include_text {
                walk.texts.push(paragraph.text.clone());
            }
            walk.emit(ContentElement::Paragraph(element));

            if self.options.include_images {
                for image in &paragraph.images {
                    let element = self.image_element(image, walk.next_image_id(), &paragraph_id);
                    walk.emit(match image.anchor {
                        ImageAnchor::Inline => ContentElement::InlinePicture(element),
                        ImageAnchor::Floating => ContentElement::Image(element),
                    });
                }
            }
        }

        if self.options.include_tables {
            for table in self.host.list_tables(Some(range))? {
                let element = self.table_element(&table, walk.next_table_id());
                walk.emit(ContentElement::Table(element));
            }
        }

        if self.options.include_content_controls {
            for control in self.host.list_content_controls(Some(range))? {
                let element = self.content_control_element(&control, walk.next_control_id());
                walk.emit(ContentElement::ContentControl(element));
            }
        }

        let result = walk.finish();
        log::debug!(
            "Extracted {} elements from {} ({} paragraphs, {} tables, {} images)",
            result.elements.len(),
            range,
            result.metadata.paragraph_count,
            result.metadata.table_count,
            result.metadata.image_count
        );
        Ok(result)
    }

    fn paragraph_element(&self, paragraph: &ParagraphHandle, id: String) -> ParagraphElement {
        let mut element = ParagraphElement {
            id,
            ..Default::default()
        };

        if self.options.include_text {
            let (text, truncated) = self.options.truncate(&paragraph.text);
            element.text = Some(text);
            element.truncated = truncated;
        }

        if self.options.detailed_metadata {
            match self.host.paragraph_format(paragraph) {
                Ok(format) => {
                    element.is_list_item = Some(format.is_list_item());
                    element.list_level = format.list_level;
                    element.alignment = Some(format.alignment);
                    element.style = format.style;
                }
                Err(e) => {
                    log::warn!(
                        "Format lookup failed for paragraph {}: {}",
                        paragraph.index,
                        e
                    );
                }
            }
        }

        element
    }

    fn image_element(&self, image: &ImageHandle, id: String, paragraph_id: &str) -> ImageElement {
        let mut element = ImageElement {
            id,
            paragraph_id: paragraph_id.to_string(),
            width: image.width,
            height: image.height,
            alt_text: image.alt_text.clone(),
            ..Default::default()
        };
        if self.options.detailed_metadata {
            element.alt_title = image.alt_title.clone();
            element.hyperlink = image.hyperlink.clone();
        }
        element
    }

    fn table_element(&self, table: &TableHandle, id: String) -> TableElement {
        let cells = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| self.options.truncate(cell).0)
                    .collect()
            })
            .collect();

        let mut element = TableElement {
            id,
            row_count: table.row_count(),
            column_count: table.column_count(),
            cells,
            ..Default::default()
        };

        if self.options.detailed_metadata {
            match self.host.table_format(table) {
                Ok(format) => {
                    element.style = format.style;
                    element.header_row_count = Some(format.header_row_count);
                }
                Err(e) => {
                    log::warn!("Format lookup failed for table {}: {}", table.index, e);
                }
            }
        }

        element
    }

    fn content_control_element(
        &self,
        control: &ContentControlHandle,
        id: String,
    ) -> ContentControlElement {
        let mut element = ContentControlElement {
            id,
            title: control.title.clone(),
            tag: control.tag.clone(),
            control_type: control.control_type,
            ..Default::default()
        };

        if self.options.include_text {
            let (text, truncated) = self.options.truncate(&control.text);
            element.text = Some(text);
            element.truncated = truncated;
        }

        if self.options.detailed_metadata {
            element.placeholder = control.placeholder.clone();
            element.cannot_edit = Some(control.cannot_edit);
            element.cannot_delete = Some(control.cannot_delete);
        }

        element
    }
}

/// Accumulates elements and per-kind counters during one extraction.
struct Walk {
    elements: Vec<ContentElement>,
    texts: Vec<String>,
    metadata: ExtractionMetadata,
}

impl Walk {
    fn new(scope: ExtractionScope) -> Self {
        Self {
            elements: Vec::new(),
            texts: Vec::new(),
            metadata: ExtractionMetadata::new(scope),
        }
    }

    fn next_paragraph_id(&self) -> String {
        format!("paragraph-{}", self.metadata.paragraph_count)
    }

    fn next_image_id(&self) -> String {
        format!("image-{}", self.metadata.image_count)
    }

    fn next_table_id(&self) -> String {
        format!("table-{}", self.metadata.table_count)
    }

    fn next_control_id(&self) -> String {
        format!("content-control-{}", self.metadata.content_control_count)
    }

    fn emit(&mut self, element: ContentElement) {
        match &element {
            ContentElement::Paragraph(_) => self.metadata.paragraph_count += 1,
            ContentElement::Table(_) => self.metadata.table_count += 1,
            ContentElement::Image(_) | ContentElement::InlinePicture(_) => {
                self.metadata.image_count += 1
            }
            ContentElement::ContentControl(_) => self.metadata.content_control_count += 1,
        }
        self.elements.push(element);
    }

    fn finish(self) -> ExtractionResult {
        let text = self.texts.join("\n");
        let mut metadata = self.metadata;
        metadata.character_count = text.chars().count();
        metadata.is_empty = self.elements.is_empty();
        ExtractionResult {
            text,
            elements: self.elements,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryDocument, MemoryImage, MemoryParagraph};
    use crate::model::{Alignment, LocatorKind};

    fn scope() -> ExtractionScope {
        ExtractionScope::Locator(LocatorKind::Section)
    }

    fn whole(doc: &MemoryDocument) -> RangeHandle {
        RangeHandle::new(0, doc.blocks.len())
    }

    #[test]
    fn test_images_follow_their_paragraph() {
        let mut doc = MemoryDocument::new();
        doc.add_paragraph_with(
            MemoryParagraph::new("Figure")
                .with_image(MemoryImage::inline(100.0, 50.0).with_alt_text("chart"))
                .with_image(MemoryImage::floating(20.0, 20.0)),
        );
        doc.add_paragraph("After");

        let result = ContentExtractor::new(&doc, ExtractOptions::default())
            .extract(&whole(&doc), scope())
            .unwrap();

        let types: Vec<&str> = result.elements.iter().map(|e| e.type_name()).collect();
        assert_eq!(
            types,
            vec!["paragraph", "inline_picture", "image", "paragraph"]
        );
        match &result.elements[1] {
            ContentElement::InlinePicture(img) => {
                assert_eq!(img.id, "image-0");
                assert_eq!(img.paragraph_id, "paragraph-0");
                assert_eq!(img.alt_text.as_deref(), Some("chart"));
            }
            other => panic!("unexpected element: {other:?}"),
        }
        assert_eq!(result.elements[3].id(), "paragraph-1");
        assert_eq!(result.metadata.image_count, 2);
    }

    #[test]
    fn test_excluded_images_are_not_counted() {
        let mut doc = MemoryDocument::new();
        doc.add_paragraph_with(
            MemoryParagraph::new("Figure").with_image(MemoryImage::inline(1.0, 1.0)),
        );

        let options = ExtractOptions::new().with_images(false);
        let result = ContentExtractor::new(&doc, options)
            .extract(&whole(&doc), scope())
            .unwrap();
        assert_eq!(result.metadata.image_count, 0);
        assert!(!result.elements.iter().any(|e| e.is_image()));
    }

    #[test]
    fn test_detailed_metadata_toggle() {
        let mut doc = MemoryDocument::new();
        doc.add_paragraph_with(
            MemoryParagraph::new("Item")
                .with_style("List Paragraph")
                .with_alignment(Alignment::Center)
                .with_list_level(0),
        );

        let plain = ContentExtractor::new(&doc, ExtractOptions::default())
            .extract(&whole(&doc), scope())
            .unwrap();
        match &plain.elements[0] {
            ContentElement::Paragraph(p) => {
                assert!(p.style.is_none());
                assert!(p.alignment.is_none());
                assert!(p.is_list_item.is_none());
            }
            other => panic!("unexpected element: {other:?}"),
        }

        let detailed = ContentExtractor::new(
            &doc,
            ExtractOptions::new().with_detailed_metadata(true),
        )
        .extract(&whole(&doc), scope())
        .unwrap();
        match &detailed.elements[0] {
            ContentElement::Paragraph(p) => {
                assert_eq!(p.style.as_deref(), Some("List Paragraph"));
                assert_eq!(p.alignment, Some(Alignment::Center));
                assert_eq!(p.is_list_item, Some(true));
                assert_eq!(p.list_level, Some(0));
            }
            other => panic!("unexpected element: {other:?}"),
        }
    }

    #[test]
    fn test_text_excluded() {
        let mut doc = MemoryDocument::new();
        doc.add_paragraph("Hidden");

        let result = ContentExtractor::new(&doc, ExtractOptions::new().with_text(false))
            .extract(&whole(&doc), scope())
            .unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.metadata.character_count, 0);
        assert_eq!(result.metadata.paragraph_count, 1);
        assert_eq!(result.elements[0].text(), None);
    }

    #[test]
    fn test_empty_range() {
        let doc = MemoryDocument::new();
        let result = ContentExtractor::new(&doc, ExtractOptions::default())
            .extract(&RangeHandle::new(0, 0), ExtractionScope::Visible)
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.metadata.locator_type, "visible");
    }
}
