//! Integration tests for locator resolution.

use docscope::host::{MemoryContentControl, MemoryDocument};
use docscope::{
    resolve_and_extract, resolve_locator, Error, ExtractOptions, RangeHandle, RangeLocator,
};

/// Three headings with a body paragraph after each.
fn chapters() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.add_heading("Ch A", 1);
    doc.add_paragraph("Alpha body");
    doc.add_heading("Other", 1);
    doc.add_paragraph("Other body");
    doc.add_heading("Ch B", 2);
    doc.add_paragraph("Beta body");
    doc
}

fn three_paragraphs() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.add_paragraph("First");
    doc.add_paragraph("Second");
    doc.add_paragraph("Third");
    doc
}

fn heading(text: Option<&str>, level: Option<u8>, index: Option<usize>) -> RangeLocator {
    RangeLocator::Heading {
        text: text.map(String::from),
        level,
        index,
    }
}

// ==================== Heading Tests ====================

#[test]
fn test_heading_nth_match() {
    let doc = chapters();

    let range = resolve_locator(&doc, &heading(Some("Ch"), None, Some(1))).unwrap();
    assert_eq!(range, RangeHandle::single(4));

    let err = resolve_locator(&doc, &heading(Some("Ch"), None, Some(2))).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Ch"));
}

#[test]
fn test_heading_resolution_is_repeatable() {
    let doc = chapters();
    let locator = heading(Some("Ch"), None, Some(1));
    let first = resolve_locator(&doc, &locator).unwrap();
    let second = resolve_locator(&doc, &locator).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_heading_by_level() {
    let doc = chapters();
    let range = resolve_locator(&doc, &heading(None, Some(2), None)).unwrap();
    assert_eq!(range, RangeHandle::single(4));

    assert!(resolve_locator(&doc, &heading(Some("Ch A"), Some(2), None))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_heading_text_is_case_sensitive() {
    let doc = chapters();
    assert!(resolve_locator(&doc, &heading(Some("ch a"), None, None))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_heading_invalid_level() {
    let doc = chapters();
    assert!(resolve_locator(&doc, &heading(None, Some(10), None))
        .unwrap_err()
        .is_validation());
}

// ==================== Paragraph Range Tests ====================

#[test]
fn test_paragraph_start_out_of_range() {
    let doc = three_paragraphs();
    let err = resolve_locator(&doc, &RangeLocator::paragraph(5)).unwrap_err();
    match err {
        Error::OutOfRange { index, bound, .. } => {
            assert_eq!(index, 5);
            assert_eq!(bound, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_paragraph_end_out_of_range() {
    let doc = three_paragraphs();
    assert!(resolve_locator(&doc, &RangeLocator::paragraphs(1, 3))
        .unwrap_err()
        .is_out_of_range());
}

#[test]
fn test_paragraph_end_before_start() {
    let doc = three_paragraphs();
    assert!(resolve_locator(&doc, &RangeLocator::paragraphs(2, 1))
        .unwrap_err()
        .is_validation());
}

#[test]
fn test_paragraph_range_text_in_order() {
    let doc = three_paragraphs();
    let result =
        resolve_and_extract(&doc, &RangeLocator::paragraphs(0, 1), &ExtractOptions::default())
            .unwrap();
    assert_eq!(result.text, "First\nSecond");
    assert_eq!(result.metadata.paragraph_count, 2);
    assert_eq!(result.metadata.locator_type, "paragraph_range");
}

#[test]
fn test_paragraph_indexes_skip_tables() {
    let mut doc = MemoryDocument::new();
    doc.add_paragraph("Before");
    doc.add_table([["cell"]]);
    doc.add_paragraph("After");

    let range = resolve_locator(&doc, &RangeLocator::paragraph(1)).unwrap();
    assert_eq!(range, RangeHandle::single(2));

    let span = resolve_locator(&doc, &RangeLocator::paragraphs(0, 1)).unwrap();
    assert_eq!(span, RangeHandle::new(0, 3));
}

// ==================== Bookmark Tests ====================

#[test]
fn test_bookmark() {
    let mut doc = three_paragraphs();
    doc.add_bookmark("summary", 1, 2);

    let range = resolve_locator(&doc, &RangeLocator::bookmark("summary")).unwrap();
    assert_eq!(range, RangeHandle::new(1, 3));

    let err = resolve_locator(&doc, &RangeLocator::bookmark("Summary")).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Summary"));
}

#[test]
fn test_bookmark_empty_name() {
    let doc = three_paragraphs();
    assert!(resolve_locator(&doc, &RangeLocator::bookmark(""))
        .unwrap_err()
        .is_validation());
}

// ==================== Section Tests ====================

#[test]
fn test_sections() {
    let mut doc = MemoryDocument::new();
    doc.add_paragraph("Cover");
    doc.add_section_break();
    doc.add_paragraph("Body one");
    doc.add_paragraph("Body two");

    assert_eq!(
        resolve_locator(&doc, &RangeLocator::section(0)).unwrap(),
        RangeHandle::new(0, 1)
    );
    assert_eq!(
        resolve_locator(&doc, &RangeLocator::section(1)).unwrap(),
        RangeHandle::new(1, 3)
    );
    assert!(resolve_locator(&doc, &RangeLocator::section(2))
        .unwrap_err()
        .is_out_of_range());
}

// ==================== Content Control Tests ====================

fn controls() -> MemoryDocument {
    let mut doc = three_paragraphs();
    doc.add_content_control(
        MemoryContentControl::new(0, 0)
            .with_title("Customer name")
            .with_tag("customer"),
    );
    doc.add_content_control(
        MemoryContentControl::new(2, 2)
            .with_title("Customer address")
            .with_tag("address"),
    );
    doc
}

#[test]
fn test_content_control_by_title_substring() {
    let doc = controls();
    let locator = RangeLocator::ContentControl {
        title: Some("Customer".into()),
        tag: None,
        index: Some(1),
    };
    assert_eq!(resolve_locator(&doc, &locator).unwrap(), RangeHandle::single(2));
}

#[test]
fn test_content_control_by_exact_tag() {
    let doc = controls();
    assert_eq!(
        resolve_locator(&doc, &RangeLocator::content_control_tag("address")).unwrap(),
        RangeHandle::single(2)
    );
    assert!(resolve_locator(&doc, &RangeLocator::content_control_tag("addr"))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_content_control_without_filters() {
    let doc = controls();
    let locator = RangeLocator::ContentControl {
        title: None,
        tag: None,
        index: None,
    };
    assert_eq!(resolve_locator(&doc, &locator).unwrap(), RangeHandle::single(0));

    let past_end = RangeLocator::ContentControl {
        title: None,
        tag: None,
        index: Some(2),
    };
    assert!(resolve_locator(&doc, &past_end).unwrap_err().is_not_found());
}

// ==================== Wire Format Tests ====================

#[test]
fn test_locator_from_json() {
    let doc = chapters();
    let locator: RangeLocator =
        serde_json::from_str(r#"{"type":"heading","text":"Ch","index":1}"#).unwrap();
    assert_eq!(resolve_locator(&doc, &locator).unwrap(), RangeHandle::single(4));
}
