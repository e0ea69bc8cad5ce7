use linkboard_core::{parse_import, ImportError};

#[test]
fn json_array_payload_is_decoded_first() {
    let payload = r#"[
        {"title": "A", "url": "https://a.com"},
        {"title": "B", "url": "https://b.com", "category": "dev"}
    ]"#;
    let drafts = parse_import(payload).unwrap();
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].title, "A");
    assert_eq!(drafts[1].category.as_deref(), Some("dev"));
}

#[test]
fn json_envelope_payload_is_decoded() {
    let payload = r#"{"version":"1.0","bookmarks":[{"title":"A","url":"https://a.com"}]}"#;
    let drafts = parse_import(payload).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].url, "https://a.com");
}

#[test]
fn netscape_anchor_payload_is_decoded() {
    let drafts = parse_import(r#"<DT><A HREF="https://a.com">A</A>"#).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "A");
    assert_eq!(drafts[0].url, "https://a.com");
}

#[test]
fn freeform_text_payload_is_the_fallback() {
    let payload = "My Notes\nhttps://notes.example\n\n2. Search\nhttps://search.example";
    let drafts = parse_import(payload).unwrap();
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].title, "My Notes");
    assert_eq!(drafts[1].title, "Search");
}

#[test]
fn html_without_valid_anchors_falls_through_to_text() {
    // The anchor lacks the <DT> prefix, so the HTML decoder yields nothing;
    // the text heuristic still finds a title/url line pair.
    let payload = "<a href=\"https://x.com\">x</a>\nReadable Title\nhttps://readable.example";
    let drafts = parse_import(payload).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Readable Title");
}

#[test]
fn empty_results_from_every_decoder_is_an_error() {
    assert_eq!(
        parse_import("just words, no links"),
        Err(ImportError::UnrecognizedFormat)
    );
    assert_eq!(parse_import("[]"), Err(ImportError::UnrecognizedFormat));
    assert_eq!(
        parse_import(r#"{"bookmarks": []}"#),
        Err(ImportError::UnrecognizedFormat)
    );
}
