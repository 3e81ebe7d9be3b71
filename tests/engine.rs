//! Integration tests for the layout2doc engine.
//!
//! These exercise the full pipeline through the public API: layout model in,
//! element stream out. Everything is pure computation, so the suite runs
//! with no fixtures, network, or environment gating.

use layout2doc::{
    structure_document, structure_json, structure_page, write_outline_to_file, BBox, Block, Cell,
    EngineConfig, GeometryIssue, Line, Page, Span, StructuredElement,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn span(text: &str, x0: f64, x1: f64, y: f64) -> Span {
    Span::new(text, BBox(x0, y, x1, y + 12.0))
}

fn line(text: &str, x0: f64, x1: f64, y: f64) -> Line {
    Line::new(BBox(x0, y, x1, y + 12.0), vec![span(text, x0, x1, y)])
}

fn one_block_page(width: f64, lines: Vec<Line>) -> Page {
    Page::new(width, vec![Block::new(lines)])
}

fn default_config() -> EngineConfig {
    EngineConfig::default()
}

/// Stack plain text lines into one block at successive vertical positions.
fn block_of(texts: &[&str]) -> Block {
    Block::new(
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| line(t, 72.0, 400.0, 100.0 + 15.0 * i as f64))
            .collect(),
    )
}

// ── Spec scenarios ───────────────────────────────────────────────────────────

#[test]
fn tab_separated_roster_becomes_three_by_two_table() {
    let page = Page::new(612.0, vec![block_of(&["Name\tAge", "Alice\t30", "Bob\t25"])]);
    let outline = structure_page(&page, &default_config());

    assert_eq!(outline.elements.len(), 1);
    let StructuredElement::Table { rows } = &outline.elements[0] else {
        panic!("expected a table, got {:?}", outline.elements[0]);
    };
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == 2));
    assert_eq!(rows[0][0].text, "Name");
    assert_eq!(rows[0][1].text, "Age");
}

#[test]
fn lone_all_caps_line_is_level_one_heading() {
    let page = one_block_page(612.0, vec![line("INTRODUCTION", 72.0, 200.0, 100.0)]);
    let outline = structure_page(&page, &default_config());

    assert_eq!(
        outline.elements,
        vec![StructuredElement::Heading {
            text: "INTRODUCTION".into(),
            level: 1,
            centered: false,
        }]
    );
}

#[test]
fn url_is_a_link_never_a_heading() {
    let page = one_block_page(612.0, vec![line("https://example.com/doc", 72.0, 300.0, 100.0)]);
    let outline = structure_page(&page, &default_config());

    assert_eq!(
        outline.elements,
        vec![StructuredElement::Link {
            text: "https://example.com/doc".into()
        }]
    );
}

#[test]
fn double_space_columns_detected_with_three_columns() {
    let page = Page::new(612.0, vec![block_of(&["Revenue  Q1  Q2", "100  50  60"])]);
    let outline = structure_page(&page, &default_config());

    let StructuredElement::Table { rows } = &outline.elements[0] else {
        panic!("expected a table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 3);
    assert_eq!(rows[1][2].text, "60");
}

#[test]
fn centering_band_bounds_are_strict() {
    // Midpoint 400 on width 1000 is exactly 40%: not centered.
    let boundary = one_block_page(1000.0, vec![line("SECTION HEADING", 300.0, 500.0, 100.0)]);
    let outline = structure_page(&boundary, &default_config());
    let StructuredElement::Heading { centered, .. } = &outline.elements[0] else {
        panic!("expected a heading");
    };
    assert!(!centered, "40% exactly must not be centered");

    // Midpoint 450 is 45%: centered.
    let inside = one_block_page(1000.0, vec![line("SECTION HEADING", 350.0, 550.0, 100.0)]);
    let outline = structure_page(&inside, &default_config());
    let StructuredElement::Heading { centered, .. } = &outline.elements[0] else {
        panic!("expected a heading");
    };
    assert!(centered, "45% must be centered");
}

// ── Classification precedence through the full pipeline ──────────────────────

#[test]
fn mixed_block_classifies_each_line_once() {
    let page = Page::new(
        612.0,
        vec![block_of(&[
            "INTRODUCTION",
            "This is the opening paragraph of the document body text.",
            "https://example.com/reference",
        ])],
    );
    let outline = structure_page(&page, &default_config());

    assert_eq!(outline.elements.len(), 3);
    assert!(matches!(
        outline.elements[0],
        StructuredElement::Heading { level: 1, .. }
    ));
    assert!(matches!(outline.elements[1], StructuredElement::Paragraph { .. }));
    assert!(matches!(outline.elements[2], StructuredElement::Link { .. }));
}

#[test]
fn long_title_case_line_is_level_two_heading() {
    // 72 Title-Case characters: past the title bound, inside the subtitle bound.
    let text = "Quarterly Review Of Regional Manufacturing Output And Employment Figures";
    let page = one_block_page(612.0, vec![line(text, 72.0, 540.0, 100.0)]);
    let outline = structure_page(&page, &default_config());

    assert!(matches!(
        outline.elements[0],
        StructuredElement::Heading { level: 2, .. }
    ));
}

// ── Table semantics ──────────────────────────────────────────────────────────

#[test]
fn table_blocks_skip_line_classification_entirely() {
    // "Name\tAge" would read as a title on its own; the table claims it.
    let page = Page::new(612.0, vec![block_of(&["Name\tAge", "Alice\t30"])]);
    let outline = structure_page(&page, &default_config());

    assert_eq!(outline.elements.len(), 1);
    assert!(matches!(outline.elements[0], StructuredElement::Table { .. }));
}

#[test]
fn only_first_qualifying_run_becomes_the_table() {
    let page = Page::new(
        612.0,
        vec![block_of(&[
            "A\tB",
            "C\tD",
            "an ordinary separating paragraph line",
            "E\tF",
            "G\tH",
        ])],
    );
    let outline = structure_page(&page, &default_config());

    let tables = outline
        .elements
        .iter()
        .filter(|e| matches!(e, StructuredElement::Table { .. }))
        .count();
    assert_eq!(tables, 1, "one block yields at most one table");
    let StructuredElement::Table { rows } = &outline.elements[0] else {
        panic!("expected the first run as the table");
    };
    assert_eq!(rows[0][0].text, "A");
}

#[test]
fn ragged_table_pads_short_rows_with_empty_cells() {
    let page = Page::new(612.0, vec![block_of(&["a  b  c  d", "e  f"])]);
    let outline = structure_page(&page, &default_config());

    let StructuredElement::Table { rows } = &outline.elements[0] else {
        panic!("expected a table");
    };
    assert_eq!(rows[1].len(), 4);
    assert_eq!(rows[1][2], Cell::default());
    assert_eq!(rows[1][3], Cell::default());
}

#[test]
fn subtitle_shaped_cells_come_back_emphasized() {
    let page = Page::new(
        612.0,
        vec![block_of(&["Product Overview\t2024 figures", "widgets\t120"])],
    );
    let outline = structure_page(&page, &default_config());

    let StructuredElement::Table { rows } = &outline.elements[0] else {
        panic!("expected a table");
    };
    assert!(rows[0][0].emphasized);
    assert!(!rows[0][1].emphasized);
    assert!(!rows[1][0].emphasized);
}

// ── Document assembly ────────────────────────────────────────────────────────

#[test]
fn document_interleaves_page_breaks_between_pages() {
    let pages = vec![
        one_block_page(612.0, vec![line("FIRST PAGE", 72.0, 200.0, 100.0)]),
        one_block_page(612.0, vec![line("SECOND PAGE", 72.0, 200.0, 100.0)]),
        one_block_page(612.0, vec![line("THIRD PAGE", 72.0, 200.0, 100.0)]),
    ];
    let outline = structure_document(&pages, &default_config());
    assert_eq!(outline.stats.pages, 3);

    let elements = outline.into_elements();
    assert_eq!(elements.len(), 5);
    assert!(matches!(elements[1], StructuredElement::PageBreak));
    assert!(matches!(elements[3], StructuredElement::PageBreak));
    assert!(!matches!(elements.last(), Some(StructuredElement::PageBreak)));
}

#[test]
fn stats_aggregate_across_pages() {
    let pages = vec![
        Page::new(
            612.0,
            vec![
                block_of(&["INTRODUCTION", "body paragraph number one here"]),
                Block::default(), // image block
            ],
        ),
        Page::new(612.0, vec![block_of(&["Name\tAge", "Alice\t30"])]),
    ];
    let outline = structure_document(&pages, &default_config());

    assert_eq!(outline.stats.headings, 1);
    assert_eq!(outline.stats.paragraphs, 1);
    assert_eq!(outline.stats.tables, 1);
    assert_eq!(outline.stats.blocks_skipped, 1);
}

// ── JSON boundary ────────────────────────────────────────────────────────────

#[test]
fn extractor_dict_json_round_trips_through_the_engine() {
    let json = r#"{
        "width": 612.0,
        "blocks": [
            {"lines": [
                {"bbox": [72.0, 100.0, 300.0, 112.0],
                 "spans": [{"text": "INTRODUCTION", "bbox": [72.0, 100.0, 300.0, 112.0]}]}
            ]},
            {"image": "ignored-by-the-engine"}
        ]
    }"#;
    let outline = structure_json(json, &default_config()).unwrap();

    assert_eq!(outline.stats.pages, 1);
    assert_eq!(outline.stats.headings, 1);
    assert_eq!(outline.stats.blocks_skipped, 1);

    // The outline itself serializes back to tagged JSON for the writer.
    let rendered = serde_json::to_string(&outline).unwrap();
    assert!(rendered.contains(r#""type":"heading""#));
}

#[test]
fn malformed_json_is_a_fatal_error() {
    assert!(structure_json("{\"width\": }", &default_config()).is_err());
}

// ── Defensive geometry handling ──────────────────────────────────────────────

#[test]
fn empty_span_line_is_skipped_and_reported() {
    let bbox = BBox(72.0, 100.0, 200.0, 112.0);
    let page = Page::new(
        612.0,
        vec![Block::new(vec![
            Line::new(bbox, vec![]),
            line("surviving body paragraph text", 72.0, 300.0, 120.0),
        ])],
    );
    let outline = structure_page(&page, &default_config());

    assert_eq!(outline.elements.len(), 1);
    assert_eq!(outline.issues, vec![GeometryIssue::EmptyLine { block: 0, line: 0 }]);
}

#[test]
fn bad_block_does_not_abort_its_siblings() {
    let bbox = BBox(72.0, 100.0, 200.0, 112.0);
    let page = Page::new(
        612.0,
        vec![
            Block::new(vec![Line::new(bbox, vec![])]),
            block_of(&["SECOND BLOCK HEADING"]),
        ],
    );
    let outline = structure_page(&page, &default_config());

    assert_eq!(outline.elements.len(), 1);
    assert!(matches!(outline.elements[0], StructuredElement::Heading { .. }));
    assert_eq!(outline.issues.len(), 1);
}

// ── Configuration effects ────────────────────────────────────────────────────

#[test]
fn wider_center_band_centers_more_headings() {
    // Midpoint at 35%: outside the default band, inside a (0.3, 0.7) band.
    let page = one_block_page(1000.0, vec![line("SECTION HEADING", 250.0, 450.0, 100.0)]);

    let outline = structure_page(&page, &default_config());
    let StructuredElement::Heading { centered, .. } = &outline.elements[0] else {
        panic!("expected a heading");
    };
    assert!(!centered);

    let wide = EngineConfig::builder().center_band(0.3, 0.7).build().unwrap();
    let outline = structure_page(&page, &wide);
    let StructuredElement::Heading { centered, .. } = &outline.elements[0] else {
        panic!("expected a heading");
    };
    assert!(centered);
}

#[test]
fn structuring_is_deterministic() {
    let pages = vec![Page::new(
        612.0,
        vec![
            block_of(&["INTRODUCTION", "some body text to classify"]),
            block_of(&["Name\tAge", "Alice\t30"]),
        ],
    )];
    let first = structure_document(&pages, &default_config());
    let second = structure_document(&pages, &default_config());
    assert_eq!(first.pages, second.pages);
}

// ── File output ──────────────────────────────────────────────────────────────

#[test]
fn outline_writes_atomically_as_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("outline.json");

    let pages = vec![one_block_page(612.0, vec![line("INTRODUCTION", 72.0, 200.0, 100.0)])];
    let outline = structure_document(&pages, &default_config());
    write_outline_to_file(&outline, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["stats"]["headings"], 1);

    // No temp file left behind.
    assert!(!path.with_extension("json.tmp").exists());
}
