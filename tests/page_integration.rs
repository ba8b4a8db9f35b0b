use ratatui::{backend::TestBackend, prelude::*};

use foliotui::{
    components::{page::Document, Component, Page},
    content::{Section, EDUCATION, EXPERIENCE, PIPELINE_STAGES},
};

fn doc_rows(doc: &Document) -> Vec<String> {
    (0..doc.height)
        .map(|y| {
            let row: String = (0..doc.width)
                .filter_map(|x| doc.buffer.cell((x, y)).map(|c| c.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

fn row_of(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}

#[test]
fn test_document_contains_every_experience_entry_in_order() {
    let page = Page::new();
    let doc = page.build_document(100);
    let rows = doc_rows(&doc);

    let mut last = 0;
    for entry in EXPERIENCE {
        let at = row_of(&rows, entry.company)
            .unwrap_or_else(|| panic!("{} not rendered", entry.company));
        assert!(at > last, "{} out of order", entry.company);
        last = at;
        assert!(row_of(&rows, entry.title).is_some());
        assert!(row_of(&rows, entry.period).is_some());
    }
}

#[test]
fn test_document_contains_every_pipeline_stage_in_order() {
    let page = Page::new();
    let doc = page.build_document(100);
    let rows = doc_rows(&doc);

    let mut last = 0;
    for stage in PIPELINE_STAGES {
        let at = row_of(&rows, stage.name).unwrap_or_else(|| panic!("{} not rendered", stage.name));
        assert!(at > last, "{} out of order", stage.name);
        last = at;
        assert!(row_of(&rows, stage.summary).is_some());
    }
}

#[test]
fn test_document_contains_every_education_entry() {
    let page = Page::new();
    let doc = page.build_document(100);
    let rows = doc_rows(&doc);

    let mut last = 0;
    for entry in EDUCATION {
        let at = row_of(&rows, entry.degree).unwrap_or_else(|| panic!("{} missing", entry.degree));
        assert!(at > last);
        last = at;
        assert!(row_of(&rows, entry.school).is_some());
    }
}

#[test]
fn test_section_anchors_resolve_to_increasing_offsets() {
    let page = Page::new();
    let doc = page.build_document(100);

    let mut last = None;
    for anchor in ["about", "research", "experience", "skills", "contact"] {
        let section = Section::from_anchor(anchor).expect("fixed anchor set");
        let start = doc.section_start(section).expect("section laid out");
        if let Some(prev) = last {
            assert!(start > prev, "{anchor} does not follow previous anchor");
        }
        last = Some(start);
    }
}

#[test]
fn test_hero_renders_at_top() {
    let page = Page::new();
    let doc = page.build_document(100);
    let rows = doc_rows(&doc);

    let name = row_of(&rows, "Brijesh Nanda B Y").expect("name rendered");
    let about = doc.section_start(Section::About).expect("about start");
    assert!(name < about as usize);
}

#[test]
fn test_draw_populates_layout_and_nav() {
    let mut page = Page::new();
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|f| {
            let area = f.area();
            page.draw(f, area).expect("draw");
        })
        .expect("frame");

    let buffer = terminal.backend().buffer();
    let top_row: String = (0..100)
        .filter_map(|x| buffer.cell((x, 0)).map(|c| c.symbol()))
        .collect();
    for label in ["BN", "About", "Experience", "Research", "Skills", "Contact"] {
        assert!(top_row.contains(label), "nav missing {label}: {top_row:?}");
    }
}
