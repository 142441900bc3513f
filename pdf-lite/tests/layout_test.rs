use pdf_lite::{BuiltinFont, LayoutEngine, LayoutParams, Section};

/// Geometry matching the summary report: US Letter with 54pt margins.
fn letter_params() -> LayoutParams {
    LayoutParams {
        page_height: 792.0,
        margin_x: 54.0,
        margin_top: 54.0,
        margin_bottom: 54.0,
        title_size: 18.0,
        title_advance: 22.0,
        heading_size: 12.0,
        heading_advance: 16.0,
        body_size: 11.0,
        leading: 14.0,
        section_gap: 4.0,
        bullet_wrap_chars: 86,
    }
}

#[test]
fn title_placed_at_top_margin_in_bold() {
    let sections = vec![Section::Title("Report".to_string())];
    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);

    assert_eq!(placements.len(), 1);
    let title = &placements[0];
    assert_eq!(title.text, "Report");
    assert_eq!(title.x, 54.0);
    assert_eq!(title.y, 792.0 - 54.0);
    assert_eq!(title.font, BuiltinFont::HelveticaBold);
    assert_eq!(title.size, 18.0);
}

#[test]
fn paragraph_lines_descend_by_leading() {
    let sections = vec![
        Section::Title("Report".to_string()),
        Section::Paragraph {
            title: "About".to_string(),
            lines: vec!["first line".to_string(), "second line".to_string()],
        },
    ];
    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);

    assert_eq!(placements.len(), 4);
    // Heading starts one title-advance below the title.
    let heading = &placements[1];
    assert_eq!(heading.text, "About");
    assert_eq!(heading.y, 738.0 - 22.0);
    assert_eq!(heading.font, BuiltinFont::HelveticaBold);
    assert_eq!(heading.size, 12.0);
    // Body lines follow at heading-advance, then leading steps.
    let first = &placements[2];
    let second = &placements[3];
    assert_eq!(first.y, 716.0 - 16.0);
    assert_eq!(second.y, first.y - 14.0);
    assert_eq!(first.font, BuiltinFont::Helvetica);
    assert_eq!(first.size, 11.0);
}

#[test]
fn bullet_items_get_dash_prefix_and_continuation_indent() {
    let long_item = "a bullet item long enough that it cannot possibly fit on a \
                     single wrapped line of eighty-six characters and must continue";
    let sections = vec![Section::Bullets {
        title: "Features".to_string(),
        items: vec!["short item".to_string(), long_item.to_string()],
    }];
    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);

    // Heading + 1 short line + at least 2 wrapped lines.
    assert!(placements.len() >= 4);
    assert_eq!(placements[1].text, "- short item");
    assert!(placements[2].text.starts_with("- a bullet item"));
    assert!(placements[3].text.starts_with("  "));
    assert!(!placements[3].text.starts_with("- "));
    // All bullet lines share the left margin; the indent is encoded
    // in the text prefix, not the x coordinate.
    assert_eq!(placements[2].x, placements[3].x);
}

#[test]
fn bullet_lines_fit_width_with_prefix() {
    let item = "one two three four five six seven eight nine ten eleven twelve \
                thirteen fourteen fifteen sixteen seventeen eighteen nineteen";
    let sections = vec![Section::Bullets {
        title: "B".to_string(),
        items: vec![item.to_string()],
    }];
    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);

    for p in placements.iter().skip(1) {
        // 86-char wrap plus the two-character prefix.
        assert!(p.text.chars().count() <= 88, "too long: {:?}", p.text);
    }
}

#[test]
fn overflow_drops_whole_sections_only() {
    // Paragraph of 8 lines: heading (16) + 8 * 14 + gap (4) = 132pt.
    let lines: Vec<String> = (0..8).map(|i| format!("line {}", i)).collect();
    let make = |name: &str| Section::Paragraph {
        title: name.to_string(),
        lines: lines.clone(),
    };
    // Cursor starts at 738; bottom margin is 54. Capacity is 684pt,
    // enough for five full sections (660) but not six.
    let sections: Vec<Section> =
        (0..8).map(|i| make(&format!("S{}", i))).collect();

    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);

    let headings: Vec<&str> = placements
        .iter()
        .filter(|p| p.font == BuiltinFont::HelveticaBold)
        .map(|p| p.text.as_str())
        .collect();

    // Strictly fewer sections than the input, cut at a boundary.
    assert!(headings.len() < 8);
    assert_eq!(headings, ["S0", "S1", "S2", "S3", "S4", "S5"]);
    // The last placed section is complete: 9 placements each
    // (heading + 8 lines), nothing partial.
    assert_eq!(placements.len(), headings.len() * 9);
    assert_eq!(placements.last().unwrap().text, "line 7");
}

#[test]
fn all_sections_fit_when_there_is_room() {
    let sections = vec![
        Section::Title("T".to_string()),
        Section::Paragraph {
            title: "A".to_string(),
            lines: vec!["x".to_string()],
        },
        Section::Bullets {
            title: "B".to_string(),
            items: vec!["y".to_string()],
        },
    ];
    let placements = LayoutEngine::new(letter_params()).lay_out(&sections);
    assert_eq!(placements.len(), 5);
}
