//! Regression tests
extern crate mathbox;

#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;

mod common;

use mathbox::layout::LayoutSettings;
use mathbox::recorder::DrawCmd;

const DRAWINGS_YAML: &str = "tests/data/drawings.yaml";

#[derive(Debug, Serialize, Deserialize)]
struct Case {
    tex:      String,
    width:    i32,
    height:   i32,
    drawings: Vec<DrawCmd>,
}

#[test]
fn drawings_match_history() {
    let cases : Vec<Case> = common::load_yaml(DRAWINGS_YAML);
    let settings = LayoutSettings::new().padding(0);
    let mut fail = 0;

    for case in cases.iter() {
        let (layout, drawings) = common::record(&case.tex, &settings);
        if (layout.width, layout.height) != (case.width, case.height) {
            println!("{}: canvas is {}x{}, expected {}x{}", case.tex, layout.width, layout.height, case.width, case.height);
            fail += 1;
        }
        if drawings != case.drawings {
            println!("{}: drew {:#?}", case.tex, drawings);
            fail += 1;
        }
    }

    if fail > 0 {
        panic!("{} regressions.", fail);
    }
}

#[test]
fn padding_shifts_drawings() {
    let (plain, plain_drawings) = common::record(r"\frac{1}{2}", &LayoutSettings::new().padding(0));
    let (padded, padded_drawings) = common::record(r"\frac{1}{2}", &LayoutSettings::new().padding(5));
    assert_eq!((padded.width, padded.height), (plain.width + 10, plain.height + 10));

    for (before, after) in plain_drawings.iter().zip(padded_drawings.iter()) {
        match (before, after) {
            (DrawCmd::Text { pos: p, .. }, DrawCmd::Text { pos: q, .. }) => assert_eq!(p.translate(5, 5), *q),
            (DrawCmd::Line { from: p, .. }, DrawCmd::Line { from: q, .. }) => assert_eq!(p.translate(5, 5), *q),
            _ => panic!("drawings differ in kind"),
        }
    }
}

#[test]
fn font_is_selected_before_every_text() {
    let mut backend = mathbox::recorder::RecordingBackend::new(common::metrics());
    mathbox::render(r"\sum_{i} x^{\frac{1}{2}} \int_0^1", &mut backend, &LayoutSettings::new());

    let commands = backend.commands();
    for (idx, cmd) in commands.iter().enumerate() {
        if let DrawCmd::Text { .. } = cmd {
            assert!(idx >= 2, "text drawn before selecting a font");
            assert!(matches!(commands[idx - 1], DrawCmd::SetFontStyle(_)), "style not selected before {:?}", cmd);
            assert!(matches!(commands[idx - 2], DrawCmd::SetFontSize(_)), "size not selected before {:?}", cmd);
        }
    }
}
