extern crate mathbox;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;

mod common;

use mathbox::font::ApproxMetrics;
use mathbox::geometry::BBox;
use mathbox::layout::LayoutSettings;
use mathbox::recorder::DrawCmd;
use mathbox::svg::render_svg;


#[derive(Debug, Serialize, Deserialize)]
struct Tests {
    #[serde(rename="Pass")]
    pass: Vec<String>,
    #[serde(rename="Lenient")]
    lenient: Vec<String>,
}

#[test]
fn pass_fail() {
    let tests : Tests = common::load_yaml("tests/data/passfail.yaml");
    let settings = LayoutSettings::new().padding(10);
    let mut fail = 0;

    for test in tests.pass.iter().chain(tests.lenient.iter()) {
        match render(test, &settings) {
            Ok(()) => continue,
            Err(err) => {
                println!("Tex: {}", test);
                println!("Should have passed, failed with: {}", err);
                fail += 1;
            }
        }
    }

    if fail > 0 {
        panic!("{} Pass/Fail tests failed.", fail);
    }
}

#[test]
fn pass_list_renders_to_svg() {
    let tests : Tests = common::load_yaml("tests/data/passfail.yaml");
    for test in tests.pass {
        let svg = render_svg(&test, &LayoutSettings::new(), ApproxMetrics::new());
        assert!(svg.contains("<text"), "{} drew no text", test);
        assert!(!svg.contains(">?</text>"), "{} has an unknown command", test);
    }
}

fn render(tex: &str, settings: &LayoutSettings) -> Result<(), String> {
    let (layout, drawings) = common::record(tex, settings);
    common::check_boxes(&layout.root)?;

    let canvas = BBox::from_dims(0, 0, layout.width, layout.height);
    for cmd in drawings {
        let inked = match cmd {
            DrawCmd::Line { from, to } => BBox::from_segment(from.x, from.y, to.x, to.y),
            // kerns draw nothing
            DrawCmd::Text { ref text, .. } if text.is_empty() => continue,
            DrawCmd::Text { pos, .. } => BBox::single_point(pos.x, pos.y),
            _ => continue,
        };
        if canvas.union(inked) != canvas {
            return Err(format!("{:?} is outside of the {}x{} canvas", inked, layout.width, layout.height));
        }
    }
    Ok(())
}
