#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use mathbox::font::FixedMetrics;
use mathbox::layout::{Layout, LayoutSettings, Node};
use mathbox::recorder::{DrawCmd, RecordingBackend};

/// Loads a YAML test collection
pub fn load_yaml<T, P>(path: P) -> T
where
    T : serde::de::DeserializeOwned,
    P : AsRef<Path>,
{
    let file = File::open(path.as_ref()).expect("failed to open test collection");
    let reader = BufReader::new(file);
    serde_yaml::from_reader(reader).expect("failed to parse test collection")
}

/// Character width and line height used by tests
pub fn metrics() -> FixedMetrics {
    FixedMetrics::new(10, 20)
}

/// Lays out and draws `tex`, returning the layout and the drawing calls (font selections left out)
pub fn record(tex: &str, settings: &LayoutSettings) -> (Layout, Vec<DrawCmd>) {
    let mut backend = RecordingBackend::new(metrics());
    let layout = mathbox::render(tex, &mut backend, settings);
    let drawings = backend.drawings().cloned().collect();
    (layout, drawings)
}

/// Checks box invariants on every node of a measured tree ; returns a description of the first violation
pub fn check_boxes(root: &Node) -> Result<(), String> {
    let mut violation = None;
    root.visit(&mut |node: &Node| {
        if violation.is_some() {
            return;
        }
        if node.ascent < 0 {
            violation = Some(format!("{} has negative ascent {}", node.kind_name(), node.ascent));
        }
        else if node.width < 0 && !node.is_kern() {
            violation = Some(format!("{} has negative width {}", node.kind_name(), node.width));
        }
        else if node.ascent > node.height {
            violation = Some(format!("{} has ascent {} > height {}", node.kind_name(), node.ascent, node.height));
        }
        else if let Some(children) = node.as_row() {
            let width = children.iter().map(|c| c.width).sum::<i32>().max(0);
            let ascent = children.iter().map(|c| c.ascent).max().unwrap_or(0);
            let descent = children.iter().map(|c| c.height - c.ascent).max().unwrap_or(0);
            if (node.width, node.height, node.ascent) != (width, ascent + descent, ascent) {
                violation = Some(format!("row box {:?} is not composed from its children", (node.width, node.height, node.ascent)));
            }
        }
    });
    violation.map_or(Ok(()), Err)
}
