/*! # A small typesetting engine for mathematical formulas.

This library takes a formula written in a subset of TeX syntax (e.g. `\frac{\pi}{4} + \sqrt[3]{x_1}`) and renders it to an SVG document, an image, a screen, etc.

The boxes of the formula are computed with integer device units. Text is measured by whoever draws it, so the same formula
can be laid out against a real font, a system font through cairo, or a font-independent approximation.

## Basic usage

To render a formula, you need a graphical backend, which also measures text. The SVG backend with approximate metrics needs no font file:

```
use mathbox::{font::ApproxMetrics, layout::LayoutSettings, svg::render_svg};

let svg = render_svg(r"e = \lim_{n \to \infty} \left(1 + \frac{1}{n}\right)^n", &LayoutSettings::new(), ApproxMetrics::new());
assert!(svg.starts_with("<svg"));
```

Any [`Backend`] can be drawn on with [`render`], which returns the [`Layout`](crate::layout::Layout) it drew:

```
use mathbox::{font::FixedMetrics, layout::LayoutSettings, recorder::RecordingBackend};

let mut backend = RecordingBackend::new(FixedMetrics::default());
let layout = mathbox::render(r"x^2", &mut backend, &LayoutSettings::new().padding(0));
assert!(layout.width > 0);
assert!(backend.drawings().count() == 2);
```

Notes:

 - `render` draws on a canvas of `layout.width x layout.height` units, the formula being inset by `settings.padding` units.
 - The unit is whatever unit is used when making calls to the graphical backend directly. With Cairo and tiny-skia (at scale 1), these are pixels.


## More complex cases

You sometimes need more control. The call to `render` is a wrapper around three operations and we may break these steps apart:

  1. Parsing the formula into a tree of [`Node`](crate::layout::Node)s, cf [`parse`](crate::parser::parse).
  2. Measuring every node of the tree with some text metrics, cf [`measure`](crate::layout::engine::measure).
  3. Drawing the measured nodes on a certain graphical backend, cf [`draw`](crate::render::draw).

```
use mathbox::{font::FixedMetrics, layout::engine::measure, parser::parse, recorder::RecordingBackend, draw};

// Step 1: parsing formula into nodes, at font size 28
let mut root = parse(r"\sum_{k=1}^n k", 28);

// Step 2: computing the box of every node
let mut backend = RecordingBackend::new(FixedMetrics::default());
measure(&mut root, &mut backend);
let descent = root.height - root.ascent;

// Step 3: drawing with the top-left corner at (10, 10)
draw(&root, &mut backend, 10, 10);
assert!(descent > 0);
```

## Implementing backends

The [`Backend`](crate::render::Backend) trait consists of two traits: [`TextMetrics`](crate::render::TextMetrics) and [`GraphicsBackend`](crate::render::GraphicsBackend).
[`TextMetrics`](crate::render::TextMetrics) selects a font size and style and measures strings in that font ; this is all that step 2 needs.
[`GraphicsBackend`](crate::render::GraphicsBackend) strokes lines and draws strings in the selected font.
Some features provide implementations for common font parsing crates and graphical backends.
*/



#[macro_use]
extern crate serde_derive;



#[macro_use]
extern crate log;

#[deny(missing_docs)]
pub mod error;
#[deny(missing_docs)]
pub mod geometry;
#[deny(missing_docs)]
pub mod layout;
#[warn(missing_docs)]
pub mod parser;
#[deny(missing_docs)]
pub mod render;

pub mod font;

pub use render::*;

use crate::layout::{Layout, LayoutSettings};


/// Render a LaTeX formula to a given surface `backend`, which also measures text.
/// Returns the layout that was drawn, whose dimensions are those of the canvas.
pub fn render<B : Backend>(formula : &str, backend : &mut B, settings: &LayoutSettings) -> Layout {
    let renderer = Renderer::new();
    let layout = renderer.layout(formula, settings, backend);
    renderer.render(&layout, backend);
    layout
}
