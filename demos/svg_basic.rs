use mathbox::{
    font::ApproxMetrics,
    layout::constants::{DEFAULT_FONT_SIZE, DEFAULT_PADDING},
    layout::LayoutSettings,
    render::Renderer,
    svg::SvgBackend,
};
use clap::Parser;

const DEFAULT_OUTPUT_FILE : &str = "test.svg";
const DEFAULT_FORMULA: &str = r"\int_0^1 \sqrt{1 + x^2}\,\mathrm{d}x = \sum_{n=0}^{\infty} \frac{\alpha^n}{n!}";

#[derive(Parser)]
struct Options {
    #[arg(default_value_t = DEFAULT_FORMULA.to_string(), help = "Formula to render")]
    formula : String,

    #[arg(short = 'i', long, conflicts_with("formula"))]
    formula_path : Option<std::path::PathBuf>,

    #[arg(short = 'o', long = "output", help = "SVG output file")]
    output_file_path : Option<std::path::PathBuf>,

    #[arg(short, long, default_value_t = false, help = "Display debug bounding boxes")]
    debug   : bool,

    #[arg(short='s', long = "fontsize", default_value_t = DEFAULT_FONT_SIZE, help = "Font size (in pixels)")]
    font_size : i32,

    #[arg(short='p', long = "padding", default_value_t = DEFAULT_PADDING, help = "Blank margin around the formula (in pixels)")]
    padding : i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    // -- Parse command-line options
    let Options {mut formula, debug, formula_path, font_size, padding, output_file_path } = Options::parse();
    let output_file_path = output_file_path.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.into());
    if let Some(formula_path) = formula_path {
        formula = std::fs::read_to_string(&formula_path)?;
    }

    let settings = LayoutSettings::new().font_size(font_size).padding(padding);


    // -- parse, measure and frame
    let mut metrics = ApproxMetrics::new();
    let mut renderer = Renderer::new();
    renderer.debug = debug;
    let layout = renderer.layout(&formula, &settings, &mut metrics);


    // -- Render to SVG backend
    let mut backend = SvgBackend::new(metrics);
    renderer.render(&layout, &mut backend);
    std::fs::write(&output_file_path, backend.finish(layout.width, layout.height))?;

    eprintln!("{}x{} formula written to {}", layout.width, layout.height, output_file_path.display());
    Ok(())
}
