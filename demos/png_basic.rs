use mathbox::{
    font::backend::ttf_parser::TtfMetrics,
    layout::LayoutSettings,
    render::Renderer,
    tinyskia::TinySkiaBackend,
};
use clap::Parser;

const DEFAULT_OUTPUT_FILE : &str = "test.png";
const DEFAULT_FORMULA: &str = r"\left(\frac{-b\pm\sqrt{b^2-4ac}}{2a}\right)^2";
const DEFAULT_FONT_SIZE : i32 = 28;

#[derive(Parser)]
struct Options {
    #[arg(default_value_t = DEFAULT_FORMULA.to_string(), help = "Formula to render")]
    formula : String,

    #[arg(short, long = "fontfile", help = "TrueType or OpenType font file to use")]
    font_file_path : std::path::PathBuf,

    #[arg(short = 'o', long = "output", help = "PNG output file")]
    output_file_path : Option<std::path::PathBuf>,

    #[arg(short, long, default_value_t = false, help = "Display debug bounding boxes")]
    debug   : bool,

    #[arg(short='s', long = "fontsize", default_value_t = DEFAULT_FONT_SIZE, help = "Font size (in pixels)")]
    font_size : i32,

    #[arg(long, default_value_t = 1.0, help = "Pixels per layout unit")]
    scale : f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let Options { formula, font_file_path, output_file_path, debug, font_size, scale } = Options::parse();
    let output_file_path = output_file_path.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.into());

    // -- Load font
    let font_file = std::fs::read(font_file_path)?;
    let mut metrics = TtfMetrics::parse(&font_file).map_err(mathbox::error::Error::from)?;

    // -- layout
    let settings = LayoutSettings::new().font_size(font_size);
    let mut renderer = Renderer::new();
    renderer.debug = debug;
    let layout = renderer.layout(&formula, &settings, &mut metrics);

    // -- Render to tiny-skia pixmap
    let mut backend = TinySkiaBackend::for_layout(metrics, &layout, scale)?;
    renderer.render(&layout, &mut backend);
    backend.save_png(&output_file_path)?;

    eprintln!("written to {}", output_file_path.display());
    Ok(())
}
