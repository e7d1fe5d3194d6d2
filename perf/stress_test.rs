/// This executable parses and measures a very large number of formulas
/// Its performance is monitored with `perf` to find out the main
/// cost centers of the `parser` and `layout` modules
///
/// Takes path to a .json file representing a list of strings (as below)
/// and lays out each of them ; prints the number of formulas containing unknown commands
///
/// ```json
/// [
///   "",
///   "X(3823)",
///   "m_\\alpha n_\\alpha = 3",
///   "\\sqrt{s^g/N} \\sqrt{s^m/N} \\le N^{-1/2}",
///   ...
///  ]
///  ```
///
///
/// Run with:
///
/// ```bash
/// CARGO_PROFILE_RELEASE_DEBUG=true cargo flamegraph --root --example stress-test -- PATH_TO_FILE
/// ```

use mathbox::font::ApproxMetrics;
use mathbox::layout::constants::DEFAULT_FONT_SIZE;
use mathbox::layout::engine::measure;
use mathbox::parser::parse;


fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let mut n_unknown  = 0;
	let mut n_compiles = 0;

	let fomulas_file_path = std::env::args().nth(1).ok_or("Usage: stress-test PATH")?;
	eprintln!("Formulas from: {}", fomulas_file_path);

	let formulas_file = std::fs::File::open(&fomulas_file_path)?;
	let formulas_buffer = std::io::BufReader::new(formulas_file);
	let formulas : Vec<String> = serde_json::from_reader(formulas_buffer)?;

	let mut metrics = ApproxMetrics::new();
	for formula in formulas.iter() {
		let mut root = parse(formula, DEFAULT_FONT_SIZE);
		measure(&mut root, &mut metrics);

		let mut unknown = false;
		root.visit(&mut |node| unknown |= node.as_text().map_or(false, |t| t.text == "?"));
		if unknown {
			n_unknown += 1;
		}
		n_compiles += 1;
	}
	eprintln!("{} / {} with unknown commands", n_unknown, n_compiles);
	Ok(())
}
