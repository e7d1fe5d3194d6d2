//! Cursor over the input string for the parser
//!
//! The lexer only ever hands out sub-slices of its input, so a parser over an argument block
//! borrows the very same string as its parent while keeping a position of its own.


/// The main structure for reading input, one character, command or argument block at a time
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input : & 'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer positioned on the first character of `input`.
    pub fn new(input: &'a str) -> Lexer<'a> {
        Self { input }
    }

    /// Returns the remaining input
    pub fn input(&self) -> & 'a str {
        self.input
    }

    /// True when all input has been consumed
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns the next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    /// Consumes and returns the next character
    pub fn next_char(&mut self) -> Option<char> {
        let mut chars = self.input.chars();
        let c = chars.next();
        self.input = chars.as_str();
        c
    }

    /// Consumes `prefix` if the input starts with it
    pub fn eat(&mut self, prefix: &str) -> bool {
        match self.input.strip_prefix(prefix) {
            Some(rest) => {
                self.input = rest;
                true
            },
            None => false,
        }
    }

    /// Attempts parsing a control sequence like `\bla`, returning `bla`.
    ///
    /// A command name is either a run of ASCII letters or a single other character (as in `\,`).
    /// A `\` at the end of input yields an empty name.
    pub fn control_sequence(&mut self) -> Option<& 'a str> {
        let mut chars = self.input.chars();
        if chars.next() != Some('\\') {
            return None;
        }

        let start_command = chars.as_str();

        let character = match chars.next() {
            Some(c) => c,
            None => {
                self.input = start_command;
                return Some("");
            },
        };

        // If the first character is non-alphabetic, that is the command and we return it
        if !character.is_ascii_alphabetic() {
            let suffix = chars.as_str();
            self.input = suffix;
            return Some(diff_slices(start_command, suffix));
        }

        // Otherwise, we keep looping while characters are ASCII alphabetic
        let mut end_command = chars.as_str();
        while chars.next().map_or(false, |c| c.is_ascii_alphabetic()) {
            end_command = chars.as_str();
        }

        self.input = end_command;

        Some(diff_slices(start_command, end_command))
    }

    /// Reads a number: a digit followed by any run of digits and dots.
    /// Returns an empty slice if the input does not start with a digit.
    pub fn number(&mut self) -> & 'a str {
        let start = self.input;
        if !self.peek().map_or(false, |c| c.is_ascii_digit()) {
            return "";
        }
        let mut chars = self.input.chars();
        let mut end = chars.as_str();
        while chars.next().map_or(false, |c| c.is_ascii_digit() || c == '.') {
            end = chars.as_str();
        }
        self.input = end;
        diff_slices(start, end)
    }

    /// Reads one argument block, returning its content:
    ///   - `{..}`: everything up to the matching brace, inner braces kept verbatim,
    ///   - `[..]`: everything up to the first `]` (no nesting),
    ///   - otherwise a single character.
    ///
    /// Unterminated blocks run to the end of input.
    pub fn block(&mut self) -> & 'a str {
        if self.eat("{") {
            let start = self.input;
            let mut depth = 1;
            for (idx, c) in start.char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            self.input = &start[idx + 1 ..];
                            return &start[.. idx];
                        }
                    },
                    _ => (),
                }
            }
            self.input = "";
            start
        }
        else if self.eat("[") {
            let start = self.input;
            match start.find(']') {
                Some(idx) => {
                    self.input = &start[idx + 1 ..];
                    &start[.. idx]
                },
                None => {
                    self.input = "";
                    start
                },
            }
        }
        else {
            let start = self.input;
            self.next_char();
            diff_slices(start, self.input)
        }
    }

    /// Reads the body of a `\left .. \right` pair, the opening delimiter being already consumed.
    /// Stops right before the `\right` matching the enclosing `\left`, skipping nested pairs.
    /// Returns the body and whether such a `\right` was found ; if not, the body runs to the end of input.
    pub fn fence_body(&mut self) -> (& 'a str, bool) {
        let start = self.input;
        let mut depth = 0usize;
        let mut scan = self.clone();

        while !scan.is_empty() {
            let here = scan.input;
            match scan.control_sequence() {
                Some("left") => depth += 1,
                Some("right") if depth == 0 => {
                    self.input = here;
                    return (diff_slices(start, here), true);
                },
                Some("right") => depth -= 1,
                Some(_) => (),
                None => { scan.next_char(); },
            }
        }

        self.input = "";
        (start, false)
    }
}

/// Assuming `slice2` is a suffix of `slice1`,
/// returns the prefix of `slice1` that ends just before the first character of `slice2`
fn diff_slices<'a>(slice : & 'a str, suffix : & 'a str) -> & 'a str {
    &slice[.. (slice.len() - suffix.len())]
}


#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::Lexer;

    #[test]
    fn lex_control_sequence() {
        let tests = [
            (r"\cal 0",     Some("cal"), " 0"),
            (r"\$ 0",       Some("$"),   " 0"),
            (r"\cal{} 0",   Some("cal"), "{} 0"),
            (r"\c{} 0",     Some("c"),   "{} 0"),
            (r"\",          Some(""),    ""),
            (r"\ +1",       Some(" "),   "+1"),
            (r"\,x",        Some(","),   "x"),
            (r"\leftarrow", Some("leftarrow"), ""),
            ("\\\u{3B1}b",  Some("\u{3B1}"), "b"),
            (r"_1",         None,        "_1"),
        ];

        for (input, name, remainder) in tests {
            eprintln!("Input: {:?}", input);
            let mut lexer : Lexer = Lexer::new(input);
            let control_sequence = lexer.control_sequence();
            assert_eq!(control_sequence, name);
            assert_eq!(lexer.input(), remainder);
        }
    }

    #[test]
    fn lex_block() {
        let tests = [
            ("{1}+",        "1",       "+"),
            ("{}",          "",        ""),
            ("{fez{fe}}x",  "fez{fe}", "x"),
            ("{ab",         "ab",      ""),
            ("[3]{x}",      "3",       "{x}"),
            ("[[3]]",       "[3",      "]"),
            ("[3",          "3",       ""),
            ("xy",          "x",       "y"),
            ("\u{3B1}y",    "\u{3B1}", "y"),
            ("",            "",        ""),
        ];

        for (input, block, remainder) in tests {
            let mut lexer = Lexer::new(input);
            assert_eq!(lexer.block(), block, "block of {:?}", input);
            assert_eq!(lexer.input(), remainder, "remainder of {:?}", input);
        }
    }

    #[test]
    fn lex_number() {
        let tests = [
            ("3.14+x", "3.14", "+x"),
            ("12..3a", "12..3", "a"),
            ("x1",     "",     "x1"),
            (".5",     "",     ".5"),
        ];

        for (input, number, remainder) in tests {
            let mut lexer = Lexer::new(input);
            assert_eq!(lexer.number(), number);
            assert_eq!(lexer.input(), remainder);
        }
    }

    #[test]
    fn lex_fence_body() {
        let tests = [
            (r"x\right)",                    r"x",               true,  r"\right)"),
            (r"\left[x\right]\right)y",      r"\left[x\right]",  true,  r"\right)y"),
            (r"\leftarrow x\right|",         r"\leftarrow x",    true,  r"\right|"),
            (r"a\rightarrow b\right.",       r"a\rightarrow b",  true,  r"\right."),
            (r"x + y",                       r"x + y",           false, ""),
            (r"\left( x",                    r"\left( x",        false, ""),
        ];

        for (input, body, found, remainder) in tests {
            let mut lexer = Lexer::new(input);
            assert_eq!(lexer.fence_body(), (body, found), "body of {:?}", input);
            assert_eq!(lexer.input(), remainder);
        }
    }

    #[test]
    fn lex_random_input_terminates() {
        const ALPHABET : &[char] = &['\\', '{', '}', '[', ']', 'l', 'e', 'f', 't', 'r', 'i', 'g', 'h', '1', '.', ' ', '\u{3B1}'];
        let mut rng = rand::thread_rng();
        for _ in 0 .. 500 {
            let len = rng.gen_range(0 .. 30);
            let input : String = (0 .. len).map(|_| ALPHABET[rng.gen_range(0 .. ALPHABET.len())]).collect();

            let mut lexer = Lexer::new(&input);
            while !lexer.is_empty() {
                let before = lexer.input().len();
                let _ = lexer.block();
                assert!(lexer.input().len() < before, "no progress on {:?}", input);
            }

            let mut lexer = Lexer::new(&input);
            let (body, _) = lexer.fence_body();
            assert!(input.starts_with(body));
        }
    }
}
