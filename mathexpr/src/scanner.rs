// Backtracking cursor over the source characters. Expressions are short so
// the whole input is buffered up front.
pub struct Scanner {
    buf: Vec<char>,
    start: usize,
    pos: usize,
}

impl Iterator for Scanner {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            buf: source.chars().collect(),
            start: 0,
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn peek(&self) -> Option<char> {
        self.buf.get(self.pos).copied()
    }

    // advance only if the next char is in the 'any' set
    pub fn accept(&mut self, any: &str) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(next) => {
                self.pos += 1;
                Some(next)
            }
            _ => None,
        }
    }

    // skip over the 'over' set, result is whether the scanner advanced
    pub fn skip_all(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // drop whatever was consumed so far
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub fn ignore_ws(&mut self) {
        self.skip_all(" \t\r\n");
        self.ignore();
    }

    // take the consumed lexeme and start fresh
    pub fn extract(&mut self) -> String {
        let lexeme = self.buf[self.start..self.pos].iter().collect();
        self.start = self.pos;
        lexeme
    }
}

/*
 * The caller of these functions is expected to set up the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

// scan numbers like [0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?
// signs are not part of the literal, the tokenizer treats them as operators
pub fn scan_number(scanner: &mut Scanner) -> Option<String> {
    let digits = "0123456789";
    if !scanner.skip_all(digits) {
        return None;
    }
    // check for fractional part, else it's just an integer
    let backtrack = scanner.pos();
    if scanner.accept(".").is_some() && !scanner.skip_all(digits) {
        scanner.set_pos(backtrack);
        return Some(scanner.extract()); // integer
    }
    // check for exponent part
    let backtrack = scanner.pos();
    if scanner.accept("eE").is_some() {
        scanner.accept("+-"); // exponent sign is optional
        if !scanner.skip_all(digits) {
            scanner.set_pos(backtrack);
        }
    }
    Some(scanner.extract())
}

// scan [a-zA-Z_][a-zA-Z0-9_]*
pub fn scan_identifier(scanner: &mut Scanner) -> Option<String> {
    let alfa = concat!("abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ_");
    let alnum = concat!(
        "0123456789",
        "abcdefghijklmnopqrstuvwxyz",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_"
    );
    scanner.accept(alfa)?;
    scanner.skip_all(alnum);
    Some(scanner.extract())
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_number() {
        let tests = vec![
            "987", "0", "41.98", "83.5", "28e3", "54E+2", "54e-33", "85.365e3", "1.4e2",
        ];
        for t in tests.iter() {
            let mut s = Scanner::new(t);
            assert_eq!(Some(t.to_string()), scan_number(&mut s));
        }
    }

    #[test]
    fn test_scan_number_stops_early() {
        // trailing garbage stays in the scanner
        let mut s = Scanner::new("3.x");
        assert_eq!(Some("3".to_string()), scan_number(&mut s));
        assert_eq!(Some('.'), s.peek());
        let mut s = Scanner::new("2e");
        assert_eq!(Some("2".to_string()), scan_number(&mut s));
        assert_eq!(Some('e'), s.peek());
    }

    #[test]
    fn test_scan_identifiers() {
        let tests = vec!["x", "sin", "sqrt", "anyword", "_00", "bla23"];
        for t in tests.iter() {
            let mut s = Scanner::new(t);
            assert_eq!(Some(t.to_string()), scan_identifier(&mut s));
        }
        let mut s = Scanner::new("42");
        assert_eq!(None, scan_identifier(&mut s));
    }
}
