use std::{fmt::Formatter, str::Chars};

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `{:#?}` additionally shows the unconsumed input
        let show_rest = f.alternate();
        let mut debug = f.debug_struct("Cursor");
        debug.field("line", &self.line).field("offset", &self.offset());
        if show_rest {
            debug.field("rest", &self.chars.as_str());
        }
        debug.finish()
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

/// 1-based source line, the unit every diagnostic is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Line(pub usize);

impl Default for Line {
    fn default() -> Self {
        Line(1)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line::default() }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Byte offset of the next character into the source.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Consumes the next character only if it is `expected`.
    pub fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes characters as long as `predicate` holds for the next one.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.next();
        }
    }

    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line.0 += 1;
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexeme_between_offsets() {
        let mut end = Cursor::new("(12 + x)\n");
        end.advance_if('(');
        let start = end.clone();
        end.advance_while(|c| c != ')');

        assert_eq!((start.offset(), end.offset()), (1, 7));
        assert_eq!(start.slice_until(&end), "12 + x");
        assert_eq!(end.slice_until(&end), "");
    }

    #[test]
    fn debug_output() {
        let mut cursor = Cursor::new("ab");
        cursor.next();
        assert_eq!(format!("{cursor:?}"), "Cursor { line: Line(1), offset: 1 }");
        assert!(format!("{cursor:#?}").contains("rest: \"b\""));
    }

    #[test]
    fn line_tracking() {
        let mut cursor = Cursor::new("a\n\nb");

        assert_eq!(cursor.line(), Line(1));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.line(), Line(1));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(2));
        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(3));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), Line(3));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn peeking_does_not_advance() {
        let mut cursor = Cursor::new("xy");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek_next(), Some('y'));
        assert_eq!(cursor.offset(), 0);

        cursor.next();
        assert_eq!(cursor.peek(), Some('y'));
        assert_eq!(cursor.peek_next(), None);

        cursor = "".into();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), Line(1));
    }

    #[test]
    fn conditional_advancing() {
        let mut cursor = Cursor::new("==123.5x");

        assert!(cursor.advance_if('='));
        assert!(!cursor.advance_if('!'));
        assert!(cursor.advance_if('='));

        let start = cursor.clone();
        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(start.slice_until(&cursor), "123");
        assert_eq!(cursor.peek(), Some('.'));

        cursor.advance_while(|c| c == 'y');
        assert_eq!(cursor.peek(), Some('.'));
    }

    #[test]
    fn offsets_are_bytes() {
        let mut cursor = Cursor::new("ä1");
        cursor.next();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek(), Some('1'));
    }
}
