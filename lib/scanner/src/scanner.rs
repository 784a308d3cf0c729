use std::fmt::Display;

use cursor::{Cursor, Line};
use itertools::Itertools;
use log::trace;

pub mod token;
pub use token::{Literal, Token, TokenData, TokenType};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

/// Output of one scan: the tokens are always terminated by `Eof`, even if
/// lexical errors were found along the way.
#[derive(Debug, PartialEq)]
pub struct Scanned<'a> {
    pub tokens: Vec<Token<'a>>,
    pub errors: Vec<ScanError>,
}

impl<'a> Scanned<'a> {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Display for Scanned<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().map(|t| format!("{:?} {}", t.ty(), t.lexeme)).join("\n"))
    }
}

pub struct Scanner<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
    errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            start: Cursor::new(source),
            current: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Scanned<'a> {
        loop {
            self.start = self.current.clone();
            let Some(c) = self.current.next() else { break };
            self.scan_token(c);
        }

        self.tokens.push(Token::eof(self.current.line()));
        log::debug!("Scanned {} tokens, {} errors", self.tokens.len(), self.errors.len());

        Scanned { tokens: self.tokens, errors: self.errors }
    }

    fn scan_token(&mut self, c: char) {
        match c {
            '(' => self.add_token(LeftParen),
            ')' => self.add_token(RightParen),
            '{' => self.add_token(LeftBrace),
            '}' => self.add_token(RightBrace),
            ',' => self.add_token(Comma),
            '.' => self.add_token(Dot),
            '-' => self.add_token(Minus),
            '+' => self.add_token(Plus),
            ';' => self.add_token(Semicolon),
            '*' => self.add_token(Star),
            '?' => self.add_token(QuestionMark),
            ':' => self.add_token(Colon),

            '!' => self.add_token_if_matches('=', BangEqual, Bang),
            '=' => self.add_token_if_matches('=', EqualEqual, Equal),
            '<' => self.add_token_if_matches('=', LessEqual, Less),
            '>' => self.add_token_if_matches('=', GreaterEqual, Greater),

            '/' => {
                if self.current.advance_if('/') {
                    // Comment until end of line
                    self.current.advance_while(|c| c != '\n');
                } else if self.current.advance_if('*') {
                    self.block_comment();
                } else {
                    self.add_token(Slash)
                }
            }

            '"' => self.string(),

            d if d.is_ascii_digit() => self.number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            // Newlines are counted by the cursor itself
            ' ' | '\r' | '\t' | '\n' => (),

            c => self.error(ScanErrorType::UnexpectedCharacter(c)),
        }
    }

    fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.current)
    }

    fn add_token(&mut self, data: TokenData<'a>) {
        let token = Token::new(data, self.lexeme(), self.current.line());
        trace!("Scanned token {:?}", token);
        self.tokens.push(token);
    }

    fn add_token_if_matches(&mut self, expected: char, matched: TokenData<'a>, otherwise: TokenData<'a>) {
        if self.current.advance_if(expected) {
            self.add_token(matched)
        } else {
            self.add_token(otherwise)
        }
    }

    fn error(&mut self, error: ScanErrorType) {
        trace!("Scan error on line {}: {:?}", self.current.line(), error);
        self.errors.push(ScanError { error, line: self.current.line() });
    }

    // Block comments don't nest. An unterminated one simply swallows the rest of the input.
    fn block_comment(&mut self) {
        while let Some(c) = self.current.next() {
            if c == '*' && self.current.advance_if('/') {
                return;
            }
        }
    }

    fn string(&mut self) {
        self.current.advance_while(|c| c != '"');

        if !self.current.advance_if('"') {
            self.error(ScanErrorType::UnterminatedString);
            return;
        }

        let lexeme = self.lexeme();
        self.add_token(Str(&lexeme[1..lexeme.len() - 1]));
    }

    fn number(&mut self) {
        self.current.advance_while(|c| c.is_ascii_digit());

        // A fractional part needs at least one digit after the dot
        if self.current.peek() == Some('.') && self.current.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current.next();
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        let value = self.lexeme().parse().expect("digits with an optional fraction are a valid f64");
        self.add_token(Number(value));
    }

    fn identifier(&mut self) {
        self.current.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let data = TokenData::keyword(self.lexeme()).unwrap_or(Identifier);
        self.add_token(data);
    }
}
