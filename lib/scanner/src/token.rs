use std::fmt::Display;

use cursor::Line;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub lexeme: &'a str,
    pub line: Line,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData<'a>, lexeme: &'a str, line: Line) -> Token<'a> {
        Self { data, lexeme, line }
    }

    pub fn eof(line: Line) -> Token<'a> {
        Self::new(TokenData::Eof, "", line)
    }

    pub fn ty(&self) -> TokenType {
        (&self.data).into()
    }

    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// The literal value carried by `Number` and `Str` tokens.
    pub fn literal(&self) -> Option<Literal<'a>> {
        match self.data {
            TokenData::Number(n) => Some(Literal::Number(n)),
            TokenData::Str(s) => Some(Literal::Str(s)),
            _ => None,
        }
    }

    /// Where this token sits, in the form used by diagnostics.
    pub fn location(&self) -> String {
        match self.data {
            TokenData::Eof => "end".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Number(f64),
    Str(&'a str),
}

#[derive(Debug, Clone, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(TokenType), derive(Hash, strum::Display))]
pub enum TokenData<'a> {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    QuestionMark,
    Colon,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    Str(&'a str),
    Number(f64),

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl<'a> TokenData<'a> {
    pub fn keyword(identifier: &str) -> Option<TokenData<'a>> {
        use TokenData::*;
        Some(match identifier {
            "and" => And,
            "class" => Class,
            "else" => Else,
            "false" => False,
            "for" => For,
            "fun" => Fun,
            "if" => If,
            "nil" => Nil,
            "or" => Or,
            "print" => Print,
            "return" => Return,
            "super" => Super,
            "this" => This,
            "true" => True,
            "var" => Var,
            "while" => While,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_ignores_payload() {
        let token = Token::new(TokenData::Number(4.0), "4", Line(1));
        assert_eq!(token.ty(), TokenType::Number);
        assert_eq!(token.literal(), Some(Literal::Number(4.0)));

        let token = Token::new(TokenData::Plus, "+", Line(1));
        assert_eq!(token.ty(), TokenType::Plus);
        assert_eq!(token.literal(), None);
    }

    #[test]
    fn locations() {
        assert_eq!(Token::new(TokenData::RightParen, ")", Line(2)).location(), "')'");
        assert_eq!(Token::eof(Line(2)).location(), "end");
    }

    #[test]
    fn keywords() {
        assert_eq!(TokenData::keyword("while"), Some(TokenData::While));
        assert_eq!(TokenData::keyword("nil"), Some(TokenData::Nil));
        assert_eq!(TokenData::keyword("While"), None);
        assert_eq!(TokenData::keyword("whilst"), None);
    }
}
