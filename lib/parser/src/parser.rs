use ast::{Expr, LiteralValue};
use cursor::Line;
use errors::Diagnostics;
use log::trace;
use scanner::{Scanner, Token, TokenType};

use TokenType::*;

pub type Result<T> = std::result::Result<T, ParserError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error at {at}: {error}")]
pub struct ParserError {
    pub error: ParserErrorType,
    pub line: Line,
    pub at: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParserErrorType {
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expect ')' after expression.")]
    ExpectedRightParen,
    #[error("Expect ':' after then branch of conditional expression.")]
    ExpectedColon,
    #[error("Expect end of expression.")]
    ExpectedEnd,
    #[error("Expect end of input marker.")]
    MissingEof,
}

impl ParserErrorType {
    fn at(self, token: &Token) -> ParserError {
        ParserError { error: self, line: token.line(), at: token.location() }
    }
}

/// Recursive descent over one expression:
///
/// ```text
/// sequence       → conditional ( "," conditional )* ;
/// conditional    → equality ( "?" sequence ":" conditional )? ;
/// equality       → comparison ( ( "!=" | "==" ) comparison )* ;
/// comparison     → addition ( ( ">" | ">=" | "<" | "<=" ) addition )* ;
/// addition       → multiplication ( ( "-" | "+" ) multiplication )* ;
/// multiplication → unary ( ( "*" | "/" ) unary )* ;
/// unary          → ( "!" | "-" ) primary | primary ;
/// primary        → "false" | "true" | "nil" | NUMBER | STRING | "(" sequence ")" ;
/// ```
///
/// The token slice has to end with an `Eof` token, as produced by the scanner.
/// This is checked once on construction, so the cursor can never run past it.
#[derive(Debug)]
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    current: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Result<Self> {
        match tokens.last() {
            Some(last) if last.ty() == Eof => Ok(Self { tokens, current: 0 }),
            Some(last) => Err(ParserErrorType::MissingEof.at(last)),
            None => Err(ParserError {
                error: ParserErrorType::MissingEof,
                line: Line::default(),
                at: "end".to_string(),
            }),
        }
    }

    /// Parses the whole token sequence as a single expression. The first
    /// syntax error aborts the parse, there is no partial tree.
    pub fn parse(mut self) -> Result<Expr<'a>> {
        let expr = self.expression()?;
        self.consume_or_error(Eof, ParserErrorType::ExpectedEnd)?;

        log::debug!("Parsed expression: {}", expr);
        Ok(expr)
    }

    fn expression(&mut self) -> Result<Expr<'a>> {
        self.sequence()
    }

    fn sequence(&mut self) -> Result<Expr<'a>> {
        let mut expr = self.conditional()?;

        while self.match_any(&[Comma]) {
            let operator = self.previous().clone();
            let right = self.conditional()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn conditional(&mut self) -> Result<Expr<'a>> {
        let condition = self.equality()?;

        if self.match_any(&[QuestionMark]) {
            let then_branch = self.expression()?;
            self.consume_or_error(Colon, ParserErrorType::ExpectedColon)?;
            let else_branch = self.conditional()?;
            return Ok(Expr::conditional(condition, then_branch, else_branch));
        }

        Ok(condition)
    }

    fn equality(&mut self) -> Result<Expr<'a>> {
        self.left_associative(&[BangEqual, EqualEqual], Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr<'a>> {
        self.left_associative(&[Greater, GreaterEqual, Less, LessEqual], Self::addition)
    }

    fn addition(&mut self) -> Result<Expr<'a>> {
        self.left_associative(&[Minus, Plus], Self::multiplication)
    }

    fn multiplication(&mut self) -> Result<Expr<'a>> {
        self.left_associative(&[Star, Slash], Self::unary)
    }

    fn unary(&mut self) -> Result<Expr<'a>> {
        if self.match_any(&[Bang, Minus]) {
            let operator = self.previous().clone();
            let right = self.primary()?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr<'a>> {
        trace!("Parsing primary at {:?}", self.peek());

        if self.match_any(&[False]) {
            return Ok(Expr::Literal(LiteralValue::Boolean(false)));
        }
        if self.match_any(&[True]) {
            return Ok(Expr::Literal(LiteralValue::Boolean(true)));
        }
        if self.match_any(&[Nil]) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }

        if self.match_any(&[Number, Str]) {
            let Some(literal) = self.previous().literal() else {
                unreachable!("number and string tokens always carry a literal")
            };
            return Ok(Expr::Literal(literal.into()));
        }

        if self.match_any(&[LeftParen]) {
            let expr = self.expression()?;
            self.consume_or_error(RightParen, ParserErrorType::ExpectedRightParen)?;
            return Ok(Expr::grouping(expr));
        }

        Err(ParserErrorType::ExpectedExpression.at(self.peek()))
    }

    /// Folds `operand (operator operand)*` into left-nested binary nodes.
    fn left_associative(
        &mut self,
        operators: &[TokenType],
        mut operand: impl FnMut(&mut Self) -> Result<Expr<'a>>,
    ) -> Result<Expr<'a>> {
        let mut expr = operand(self)?;

        while self.match_any(operators) {
            let operator = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Skips tokens until a likely statement boundary: just past a `;`, or
    /// right before a keyword that starts a statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().ty() == Semicolon {
                return;
            }

            match self.peek().ty() {
                Class | Fun | Var | For | If | While | Print | Return => return,
                _ => {
                    trace!("Skipping {:?} while synchronizing", self.peek());
                    self.advance();
                }
            }
        }
    }
}

// Helpers
impl<'t, 'a> Parser<'t, 'a> {
    pub fn match_any(&mut self, types: &[TokenType]) -> bool {
        if types.iter().any(|&ty| self.check(ty)) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn consume_or_error(&mut self, ty: TokenType, error: ParserErrorType) -> Result<&'t Token<'a>> {
        if self.check(ty) {
            Ok(self.advance())
        } else {
            Err(error.at(self.peek()))
        }
    }

    fn check(&self, ty: TokenType) -> bool {
        self.peek().ty() == ty
    }

    // Never moves past `Eof`, which `new` guarantees to be the last token.
    fn advance(&mut self) -> &'t Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().ty() == Eof
    }

    pub fn peek(&self) -> &'t Token<'a> {
        let tokens: &'t [Token<'a>] = self.tokens;
        &tokens[self.current]
    }

    pub fn previous(&self) -> &'t Token<'a> {
        let tokens: &'t [Token<'a>] = self.tokens;
        &tokens[self.current.saturating_sub(1)]
    }
}

/// Scans and parses `source` as one expression. All diagnostics of both
/// stages are collected; a tree is only returned if there were none.
pub fn parse_source(source: &str) -> std::result::Result<Expr, Diagnostics> {
    let scanned = Scanner::new(source).scan_tokens();

    let mut diagnostics = Diagnostics::new();
    for e in scanned.errors {
        diagnostics.report(e.line, e.error);
    }

    match Parser::new(&scanned.tokens).and_then(Parser::parse) {
        Ok(expr) if !diagnostics.had_error() => Ok(expr),
        Ok(_) => Err(diagnostics),
        Err(e) => {
            diagnostics.report_at(e.line, e.at, e.error);
            Err(diagnostics)
        }
    }
}
