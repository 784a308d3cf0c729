use std::{fmt::Display, ops::Deref};

use cursor::Line;
use itertools::Itertools;

/// A single reported problem, either from scanning or parsing.
///
/// `location` is the already formatted position inside the line (e.g. `'+'`
/// or `end`); lexical errors have none.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{}: {message}", match location { Some(at) => format!(" at {at}"), None => "".to_string() })]
pub struct Diagnostic {
    pub line: Line,
    pub location: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: Line, message: impl ToString) -> Self {
        Self { line, location: None, message: message.to_string() }
    }

    pub fn at(line: Line, location: impl ToString, message: impl ToString) -> Self {
        Self { line, location: Some(location.to_string()), message: message.to_string() }
    }
}

/// Accumulates diagnostics for one run of the front end. Passed around
/// explicitly instead of flipping a global "had error" flag.
///
/// Lexical errors go through [`Diagnostics::report`], errors anchored at a
/// token through [`Diagnostics::report_at`].
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, line: Line, message: impl ToString) {
        self.0.push(Diagnostic::new(line, message));
    }

    pub fn report_at(&mut self, line: Line, location: impl ToString, message: impl ToString) {
        self.0.push(Diagnostic::at(line, location, message));
    }

    pub fn had_error(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Deref for Diagnostics {
    type Target = Vec<Diagnostic>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formatting() {
        assert_eq!(
            Diagnostic::new(Line(3), "Unexpected character.").to_string(),
            "[line 3] Error: Unexpected character."
        );
        assert_eq!(
            Diagnostic::at(Line(1), "')'", "Expect expression.").to_string(),
            "[line 1] Error at ')': Expect expression."
        );
    }

    #[test]
    fn accumulating() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());

        diagnostics.report(Line(1), "Unterminated string.");
        diagnostics.report_at(Line(2), "end", "Expect expression.");

        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.to_string(),
            "[line 1] Error: Unterminated string.\n[line 2] Error at end: Expect expression."
        );
    }
}
