use itertools::Itertools;
use scanner::Token;

use crate::{Expr, ExprVisitor, LiteralValue};

/// Renders an expression in reverse polish notation: operands first, then
/// the operator. Groupings vanish, since postfix order is already unambiguous.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl<'a> ExprVisitor<'a> for RpnPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{} {} {}", left.accept(self), right.accept(self), operator.lexeme())
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        expression.accept(self)
    }

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        format!("{} {}", right.accept(self), operator.lexeme())
    }

    fn visit_conditional(
        &mut self,
        condition: &Expr<'a>,
        then_branch: &Expr<'a>,
        else_branch: &Expr<'a>,
    ) -> String {
        format!("{} {} {} ?:", condition.accept(self), then_branch.accept(self), else_branch.accept(self))
    }
}

/// Renders an expression fully parenthesized in prefix form, e.g. `(+ 1 (group 2))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize<'a>(&mut self, name: &str, exprs: &[&Expr<'a>]) -> String {
        format!("({name} {})", exprs.iter().map(|e| e.accept(self)).join(" "))
    }
}

impl<'a> ExprVisitor<'a> for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme(), &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String {
        match value {
            LiteralValue::Str(s) => format!("\"{s}\""),
            value => value.to_string(),
        }
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme(), &[right])
    }

    fn visit_conditional(
        &mut self,
        condition: &Expr<'a>,
        then_branch: &Expr<'a>,
        else_branch: &Expr<'a>,
    ) -> String {
        self.parenthesize("?:", &[condition, then_branch, else_branch])
    }
}
