use scanner::Token;

use crate::{Expr, LiteralValue};

/// One handler per [`Expr`] variant. [`Expr::accept`] matches exhaustively,
/// so adding a variant forces every visitor to handle it.
pub trait ExprVisitor<'a> {
    type Output;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> Self::Output;

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> Self::Output;

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;

    fn visit_conditional(
        &mut self,
        condition: &Expr<'a>,
        then_branch: &Expr<'a>,
        else_branch: &Expr<'a>,
    ) -> Self::Output;
}
