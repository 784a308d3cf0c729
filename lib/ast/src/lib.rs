mod expr;
mod printer;
mod visitor;

pub use expr::{Expr, LiteralValue};
pub use printer::{AstPrinter, RpnPrinter};
pub use visitor::ExprVisitor;
