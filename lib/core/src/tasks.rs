//! Task factories. Each builds one [TaskTemplate] per task archetype.

use crate::ast::Ast;
use crate::op::Op;
use crate::template::TaskTemplate;
use crate::trit::Trit;

/// Base building block: `left op right = answer` with one operator slot.
///
/// A `Some` operand is pre-bound and locked; a `None` operand stays
/// unbound for the player. Slots are listed left to right, matching the
/// board positions they bind to.
pub fn binary_task(op: Op, answer: Trit, lock_operator: bool, left: Option<Trit>, right: Option<Trit>) -> TaskTemplate {
    let mut ast = Ast::new();
    let lhs = ast.value_slot(left, left.is_some());
    let rhs = ast.value_slot(right, right.is_some());
    let root = ast.operator_slot(Some(op), lock_operator, lhs, rhs);
    TaskTemplate::new(ast, root, [lhs, rhs], [root], answer)
}

/// The introductory task: `NEUTRAL OR X = TRUE`.
pub fn neutral_or_x_equals_true() -> TaskTemplate {
    binary_task(Op::Or, Trit::True, true, Some(Trit::Neutral), None)
}
