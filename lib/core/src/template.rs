use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::ast::{Ast, EvalError, Node, NodeId, SlotError};
use crate::op::Op;
use crate::trit::Trit;

/// One fully constructed puzzle instance: the owned expression tree, the
/// ordered slot handles the board binds by position, and the value the
/// root must evaluate to when solved.
#[derive(Debug, Clone)]
pub struct TaskTemplate {
    ast: Ast,
    root: NodeId,
    value_slots: Vec<NodeId>,
    operator_slots: Vec<NodeId>,
    answer: Trit,
}

impl TaskTemplate {
    /// Slot lists must come in the left-to-right order of the board
    /// positions they bind to.
    pub fn new<V, O>(ast: Ast, root: NodeId, value_slots: V, operator_slots: O, answer: Trit) -> Self
    where
        V: IntoIterator<Item = NodeId>,
        O: IntoIterator<Item = NodeId>,
    {
        let value_slots = value_slots.into_iter().collect_vec();
        let operator_slots = operator_slots.into_iter().collect_vec();
        debug_assert!(root.index() < ast.len());
        debug_assert!(value_slots.iter().all(|&id| matches!(ast.node(id), Node::ValueSlot { .. })));
        debug_assert!(operator_slots
            .iter()
            .all(|&id| matches!(ast.node(id), Node::OperatorSlot { .. })));
        Self {
            ast,
            root,
            value_slots,
            operator_slots,
            answer,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn answer(&self) -> Trit {
        self.answer
    }

    pub fn value_slots(&self) -> &[NodeId] {
        &self.value_slots
    }

    pub fn operator_slots(&self) -> &[NodeId] {
        &self.operator_slots
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn value(&self, id: NodeId) -> Option<Trit> {
        self.ast.value(id)
    }

    pub fn operator(&self, id: NodeId) -> Option<Op> {
        self.ast.operator(id)
    }

    pub fn is_locked(&self, id: NodeId) -> bool {
        self.ast.is_locked(id)
    }

    pub fn set_value(&mut self, id: NodeId, value: Trit) -> Result<(), SlotError> {
        self.ast.set_value(id, value)
    }

    pub fn clear_value(&mut self, id: NodeId) -> Result<(), SlotError> {
        self.ast.clear_value(id)
    }

    pub fn set_operator(&mut self, id: NodeId, op: Op) -> Result<(), SlotError> {
        self.ast.set_operator(id, op)
    }

    /// Evaluates the whole expression.
    pub fn evaluate(&self) -> Result<Trit, EvalError> {
        self.ast.evaluate(self.root)
    }
}

impl Display for TaskTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.ast.display(self.root), self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskTemplate {
        let mut ast = Ast::new();
        let a = ast.value_slot(Some(Trit::Neutral), true);
        let b = ast.value_slot(None, false);
        let root = ast.operator_slot(Some(Op::Or), true, a, b);
        TaskTemplate::new(ast, root, [a, b], [root], Trit::True)
    }

    #[test]
    fn test_template_slot_order() {
        let template = sample();
        assert_eq!(template.value_slots().len(), 2);
        assert_eq!(template.operator_slots().len(), 1);
        let a = template.value_slots()[0];
        let b = template.value_slots()[1];
        assert_eq!(template.value(a), Some(Trit::Neutral));
        assert_eq!(template.value(b), None);
    }

    #[test]
    fn test_template_display() {
        let template = sample();
        assert_eq!(format!("{}", template), "(1 | X) = 2");
    }

    #[test]
    fn test_template_mutation_and_evaluate() {
        let mut template = sample();
        let free = template.value_slots()[1];
        template.set_value(free, Trit::False).unwrap();
        assert_eq!(template.evaluate(), Ok(Trit::Neutral));
        template.set_value(free, Trit::True).unwrap();
        assert_eq!(template.evaluate(), Ok(template.answer()));
    }
}
