use std::fmt::{Display, Formatter};

use log::debug;
use snafu::{OptionExt, Snafu};
use tap::Tap;

use crate::op::Op;
use crate::trit::Trit;

/// Handle of a node inside an [Ast] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Node {
    /// Fixed leaf holding a constant value.
    Const(Trit),
    /// Fixed negation with a single child.
    Not { arg: NodeId },
    /// Fixed binary operator node.
    Binary { op: Op, lhs: NodeId, rhs: NodeId },
    /// Mutable leaf; `None` until a value is bound.
    ValueSlot { value: Option<Trit>, locked: bool },
    /// Mutable operator node; ignores `rhs` while bound to `Not`.
    OperatorSlot {
        op: Option<Op>,
        locked: bool,
        lhs: NodeId,
        rhs: NodeId,
    },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum EvalError {
    #[snafu(display("Value slot {} is unbound", id))]
    UnboundValueSlot { id: NodeId },
    #[snafu(display("Operator slot {} is unbound", id))]
    UnboundOperatorSlot { id: NodeId },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SlotError {
    #[snafu(display("Node {} is not a value slot", id))]
    NotAValueSlot { id: NodeId },
    #[snafu(display("Node {} is not an operator slot", id))]
    NotAnOperatorSlot { id: NodeId },
}

/// Arena-owned expression tree. Node handles are indices into the arena.
/// The tree shape is fixed once built; only slot contents mutate.
#[derive(Debug, Default, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

// Constructors
impl Ast {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn constant(&mut self, value: Trit) -> NodeId {
        self.alloc(Node::Const(value))
    }

    pub fn not(&mut self, arg: NodeId) -> NodeId {
        debug_assert!(arg.index() < self.nodes.len());
        self.alloc(Node::Not { arg })
    }

    pub fn binary(&mut self, op: Op, lhs: NodeId, rhs: NodeId) -> NodeId {
        debug_assert_eq!(op.arity(), 2, "use Ast::not for the unary operator");
        debug_assert!(lhs.index() < self.nodes.len());
        debug_assert!(rhs.index() < self.nodes.len());
        self.alloc(Node::Binary { op, lhs, rhs })
    }

    pub fn value_slot(&mut self, value: Option<Trit>, locked: bool) -> NodeId {
        self.alloc(Node::ValueSlot { value, locked })
    }

    pub fn operator_slot(&mut self, op: Option<Op>, locked: bool, lhs: NodeId, rhs: NodeId) -> NodeId {
        debug_assert!(lhs.index() < self.nodes.len());
        debug_assert!(rhs.index() < self.nodes.len());
        self.alloc(Node::OperatorSlot { op, locked, lhs, rhs })
    }
}

impl Ast {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current value of a value slot, `None` while unbound.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a value slot.
    pub fn value(&self, id: NodeId) -> Option<Trit> {
        match *self.node(id) {
            Node::ValueSlot { value, .. } => value,
            ref node => panic!("Node {} is not a value slot: {:?}", id, node),
        }
    }

    /// Current operator of an operator slot, `None` while unbound.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an operator slot.
    pub fn operator(&self, id: NodeId) -> Option<Op> {
        match *self.node(id) {
            Node::OperatorSlot { op, .. } => op,
            ref node => panic!("Node {} is not an operator slot: {:?}", id, node),
        }
    }

    /// Whether the slot is locked for interaction.
    ///
    /// Locking is advisory: the presentation layer reads it and refuses to
    /// offer interaction on locked slots. The mutators below do not check it.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a slot node.
    pub fn is_locked(&self, id: NodeId) -> bool {
        match *self.node(id) {
            Node::ValueSlot { locked, .. } | Node::OperatorSlot { locked, .. } => locked,
            ref node => panic!("Node {} is not a slot: {:?}", id, node),
        }
    }
}

// Slot mutation; lock state is never checked here.
impl Ast {
    pub fn set_value(&mut self, id: NodeId, value: Trit) -> Result<(), SlotError> {
        match self.nodes[id.index()] {
            Node::ValueSlot { value: ref mut slot, .. } => {
                *slot = Some(value);
                Ok(())
            }
            _ => NotAValueSlotSnafu { id }.fail(),
        }
    }

    /// Resets a value slot to the unbound state.
    pub fn clear_value(&mut self, id: NodeId) -> Result<(), SlotError> {
        match self.nodes[id.index()] {
            Node::ValueSlot { value: ref mut slot, .. } => {
                *slot = None;
                Ok(())
            }
            _ => NotAValueSlotSnafu { id }.fail(),
        }
    }

    pub fn set_operator(&mut self, id: NodeId, op: Op) -> Result<(), SlotError> {
        match self.nodes[id.index()] {
            Node::OperatorSlot { op: ref mut slot, .. } => {
                *slot = Some(op);
                Ok(())
            }
            _ => NotAnOperatorSlotSnafu { id }.fail(),
        }
    }
}

impl Ast {
    /// Recursively evaluates the subtree rooted at `id`.
    /// Fails fast on unbound slots; lock state is irrelevant here.
    pub fn evaluate(&self, id: NodeId) -> Result<Trit, EvalError> {
        debug!("-> Ast::evaluate({})...", self.display(id));
        let value = match *self.node(id) {
            Node::Const(value) => value,
            Node::Not { arg } => self.evaluate(arg)?.not(),
            Node::Binary { op, lhs, rhs } => self.apply(op, lhs, rhs)?,
            Node::ValueSlot { value, .. } => value.context(UnboundValueSlotSnafu { id })?,
            Node::OperatorSlot { op, lhs, rhs, .. } => {
                let op = op.context(UnboundOperatorSlotSnafu { id })?;
                self.apply(op, lhs, rhs)?
            }
        };
        Ok(value.tap(|value| debug!("<- Ast::evaluate({}) = {}", self.display(id), value)))
    }

    // `Not` consumes only `lhs`; `rhs` is left unevaluated.
    fn apply(&self, op: Op, lhs: NodeId, rhs: NodeId) -> Result<Trit, EvalError> {
        let lhs = self.evaluate(lhs)?;
        if op == Op::Not {
            return Ok(lhs.not());
        }
        let rhs = self.evaluate(rhs)?;
        Ok(op.apply(lhs, rhs))
    }

    pub fn display(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { ast: self, id }
    }
}

pub struct NodeDisplay<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ast = self.ast;
        if f.alternate() {
            match *ast.node(self.id) {
                Node::Const(value) => {
                    write!(f, "Const({})", value)
                }
                Node::Not { arg } => {
                    write!(f, "Not({:#})", ast.display(arg))
                }
                Node::Binary { op, lhs, rhs } => {
                    write!(f, "{}({:#}, {:#})", op.name(), ast.display(lhs), ast.display(rhs))
                }
                Node::ValueSlot { value: Some(value), .. } => {
                    write!(f, "Slot({})", value)
                }
                Node::ValueSlot { value: None, .. } => {
                    write!(f, "Slot(X)")
                }
                Node::OperatorSlot { op: Some(op), lhs, rhs, .. } => {
                    write!(f, "OpSlot({}, {:#}, {:#})", op.name(), ast.display(lhs), ast.display(rhs))
                }
                Node::OperatorSlot { op: None, lhs, rhs, .. } => {
                    write!(f, "OpSlot(?, {:#}, {:#})", ast.display(lhs), ast.display(rhs))
                }
            }
        } else {
            match *ast.node(self.id) {
                Node::Const(value) => {
                    write!(f, "{}", value)
                }
                Node::Not { arg } => {
                    write!(f, "~{}", ast.display(arg))
                }
                Node::Binary { op, lhs, rhs } => {
                    write!(f, "({} {} {})", ast.display(lhs), op, ast.display(rhs))
                }
                Node::ValueSlot { value: Some(value), .. } => {
                    write!(f, "{}", value)
                }
                Node::ValueSlot { value: None, .. } => {
                    write!(f, "X")
                }
                Node::OperatorSlot { op: Some(Op::Not), lhs, .. } => {
                    write!(f, "~{}", ast.display(lhs))
                }
                Node::OperatorSlot { op: Some(op), lhs, rhs, .. } => {
                    write!(f, "({} {} {})", ast.display(lhs), op, ast.display(rhs))
                }
                Node::OperatorSlot { op: None, lhs, rhs, .. } => {
                    write!(f, "({} ? {})", ast.display(lhs), ast.display(rhs))
                }
            }
        }
    }
}
