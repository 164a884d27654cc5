//! Syntactic placement of parameter usages.
//!
//! A lambda that may contain non-local returns can only be spliced where
//! control can still transfer back to the enclosing call's continuation.
//! Instead of re-walking parent pointers in a syntax tree, the resolver
//! hands each usage an immutable stack of the frames between the expression
//! and its nearest enclosing call, innermost first; legality is a pure
//! function of that stack.

/// One syntactic frame above a parameter usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enclosure {
    /// A parenthesized expression. Transparent.
    Parens,
    /// A block (or block-bodied construct). Transparent.
    Block,
    /// The usage is the invoked callee of a call. Qualifies: invoking the
    /// parameter is itself a splice position.
    Callee,
    /// A direct argument of a call. Qualifies.
    CallArgument,
    /// The target side of an assignment. Poisons the walk.
    AssignmentTarget,
    /// An operand of logical `&&` / `||`. Poisons the walk.
    LogicalOperand,
    /// An operand of a type cast. Poisons the walk.
    CastOperand,
}

/// Whether a usage at the bottom of `enclosure` sits in a position the
/// inliner can splice: a call argument (or the invoked callee itself),
/// reached through parentheses and blocks only. Assignment targets, logical
/// operands, and cast operands block the transfer; so does running out of
/// frames without meeting a call. Positions the resolver cannot express as
/// a frame end the stack and therefore do not qualify.
#[must_use]
pub fn reaches_enclosing_call(enclosure: &[Enclosure]) -> bool {
    for frame in enclosure {
        match frame {
            Enclosure::Parens | Enclosure::Block => continue,
            Enclosure::Callee | Enclosure::CallArgument => return true,
            Enclosure::AssignmentTarget
            | Enclosure::LogicalOperand
            | Enclosure::CastOperand => return false,
        }
    }
    false
}
