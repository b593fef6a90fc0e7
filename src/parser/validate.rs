//! Structural self-check over a finished parse tree
//!
//! A tree is accepted when it has exactly one fewer operator than numbers.
//! Every operator node owns two children, so any tree the parser builds
//! passes; the check guards trees assembled by other means.

use crate::parser::ast::Node;

/// Count operator (internal) nodes
pub fn count_operators(node: &Node) -> usize {
    node.walk()
        .filter(|(node, _)| matches!(node, Node::BinaryOp { .. }))
        .count()
}

/// Count number (leaf) nodes
pub fn count_numbers(node: &Node) -> usize {
    node.walk()
        .filter(|(node, _)| matches!(node, Node::Number(_)))
        .count()
}

/// True iff `operators == numbers - 1`
pub fn is_valid_input(tree: &Node) -> bool {
    count_operators(tree) + 1 == count_numbers(tree)
}
