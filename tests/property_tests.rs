// Property tests over generated well-formed expressions

use exprtree::parser::validate::{count_numbers, count_operators};
use exprtree::parser::{parse, Node, TokenKind};
use proptest::prelude::*;

/// Well-formed expression text, with optional parentheses around sub-expressions
fn expression() -> impl Strategy<Value = String> {
    let leaf = "[0-9]{1,3}";
    leaf.prop_recursive(6, 48, 2, |inner| {
        (
            inner.clone(),
            prop::sample::select(vec!['+', '-', '*', '/']),
            inner,
            any::<bool>(),
        )
            .prop_map(|(left, op, right, grouped)| {
                if grouped {
                    format!("({}{}{})", left, op, right)
                } else {
                    format!("{}{}{}", left, op, right)
                }
            })
    })
}

proptest! {
    #[test]
    fn accepted_trees_are_valid(input in expression()) {
        let outcome = parse(&input).unwrap();
        prop_assert!(outcome.valid);
        prop_assert_eq!(count_operators(&outcome.tree) + 1, count_numbers(&outcome.tree));
    }

    #[test]
    fn parsing_is_idempotent(input in expression()) {
        prop_assert_eq!(parse(&input).unwrap(), parse(&input).unwrap());
    }

    #[test]
    fn infix_rendering_preserves_associativity(input in expression()) {
        let tree = parse(&input).unwrap().tree;
        let rendered = tree.to_infix().replace(' ', "");
        prop_assert_eq!(parse(&rendered).unwrap().tree, tree);
    }

    #[test]
    fn every_leaf_is_a_number_symbol(input in expression()) {
        let outcome = parse(&input).unwrap();
        for (node, _) in outcome.tree.walk() {
            let expected = match node {
                Node::Number(_) => TokenKind::Number,
                Node::BinaryOp { .. } => TokenKind::Operator,
            };
            prop_assert_eq!(outcome.symbols.lookup(node.value()), Some(expected));
        }
    }

    #[test]
    fn foreign_characters_are_rejected(
        input in expression(),
        at in any::<prop::sample::Index>(),
        ch in "[a-z ._]",
    ) {
        let mut chars: Vec<char> = input.chars().collect();
        let index = at.index(chars.len() + 1);
        chars.insert(index, ch.chars().next().unwrap());
        let corrupted: String = chars.into_iter().collect();
        prop_assert!(parse(&corrupted).is_err());
    }
}
