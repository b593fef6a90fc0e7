// Parse tree definitions for arithmetic expressions

use std::fmt;
use std::mem;

/// Binary operators, grouped by precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Expression level
    Add,
    Sub,
    // Term level
    Mul,
    Div,
}

impl BinOp {
    /// Operator for an additive symbol (`+` or `-`)
    pub fn additive(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            _ => None,
        }
    }

    /// Operator for a multiplicative symbol (`*` or `/`)
    pub fn multiplicative(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the parse tree.
///
/// Operator nodes always own exactly two children, so the "leaf iff no
/// children" rule holds by construction. Parentheses never produce a node of
/// their own.
///
/// Walking, comparing, cloning, printing and dropping all use an explicit
/// stack, so a long flat operator chain never recurses one frame per operator.
#[derive(Debug)]
pub enum Node {
    /// Numeric literal, kept as the literal digit string
    Number(String),
    BinaryOp {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(digits: impl Into<String>) -> Self {
        Node::Number(digits.into())
    }

    pub fn binary(op: BinOp, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The display value of this node: the digits or the operator symbol
    pub fn value(&self) -> &str {
        match self {
            Node::Number(digits) => digits,
            Node::BinaryOp { op, .. } => op.symbol(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    /// Left and right operands, or `None` for a leaf
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Number(_) => None,
            Node::BinaryOp { left, right, .. } => Some((left, right)),
        }
    }

    /// Lazy depth-first pre-order walk yielding `(node, depth)` pairs
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }

    /// Lazy depth-first pre-order walk yielding `(value, depth)` pairs
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { walk: self.walk() }
    }

    /// Fully parenthesized infix form, e.g. `((1 - 2) - 3)`
    pub fn to_infix(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        // A pre-order listing with leaf markers determines a full binary tree
        self.walk().map(shape).eq(other.walk().map(shape))
    }
}

fn shape<'a>((node, depth): (&'a Node, usize)) -> (bool, &'a str, usize) {
    (node.is_leaf(), node.value(), depth)
}

impl Eq for Node {}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Node),
            Build(BinOp),
        }

        // Operands are finished before their operator pops off `steps`
        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Node> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Node::Number(digits)) => built.push(Node::Number(digits.clone())),
                Step::Visit(Node::BinaryOp { op, left, right }) => {
                    steps.push(Step::Build(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Build(op) => match (built.pop(), built.pop()) {
                    (Some(right), Some(left)) => built.push(Node::binary(op, left, right)),
                    _ => unreachable!("operator built before its operands"),
                },
            }
        }

        match built.pop() {
            Some(node) => node,
            None => unreachable!("clone produced no node"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Visit(&'a Node),
            Text(&'static str),
            Op(BinOp),
        }

        let mut stack = vec![Step::Visit(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(Node::Number(digits)) => f.write_str(digits)?,
                Step::Visit(Node::BinaryOp { op, left, right }) => {
                    stack.push(Step::Text(")"));
                    stack.push(Step::Visit(right));
                    stack.push(Step::Op(*op));
                    stack.push(Step::Visit(left));
                    stack.push(Step::Text("("));
                }
                Step::Text(text) => f.write_str(text)?,
                Step::Op(op) => write!(f, " {} ", op)?,
            }
        }
        Ok(())
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach children onto a Vec so each node drops with leaf-only children
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut Node, pending: &mut Vec<Node>) {
    if let Node::BinaryOp { left, right, .. } = node {
        pending.push(mem::replace(left.as_mut(), Node::Number(String::new())));
        pending.push(mem::replace(right.as_mut(), Node::Number(String::new())));
    }
}

/// Pre-order iterator over tree nodes, see [`Node::walk`]
pub struct Walk<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some((left, right)) = node.children() {
            // Right goes first so left is visited first
            self.stack.push((right, depth + 1));
            self.stack.push((left, depth + 1));
        }
        Some((node, depth))
    }
}

/// Pre-order iterator over node values, see [`Node::preorder`]
pub struct Preorder<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|(node, depth)| (node.value(), depth))
    }
}

/// Render a tree one node per line, indented by `indent` spaces per level
pub fn render_tree(node: &Node, indent: usize) -> String {
    let mut out = String::new();
    for (value, depth) in node.preorder() {
        out.push_str(&" ".repeat(depth * indent));
        out.push_str(value);
        out.push('\n');
    }
    out
}
