use std::{fmt::Write as _, mem};

use crate::interpreter::value::number::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is strictly binary: every operator node owns exactly two children
/// and no node is shared. Each node records the byte offset in the source
/// text it was built from, so evaluation errors can point back at the
/// operator that failed.
///
/// Walks over the tree (evaluation, rendering, counting and dropping) use an
/// explicit stack, so a long operator chain never recurses once per level.
#[derive(Debug, PartialEq)]
pub enum Expr {
    /// A numeric leaf, either a literal or a resolved variable.
    Literal {
        /// The constant value.
        value:  Number,
        /// Byte offset of the literal in the source code.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator in the source code.
        offset: usize,
    },
}

impl Expr {
    /// Builds a leaf node.
    #[must_use]
    pub const fn literal(value: Number, offset: usize) -> Self {
        Self::Literal { value, offset }
    }

    /// Builds an operator node that takes ownership of both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, offset: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         offset }
    }

    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::number::Number,
    /// };
    ///
    /// let one = Expr::literal(Number::Integer(1), 0);
    /// let two = Expr::literal(Number::Integer(2), 4);
    /// let expr = Expr::binary(one, BinaryOperator::Add, two, 2);
    ///
    /// assert_eq!(expr.offset(), 2);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. } | Self::BinaryOp { offset, .. } => *offset,
        }
    }

    /// Counts every node in the tree, leaves included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push(&**right);
                pending.push(&**left);
            }
        }
        count
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push((&**right, level + 1));
                pending.push((&**left, level + 1));
            }
        }
        deepest
    }

    /// Renders the tree one node per line, children indented under their
    /// operator, left before right.
    ///
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::number::Number,
    /// };
    ///
    /// let two = Expr::literal(Number::Integer(2), 0);
    /// let half = Expr::literal(Number::Float(3.5), 4);
    /// let expr = Expr::binary(two, BinaryOperator::Mul, half, 2);
    ///
    /// assert_eq!(expr.dump_tree(), "op: '*'\n  left: 2\n  right: 3.5\n");
    /// ```
    #[must_use]
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0, "")];
        while let Some((node, indent, label)) = pending.pop() {
            let pad = "  ".repeat(indent);
            match node {
                Self::Literal { value, .. } => {
                    let _ = writeln!(out, "{pad}{label}{value}");
                },
                Self::BinaryOp { left, op, right, .. } => {
                    let _ = writeln!(out, "{pad}{label}op: '{op}'");
                    pending.push((&**right, indent + 1, "right: "));
                    pending.push((&**left, indent + 1, "left: "));
                },
            }
        }
        out
    }

    /// Moves both children out of an operator node, leaving placeholder
    /// leaves behind.
    fn take_children(&mut self, into: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, .. } = self {
            into.push(mem::replace(left.as_mut(), Self::literal(Number::Integer(0), 0)));
            into.push(mem::replace(right.as_mut(), Self::literal(Number::Integer(0), 0)));
        }
    }
}

/// Tears the tree down with an explicit stack, so dropping a long operator
/// chain does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

/// One step of the parenthesized rendering.
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}

/// Prints the expression fully parenthesized, e.g. `(2 + (3 * 4))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(&**right));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(&**left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

/// Represents a binary operator.
///
/// `*`, `/` and `%` bind tighter than `+` and `-`; all five are
/// left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Maps a source character to its operator.
    ///
    /// ```
    /// use reckon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('%'), Some(BinaryOperator::Mod));
    /// assert_eq!(BinaryOperator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// Returns the character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }

    /// `true` for the low-precedence operators `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `true` for the high-precedence operators `*`, `/` and `%`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
