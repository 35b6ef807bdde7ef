//! Formatting API for expressions

use crate::{Node, Operator};

use std::fmt;

/// Spellings used when rendering expression trees.
pub struct FormatterConfig<'a> {
    s_not: &'a str,
    s_and: &'a str,
    s_or: &'a str,
    s_xor: &'a str,
    s_imp: &'a str,
    s_eqv: &'a str,
    s_nand: &'a str,
    s_nor: &'a str,
}

/// Word operators: the canonical rendering, e.g. `(NOT A AND B)`
pub static CANONICAL_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "NOT ",
    s_and: "AND",
    s_or: "OR",
    s_xor: "XOR",
    s_imp: "IMP",
    s_eqv: "EQV",
    s_nand: "NAND",
    s_nor: "NOR",
};

/// Unicode math symbols, e.g. `(¬A ∧ B)`
pub static SYMBOLIC_FMT_CFG: FormatterConfig = FormatterConfig {
    s_not: "¬",
    s_and: "∧",
    s_or: "∨",
    s_xor: "⊕",
    s_imp: "→",
    s_eqv: "↔",
    s_nand: "↑",
    s_nor: "↓",
};

/// Display wrapper rendering an expression with a specific configuration
pub struct Formatted<'a> {
    node: &'a Node,
    cfg: &'a FormatterConfig<'a>,
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Xor => self.s_xor,
            Operator::Imp => self.s_imp,
            Operator::Eqv => self.s_eqv,
            Operator::Nand => self.s_nand,
            Operator::Nor => self.s_nor,
        }
    }

    pub fn negation(&self) -> &str {
        self.s_not
    }

    pub fn infix<'a>(&'a self, node: &'a Node) -> Formatted<'a> {
        Formatted { node, cfg: self }
    }
}

/// Write an expression tree, parenthesizing every binary operation.
pub(crate) fn write_node(f: &mut fmt::Formatter, node: &Node, cfg: &FormatterConfig) -> fmt::Result {
    match node {
        Node::Variable(name) => write!(f, "{}", name),
        Node::Const(b) => write!(f, "{}", if *b { "1" } else { "0" }),
        Node::Not(child) => {
            write!(f, "{}", cfg.negation())?;
            write_node(f, child, cfg)
        }
        Node::Operation(op, children) => {
            write!(f, "(")?;
            write_node(f, &children.0, cfg)?;
            write!(f, " {} ", cfg.operator(*op))?;
            write_node(f, &children.1, cfg)?;
            write!(f, ")")
        }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_node(f, self.node, self.cfg)
    }
}

/// Remove a redundant pair of parentheses around a whole expression.
///
/// The pair is removed only if the first opening parenthesis closes at the very end of the text.
pub fn strip_outer_parens(text: &str) -> &str {
    let text = text.trim();
    if !(text.starts_with('(') && text.ends_with(')')) {
        return text;
    }

    let mut depth = 0usize;
    let last = text.len() - 1;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => (),
        }
        if depth == 0 && i < last {
            return text;
        }
    }
    text[1..last].trim()
}
