//! Boolean expressions defined as trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::BitXor;
use core::ops::Not;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::efmt::{self, strip_outer_parens, CANONICAL_FMT_CFG};
use crate::*;

/// Partial assignment used for substitution: bound variables map to `Some(value)`.
pub type Substitution = HashMap<String, Option<bool>>;

/// A Boolean expression tree.
///
/// Leaves are named variables or fixed Boolean values, internal nodes are negations or
/// one of the seven binary [operators](Operator). Each node exclusively owns its children.
/// Equality is structural: two trees are equal if they have the same shape and the same leaves.
///
/// Trees are never modified in place: [Node::simplify] and [Node::substitute] build new trees.
/// The ```!```, ```&```, ```|``` and ```^``` operators are overloaded to build raw trees
/// (without any simplification).
///
/// ```
/// use boolfn::Node;
/// # use boolfn::BoolFnError;
/// # fn main() -> Result<(), BoolFnError> {
///
/// let a = Node::var("A");
/// let b = Node::var("B");
/// let expr = a.clone() & (b | !a);
///
/// let parsed: Node = "A AND (B OR NOT A)".parse()?;
/// assert_eq!(expr, parsed);
/// assert_eq!(expr.to_string(), "(A AND (B OR NOT A))");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// A named variable
    Variable(String),

    /// A fixed Boolean value
    Const(bool),

    /// Negation of a sub-expression
    Not(Box<Node>),

    /// Two expressions connected with a binary operator: the seven binary kinds are the
    /// variants of [Operator]
    Operation(Operator, Box<(Node, Node)>),
}

/// Binary operators available in expression trees.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    /// Both children need to be true
    And,
    /// At least one child needs to be true
    Or,
    /// Exactly one child is true
    Xor,
    /// The left child implies the right one
    Imp,
    /// Both children have the same value
    Eqv,
    /// Negated AND
    Nand,
    /// Negated OR
    Nor,
}

impl Operator {
    /// Apply the operator on two Boolean values
    pub fn apply(self, l: bool, r: bool) -> bool {
        match self {
            Operator::And => l && r,
            Operator::Or => l || r,
            Operator::Xor => l != r,
            Operator::Imp => !l || r,
            Operator::Eqv => l == r,
            Operator::Nand => !(l && r),
            Operator::Nor => !(l || r),
        }
    }

    /// Combine the polynomials of the two children.
    ///
    /// The derived operators are expanded directly from their GF(2) identities.
    fn zhegalkin(self, p: Polynomial, q: &Polynomial) -> Polynomial {
        let pq = &p * q;
        match self {
            Operator::And => pq,
            Operator::Or => p + q + &pq,
            Operator::Xor => p + q,
            Operator::Imp => Polynomial::one() + &p + &pq,
            Operator::Eqv => Polynomial::one() + &p + q,
            Operator::Nand => Polynomial::one() + &pq,
            Operator::Nor => Polynomial::one() + &p + q + &pq,
        }
    }
}

impl Node {
    /// Create a variable leaf
    pub fn var(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    /// Create a constant leaf
    pub fn constant(value: bool) -> Self {
        Node::Const(value)
    }

    /// Wrap an expression into a negation
    pub fn negation(child: Node) -> Self {
        Node::Not(Box::new(child))
    }

    /// Connect two expressions with a binary operator
    pub fn operation(op: Operator, left: Node, right: Node) -> Self {
        Node::Operation(op, Box::new((left, right)))
    }

    /// Get the fixed value associated to this node, or none if it is not a constant
    pub fn get_fixed(&self) -> Option<bool> {
        match self {
            Node::Const(b) => Some(*b),
            _ => None,
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        match self {
            Node::Variable(_) | Node::Const(_) => 1,
            Node::Not(child) => 1 + child.size(),
            Node::Operation(_, children) => 1 + children.0.size() + children.1.size(),
        }
    }

    /// Length of the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Node::Variable(_) | Node::Const(_) => 1,
            Node::Not(child) => 1 + child.depth(),
            Node::Operation(_, children) => 1 + children.0.depth().max(children.1.depth()),
        }
    }

    /// Apply local rewrite rules bottom-up and return the simplified tree.
    ///
    /// * Negations: double negations are removed and constants are folded.
    /// * AND, OR: constants are absorbed (or act as identity) and identical children are merged.
    /// * XOR: constants are folded, identical children cancel out.
    /// * IMP, EQV, NAND, NOR are rewritten with AND, OR, XOR and NOT, then simplified.
    ///
    /// Simplified trees only contain variables, constants, NOT, AND, OR and XOR.
    /// The result is a fixed point of the rewrite rules, not a minimal expression.
    pub fn simplify(&self) -> Node {
        match self {
            Node::Variable(_) | Node::Const(_) => self.clone(),
            Node::Not(child) => Self::simplify_not(child.simplify()),
            Node::Operation(op, children) => {
                let (l, r) = (&children.0, &children.1);
                match op {
                    Operator::And => Self::simplify_and(l.simplify(), r.simplify()),
                    Operator::Or => Self::simplify_or(l.simplify(), r.simplify()),
                    Operator::Xor => Self::simplify_xor(l.simplify(), r.simplify()),
                    Operator::Imp => (!l.clone() | r.clone()).simplify(),
                    Operator::Eqv => (!(l.clone() ^ r.clone())).simplify(),
                    Operator::Nand => (!(l.clone() & r.clone())).simplify(),
                    Operator::Nor => (!(l.clone() | r.clone())).simplify(),
                }
            }
        }
    }

    fn simplify_not(child: Node) -> Node {
        match child {
            Node::Not(inner) => *inner,
            Node::Const(b) => Node::Const(!b),
            _ => Node::negation(child),
        }
    }

    fn simplify_and(l: Node, r: Node) -> Node {
        match (l.get_fixed(), r.get_fixed()) {
            (Some(false), _) | (_, Some(false)) => Node::Const(false),
            (Some(true), _) => r,
            (_, Some(true)) => l,
            _ if l == r => l,
            _ => Node::operation(Operator::And, l, r),
        }
    }

    fn simplify_or(l: Node, r: Node) -> Node {
        match (l.get_fixed(), r.get_fixed()) {
            (Some(true), _) | (_, Some(true)) => Node::Const(true),
            (Some(false), _) => r,
            (_, Some(false)) => l,
            _ if l == r => l,
            _ => Node::operation(Operator::Or, l, r),
        }
    }

    fn simplify_xor(l: Node, r: Node) -> Node {
        match (l.get_fixed(), r.get_fixed()) {
            (Some(a), Some(b)) => Node::Const(a != b),
            (Some(false), _) => r,
            (Some(true), _) => Self::simplify_not(r),
            (_, Some(false)) => l,
            (_, Some(true)) => Self::simplify_not(l),
            _ if l == r => Node::Const(false),
            _ => Node::operation(Operator::Xor, l, r),
        }
    }

    /// Replace the bound variables with their value.
    ///
    /// Variables mapped to `None` or absent from the substitution are unchanged.
    /// No simplification is performed: the cofactor of an expression is obtained
    /// by simplifying the result.
    pub fn substitute(&self, values: &Substitution) -> Node {
        match self {
            Node::Variable(name) => match values.get(name) {
                Some(Some(b)) => Node::Const(*b),
                _ => self.clone(),
            },
            Node::Const(_) => self.clone(),
            Node::Not(child) => Node::negation(child.substitute(values)),
            Node::Operation(op, children) => Node::operation(
                *op,
                children.0.substitute(values),
                children.1.substitute(values),
            ),
        }
    }

    /// Compute the Zhegalkin polynomial of this expression.
    ///
    /// Monomials are bitmasks over the provided variable list, which must contain
    /// all variables of the expression.
    pub fn to_zhegalkin(&self, variables: &[String]) -> Result<Polynomial, BoolFnError> {
        Ok(match self {
            Node::Variable(name) => {
                let idx = variables
                    .iter()
                    .position(|v| v == name)
                    .ok_or_else(|| BoolFnError::UnboundVariable(name.clone()))?;
                Polynomial::variable(idx)
            }
            Node::Const(true) => Polynomial::one(),
            Node::Const(false) => Polynomial::zero(),
            Node::Not(child) => child.to_zhegalkin(variables)? + &Polynomial::one(),
            Node::Operation(op, children) => {
                let p = children.0.to_zhegalkin(variables)?;
                let q = children.1.to_zhegalkin(variables)?;
                op.zhegalkin(p, &q)
            }
        })
    }

    /// Canonical rendering without the redundant outer parentheses
    pub fn canonical_string(&self) -> String {
        strip_outer_parens(&self.to_string()).to_string()
    }
}

impl Formula for Node {
    fn eval_with(&self, lookup: &dyn Fn(&str) -> Option<bool>) -> Result<bool, BoolFnError> {
        match self {
            Node::Variable(name) => {
                lookup(name).ok_or_else(|| BoolFnError::UnboundVariable(name.clone()))
            }
            Node::Const(b) => Ok(*b),
            Node::Not(child) => Ok(!child.eval_with(lookup)?),
            Node::Operation(op, children) => Ok(op.apply(
                children.0.eval_with(lookup)?,
                children.1.eval_with(lookup)?,
            )),
        }
    }

    fn collect_variables(&self, variables: &mut BTreeSet<String>) {
        match self {
            Node::Variable(name) => {
                variables.insert(name.clone());
            }
            Node::Const(_) => (),
            Node::Not(child) => child.collect_variables(variables),
            Node::Operation(_, children) => {
                children.0.collect_variables(variables);
                children.1.collect_variables(variables);
            }
        }
    }
}

impl FromStr for Node {
    type Err = BoolFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_expression(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Const(b)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CANONICAL_FMT_CFG.operator(*self))
    }
}

// Fully parenthesized canonical form
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        efmt::write_node(f, self, &CANONICAL_FMT_CFG)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Node {
    type Output = Self;
    fn not(self) -> Self::Output {
        Node::negation(self)
    }
}

impl Not for &Node {
    type Output = Node;
    fn not(self) -> Self::Output {
        Node::negation(self.clone())
    }
}

impl<T: Into<Node>> BitAnd<T> for Node {
    type Output = Node;
    fn bitand(self, rhs: T) -> Self::Output {
        Node::operation(Operator::And, self, rhs.into())
    }
}

impl<T: Into<Node>> BitOr<T> for Node {
    type Output = Node;
    fn bitor(self, rhs: T) -> Self::Output {
        Node::operation(Operator::Or, self, rhs.into())
    }
}

impl<T: Into<Node>> BitXor<T> for Node {
    type Output = Node;
    fn bitxor(self, rhs: T) -> Self::Output {
        Node::operation(Operator::Xor, self, rhs.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::collections::HashMap;
    use test_log::test;

    fn simplified(text: &str) -> Result<String, BoolFnError> {
        Ok(text.parse::<Node>()?.simplify().canonical_string())
    }

    #[test]
    fn construct_and_display() {
        let a = Node::var("A");
        let b = Node::var("B");

        let expr = !(a.clone() | b.clone());
        assert_eq!(expr.to_string(), "NOT (A OR B)");
        assert_eq!(expr.canonical_string(), "NOT (A OR B)");

        let expr = (a.clone() & b.clone()) ^ true;
        assert_eq!(expr.to_string(), "((A AND B) XOR 1)");
        assert_eq!(expr.canonical_string(), "(A AND B) XOR 1");

        let expr = Node::operation(Operator::Nand, a, !!b);
        assert_eq!(expr.to_string(), "(A NAND NOT NOT B)");
        assert_eq!(expr.size(), 5);
        assert_eq!(expr.depth(), 4);
    }

    #[test]
    fn eval() -> Result<(), BoolFnError> {
        let e: Node = "(A AND B) OR (C AND (D OR NOT E))".parse()?;
        let mut env = HashMap::new();
        for (name, value) in [("A", false), ("B", true), ("C", true), ("D", false), ("E", false)] {
            env.insert(name.to_string(), value);
        }
        assert!(e.evaluate(&env)?);

        env.insert("E".to_string(), true);
        assert!(!e.evaluate(&env)?);

        env.remove("C");
        match e.evaluate(&env) {
            Err(BoolFnError::UnboundVariable(name)) => assert_eq!(name, "C"),
            other => panic!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn derived_operators() -> Result<(), BoolFnError> {
        let cases = [
            ("A IMP B", [true, true, false, true]),
            ("A EQV B", [true, false, false, true]),
            ("A NAND B", [true, true, true, false]),
            ("A NOR B", [true, false, false, false]),
            ("A XOR B", [false, true, true, false]),
        ];
        for (text, expected) in cases {
            let e: Node = text.parse()?;
            for (row, value) in expected.iter().enumerate() {
                let mut env = HashMap::new();
                env.insert("A".to_string(), row & 2 != 0);
                env.insert("B".to_string(), row & 1 != 0);
                assert_eq!(e.evaluate(&env)?, *value, "{} at row {}", text, row);
            }
        }
        Ok(())
    }

    #[test]
    fn simplify_rules() -> Result<(), BoolFnError> {
        assert_eq!(simplified("1 AND A")?, "A");
        assert_eq!(simplified("0 OR B")?, "B");
        assert_eq!(simplified("A AND A")?, "A");
        assert_eq!(simplified("A XOR A")?, "0");
        assert_eq!(simplified("A AND 0")?, "0");
        assert_eq!(simplified("A OR 1")?, "1");
        assert_eq!(simplified("NOT NOT A")?, "A");
        assert_eq!(simplified("NOT 1")?, "0");
        assert_eq!(simplified("A XOR 1")?, "NOT A");
        assert_eq!(simplified("1 XOR NOT A")?, "A");
        assert_eq!(simplified("0 XOR B")?, "B");
        assert_eq!(simplified("1 XOR 1")?, "0");
        assert_eq!(simplified("(A OR B) AND (A OR B)")?, "A OR B");
        Ok(())
    }

    #[test]
    fn simplify_derived_operators() -> Result<(), BoolFnError> {
        assert_eq!(simplified("A IMP B")?, "NOT A OR B");
        assert_eq!(simplified("A EQV B")?, "NOT (A XOR B)");
        assert_eq!(simplified("A NAND B")?, "NOT (A AND B)");
        assert_eq!(simplified("A NOR B")?, "NOT (A OR B)");
        assert_eq!(simplified("1 IMP A")?, "A");
        assert_eq!(simplified("A EQV A")?, "1");
        assert_eq!(simplified("NOT (A NAND B)")?, "A AND B");
        Ok(())
    }

    #[test]
    fn simplified_kinds() -> Result<(), BoolFnError> {
        fn check(node: &Node) {
            match node {
                Node::Variable(_) | Node::Const(_) => (),
                Node::Not(child) => check(child),
                Node::Operation(op, children) => {
                    assert!(matches!(op, Operator::And | Operator::Or | Operator::Xor));
                    check(&children.0);
                    check(&children.1);
                }
            }
        }
        let e: Node = "(A IMP B) EQV (C NAND (D NOR A)) IMP NOT B".parse()?;
        let s = e.simplify();
        check(&s);
        assert_eq!(s.simplify(), s);
        assert!(equivalent(&e, &s)?);
        Ok(())
    }

    #[test]
    fn substitute() -> Result<(), BoolFnError> {
        let e: Node = "A AND (B OR NOT A)".parse()?;
        let mut values = Substitution::new();
        values.insert("A".to_string(), Some(true));
        values.insert("B".to_string(), None);

        let s = e.substitute(&values);
        assert_eq!(s.to_string(), "(1 AND (B OR NOT 1))");
        assert_eq!(s.simplify().canonical_string(), "B");
        Ok(())
    }

    #[test]
    fn zhegalkin() -> Result<(), BoolFnError> {
        let vars = vec!["A".to_string(), "B".to_string()];
        let p = "NOT A".parse::<Node>()?.to_zhegalkin(&vars)?;
        assert_eq!(p.monomials().collect::<Vec<_>>(), vec![0, 1]);

        let p = "A OR B".parse::<Node>()?.to_zhegalkin(&vars)?;
        assert_eq!(p.monomials().collect::<Vec<_>>(), vec![1, 2, 3]);

        let nor = "A NOR B".parse::<Node>()?.to_zhegalkin(&vars)?;
        let not_or = "NOT(A OR B)".parse::<Node>()?.to_zhegalkin(&vars)?;
        assert_eq!(nor, not_or);

        let p = "A AND A".parse::<Node>()?.to_zhegalkin(&vars)?;
        assert_eq!(p, Polynomial::variable(0));

        assert!(matches!(
            "C".parse::<Node>()?.to_zhegalkin(&vars),
            Err(BoolFnError::UnboundVariable(_))
        ));
        Ok(())
    }
}
