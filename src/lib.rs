//! Parse, simplify, classify and minimize Boolean functions.
//!
//! A [Boolean expression](Node) is a tree whose leaves are named variables or constants and whose
//! internal nodes are negations or binary operators (AND, OR, XOR, IMP, EQV, NAND, NOR).
//! Expressions are parsed from text: each operator accepts a word form (```AND```, ```and```),
//! an ASCII spelling (```&&```, ```&```) and a unicode symbol (```∧```).
//!
//! ```
//! use boolfn::{Formula, Node};
//! use std::collections::HashMap;
//! # use boolfn::BoolFnError;
//! # fn main() -> Result<(), BoolFnError> {
//!
//! // The spellings of an operator lead to the same tree
//! let e1: Node = "A AND (B OR NOT C)".parse()?;
//! let e2: Node = "A && (B || !C)".parse()?;
//! let e3: Node = "A ∧ (B ∨ ¬C)".parse()?;
//! assert_eq!(e1, e2);
//! assert_eq!(e1, e3);
//!
//! // Evaluate the expression with a complete assignment
//! let mut values = HashMap::new();
//! values.insert("A".to_string(), true);
//! values.insert("B".to_string(), false);
//! values.insert("C".to_string(), false);
//! assert!(e1.evaluate(&values)?);
//!
//! // Local simplification rules
//! let e: Node = "1 AND (A XOR A) OR B".parse()?;
//! assert_eq!(e.simplify().canonical_string(), "B");
//! # Ok(())
//! # }
//! ```
//!
//! # Boolean functions
//!
//! A [Boolean function](BooleanFunction) wraps an expression with the sorted list of its variables.
//! This order defines the columns of the [truth table](TruthTable), the bits of minterms
//! (the first variable is the most significant one) and the variables of the
//! [Zhegalkin polynomial](Polynomial). All views are computed lazily and cached.
//!
//! ```
//! use boolfn::BooleanFunction;
//! # use boolfn::BoolFnError;
//! # fn main() -> Result<(), BoolFnError> {
//!
//! let f = BooleanFunction::new("A OR B")?;
//! assert_eq!(f.variables(), &["A", "B"]);
//! assert_eq!(f.truth_table()?.len(), 4);
//! assert_eq!(f.minterms()?, vec![1, 2, 3]);
//! assert_eq!(f.to_zhegalkin()?, "A + B + A*B");
//!
//! // Classification
//! assert!(f.preserves_zero()?);
//! assert!(f.is_monotonic()?);
//! assert!(!f.is_linear()?);
//! assert!(!f.is_self_dual()?);
//!
//! // Shannon decomposition
//! let (low, high) = f.decompose("A")?;
//! assert_eq!(low.simplify(), "B");
//! assert_eq!(high.simplify(), "1");
//! # Ok(())
//! # }
//! ```
//!
//! # Minimization
//!
//! Functions are minimized with the [Quine-McCluskey](QuineMcCluskey) method: prime
//! [implicants](Implicant) are generated by merging minterms, then a minimum cover is selected.
//! The result is a sum of products using the ```AND```, ```OR``` and ```NOT``` keywords, which
//! can be loaded as a [network of gates](Gate).
//!
//! ```
//! use boolfn::{equivalent, BooleanFunction, Gate};
//! # use boolfn::BoolFnError;
//! # fn main() -> Result<(), BoolFnError> {
//!
//! let f = BooleanFunction::new("(A AND B) OR (A AND NOT B) OR (NOT A AND B AND C)")?;
//! let minimized = f.minimize()?;
//! assert_eq!(minimized, "(B AND C) OR A");
//!
//! let gates: Gate = minimized.parse()?;
//! assert!(equivalent(&f, &gates)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Collections and export
//!
//! A [FunctionSet] gathers functions without duplicated expressions and exports
//! [records](FunctionRecord) of all their views as JSON.

mod cover;
mod efmt;
mod error;
mod expr;
mod formula;
mod function;
mod function_set;
mod gate;
mod implicant;
mod implicants;
mod lexer;
mod parse;
mod primes;
mod qmc;
mod record;
mod truth_table;
mod validate;
mod zhegalkin;

use std::fmt;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use efmt::{strip_outer_parens, FormatterConfig, CANONICAL_FMT_CFG, SYMBOLIC_FMT_CFG};
pub use error::{BoolFnError, LexError, ParseError};
pub use expr::{Node, Operator, Substitution};
pub use formula::{equivalent, Assignment, Formula};
pub use function::BooleanFunction;
pub use function_set::FunctionSet;
pub use gate::Gate;
pub use implicant::Implicant;
pub use implicants::Implicants;
pub use lexer::{tokenize, Token, TokenKind};
pub use parse::{parse, parse_expression};
pub use qmc::{quine_mccluskey, QuineMcCluskey};
pub use record::{FunctionRecord, Properties, TruthTableEntry};
pub use truth_table::{TruthRow, TruthTable};
pub use validate::validate;
pub use zhegalkin::{NamedPolynomial, Polynomial};
