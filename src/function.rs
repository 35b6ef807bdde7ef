//! Boolean functions defined by an expression, with lazily computed views.

use crate::efmt::strip_outer_parens;
use crate::*;

use log::debug;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A Boolean function built from an expression text.
///
/// The sorted list of distinct variables is fixed at construction: it gives the order
/// of the columns of the truth table and of the bits of minterms (first variable is the most
/// significant bit) and of the Zhegalkin monomials.
///
/// All derived views (simplified form, truth table, polynomial, minimized form, properties)
/// are computed on first use and cached. The caches are write-once cells: a function can be
/// shared between threads, concurrent first uses are serialized.
///
/// Two functions are equal if they are built from the same expression text.
#[derive(Clone, Debug)]
pub struct BooleanFunction {
    expression: String,
    ast: Node,
    variables: Vec<String>,

    simplified: OnceCell<(Node, String)>,
    truth_table: OnceCell<TruthTable>,
    polynomial: OnceCell<Polynomial>,
    zhegalkin: OnceCell<String>,
    minimized: OnceCell<String>,

    preserves_zero: OnceCell<bool>,
    preserves_one: OnceCell<bool>,
    self_dual: OnceCell<bool>,
    monotonic: OnceCell<bool>,
    linear: OnceCell<bool>,
}

impl BooleanFunction {
    /// Parse an expression into a new function
    pub fn new(expression: &str) -> Result<Self, BoolFnError> {
        let ast = parse_expression(expression)?;
        let variables = ast.variables();
        debug!("new function '{}' over {:?}", expression, variables);
        Ok(Self {
            expression: expression.to_string(),
            ast,
            variables,
            simplified: OnceCell::new(),
            truth_table: OnceCell::new(),
            polynomial: OnceCell::new(),
            zhegalkin: OnceCell::new(),
            minimized: OnceCell::new(),
            preserves_zero: OnceCell::new(),
            preserves_one: OnceCell::new(),
            self_dual: OnceCell::new(),
            monotonic: OnceCell::new(),
            linear: OnceCell::new(),
        })
    }

    /// The source text of the function
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Sorted list of distinct variables
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    /// The current expression tree: the simplified one once [BooleanFunction::simplify] was called
    pub fn ast(&self) -> &Node {
        match self.simplified.get() {
            Some((node, _)) => node,
            None => &self.ast,
        }
    }

    /// The canonical rendering of the simplified expression tree
    pub fn simplify(&self) -> &str {
        let (_, text) = self.simplified.get_or_init(|| {
            let node = self.ast.simplify();
            let text = node.canonical_string();
            debug!("simplified '{}' into '{}'", self.expression, text);
            (node, text)
        });
        text
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.variables
            .binary_search_by(|v| v.as_str().cmp(name))
            .ok()
    }

    /// Evaluate the function with the value of each variable given in the canonical order
    fn eval_row(&self, values: &[bool]) -> Result<bool, BoolFnError> {
        self.ast()
            .eval_with(&|name| self.position(name).and_then(|p| values.get(p).copied()))
    }

    /// All assignments of the variables in binary counting order, and the associated output
    pub fn truth_table(&self) -> Result<&TruthTable, BoolFnError> {
        self.truth_table.get_or_try_init(|| {
            debug!("fill truth table of '{}'", self.expression);
            TruthTable::try_from_fn(self.variables.len(), |values| self.eval_row(values))
        })
    }

    /// Indices of the rows of the truth table evaluating to true
    pub fn minterms(&self) -> Result<Vec<usize>, BoolFnError> {
        Ok(self.truth_table()?.minterms())
    }

    /// The Zhegalkin polynomial, monomials being bitmasks over the variables
    pub fn polynomial(&self) -> Result<&Polynomial, BoolFnError> {
        self.polynomial
            .get_or_try_init(|| self.ast().to_zhegalkin(&self.variables))
    }

    /// Render the Zhegalkin polynomial, for example ```A + B + A*B```
    pub fn to_zhegalkin(&self) -> Result<&str, BoolFnError> {
        let text = self.zhegalkin.get_or_try_init(|| {
            self.polynomial()
                .map(|p| p.named(&self.variables).to_string())
        })?;
        Ok(text.as_str())
    }

    /// Does the function evaluate to false when all variables are false
    pub fn preserves_zero(&self) -> Result<bool, BoolFnError> {
        self.preserves_zero
            .get_or_try_init(|| {
                self.eval_row(&vec![false; self.variables.len()])
                    .map(|v| !v)
            })
            .copied()
    }

    /// Does the function evaluate to true when all variables are true
    pub fn preserves_one(&self) -> Result<bool, BoolFnError> {
        self.preserves_one
            .get_or_try_init(|| self.eval_row(&vec![true; self.variables.len()]))
            .copied()
    }

    /// Does complementing all inputs complement the output
    pub fn is_self_dual(&self) -> Result<bool, BoolFnError> {
        self.self_dual
            .get_or_try_init(|| -> Result<bool, BoolFnError> {
                let table = self.truth_table()?;
                let last = table.len() - 1;
                Ok(table
                    .iter()
                    .enumerate()
                    .all(|(i, row)| table.output(i ^ last) != Some(row.output)))
            })
            .copied()
    }

    /// Does switching any input from false to true never switch the output from true to false
    pub fn is_monotonic(&self) -> Result<bool, BoolFnError> {
        self.monotonic
            .get_or_try_init(|| -> Result<bool, BoolFnError> {
                let table = self.truth_table()?;
                let outputs: Vec<bool> = table.iter().map(|r| r.output).collect();
                for (a, out_a) in outputs.iter().enumerate() {
                    for (b, out_b) in outputs.iter().enumerate() {
                        // a is below b if all its true inputs are also true in b
                        if a & !b == 0 && *out_a && !*out_b {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            })
            .copied()
    }

    /// Is the Zhegalkin polynomial free of products of several variables
    pub fn is_linear(&self) -> Result<bool, BoolFnError> {
        self.linear
            .get_or_try_init(|| self.polynomial().map(|p| p.is_linear()))
            .copied()
    }

    /// Collect the five properties
    pub fn properties(&self) -> Result<Properties, BoolFnError> {
        Ok(Properties {
            preserves_zero: self.preserves_zero()?,
            preserves_one: self.preserves_one()?,
            is_self_dual: self.is_self_dual()?,
            is_monotonic: self.is_monotonic()?,
            is_linear: self.is_linear()?,
        })
    }

    /// A minimal sum of products equivalent to this function.
    ///
    /// Constant functions are rendered ```0``` and ```1```. Otherwise the prime implicants selected
    /// by the Quine-McCluskey method are joined with ```OR```, see [Implicants::to_sum_of_products].
    /// Among several minimal covers, the selected one is not specified.
    pub fn minimize(&self) -> Result<&str, BoolFnError> {
        let text = self.minimized.get_or_try_init(|| {
            let table = self.truth_table()?;
            let minterms = table.minterms();
            let text = if minterms.is_empty() {
                String::from("0")
            } else if minterms.len() == table.len() {
                String::from("1")
            } else {
                let cover = quine_mccluskey(&minterms, self.variables.len(), &[]);
                let sop = cover.to_sum_of_products(&self.variables);
                strip_outer_parens(&sop).to_string()
            };
            debug!("minimized '{}' into '{}'", self.expression, text);
            Ok::<_, BoolFnError>(text)
        })?;
        Ok(text.as_str())
    }

    /// The function obtained by fixing the value of one variable.
    ///
    /// The result is built from the canonical rendering of the simplified substitution.
    pub fn cofactor(&self, variable: &str, value: bool) -> Result<BooleanFunction, BoolFnError> {
        if self.position(variable).is_none() {
            return Err(BoolFnError::InvalidArgument {
                variable: variable.to_string(),
            });
        }
        let mut values = Substitution::new();
        values.insert(variable.to_string(), Some(value));
        let text = self.ast().substitute(&values).simplify().canonical_string();
        BooleanFunction::new(&text)
    }

    /// Shannon decomposition: the cofactors for the false and true values of a variable
    pub fn decompose(&self, variable: &str) -> Result<(BooleanFunction, BooleanFunction), BoolFnError> {
        Ok((self.cofactor(variable, false)?, self.cofactor(variable, true)?))
    }

    /// Gather all views into a serializable record
    pub fn record(&self) -> Result<FunctionRecord, BoolFnError> {
        FunctionRecord::from_function(self)
    }
}

impl Formula for BooleanFunction {
    fn eval_with(&self, lookup: &dyn Fn(&str) -> Option<bool>) -> Result<bool, BoolFnError> {
        self.ast().eval_with(lookup)
    }

    fn collect_variables(&self, variables: &mut BTreeSet<String>) {
        variables.extend(self.variables.iter().cloned());
    }
}

impl FromStr for BooleanFunction {
    type Err = BoolFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BooleanFunction::new(s)
    }
}

impl PartialEq for BooleanFunction {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl Eq for BooleanFunction {}

impl Hash for BooleanFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expression.hash(state);
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
