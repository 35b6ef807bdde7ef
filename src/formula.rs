use crate::BoolFnError;
use std::collections::{BTreeSet, HashMap};

/// Complete assignment of variables used for evaluation
pub type Assignment = HashMap<String, bool>;

/// Common API for all representations of Boolean formulae.
///
/// This trait defines the API to evaluate formulae and list their variables.
/// It is implemented by [expression trees](crate::Node), [gate networks](crate::Gate)
/// and [functions](crate::BooleanFunction).
pub trait Formula {
    /// Evaluate the formula, the lookup provides the value of each variable
    fn eval_with(&self, lookup: &dyn Fn(&str) -> Option<bool>) -> Result<bool, BoolFnError>;

    /// Add all variables used by this formula to the set
    fn collect_variables(&self, variables: &mut BTreeSet<String>);

    /// Sorted list of distinct variables
    fn variables(&self) -> Vec<String> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables.into_iter().collect()
    }

    /// Evaluate the formula with a complete assignment.
    ///
    /// Fails with [BoolFnError::UnboundVariable] if a variable is missing from the assignment.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, BoolFnError> {
        self.eval_with(&|name| assignment.get(name).copied())
    }
}

/// Check that two formulae agree on every assignment of the union of their variables
pub fn equivalent(a: &dyn Formula, b: &dyn Formula) -> Result<bool, BoolFnError> {
    let mut variables = BTreeSet::new();
    a.collect_variables(&mut variables);
    b.collect_variables(&mut variables);
    let variables: Vec<&String> = variables.iter().collect();
    let n = variables.len();

    for row in 0..(1usize << n) {
        let lookup = |name: &str| {
            variables
                .iter()
                .position(|v| v.as_str() == name)
                .map(|p| (row >> (n - 1 - p)) & 1 == 1)
        };
        if a.eval_with(&lookup)? != b.eval_with(&lookup)? {
            return Ok(false);
        }
    }
    Ok(true)
}
