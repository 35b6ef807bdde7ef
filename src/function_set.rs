use crate::*;

use delegate::delegate;
use log::debug;
use std::slice::Iter;

/// An insertion-ordered collection of functions, without duplicated expressions.
///
/// The collection is owned by the caller: it is a plain value without any shared state.
#[derive(Clone, Debug, Default)]
pub struct FunctionSet {
    functions: Vec<BooleanFunction>,
}

impl FunctionSet {
    delegate! {
        to self.functions {
            /// Number of functions in the set
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, BooleanFunction>;
        }
    }

    fn position(&self, expression: &str) -> Option<usize> {
        self.functions.iter().position(|f| f.expression() == expression)
    }

    /// Add a function, return false if a function with the same expression is already present
    pub fn add(&mut self, function: BooleanFunction) -> bool {
        if self.position(function.expression()).is_some() {
            return false;
        }
        debug!("add function '{}'", function.expression());
        self.functions.push(function);
        true
    }

    /// Parse and add an expression if needed, return the stored function
    pub fn add_expression(&mut self, expression: &str) -> Result<&BooleanFunction, BoolFnError> {
        let position = match self.position(expression) {
            Some(p) => p,
            None => {
                self.add(BooleanFunction::new(expression)?);
                self.functions.len() - 1
            }
        };
        Ok(&self.functions[position])
    }

    pub fn get(&self, expression: &str) -> Option<&BooleanFunction> {
        self.functions.iter().find(|f| f.expression() == expression)
    }

    pub fn remove(&mut self, expression: &str) -> Option<BooleanFunction> {
        let position = self.position(expression)?;
        Some(self.functions.remove(position))
    }

    /// Serializable records of all functions, in insertion order
    pub fn records(&self) -> Result<Vec<FunctionRecord>, BoolFnError> {
        self.functions.iter().map(|f| f.record()).collect()
    }

    /// Pretty-printed JSON list of all records
    pub fn to_json(&self) -> Result<String, BoolFnError> {
        Ok(serde_json::to_string_pretty(&self.records()?)?)
    }
}

impl<'a> IntoIterator for &'a FunctionSet {
    type Item = &'a BooleanFunction;
    type IntoIter = Iter<'a, BooleanFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn add_and_remove() -> Result<(), BoolFnError> {
        let mut set = FunctionSet::default();
        assert!(set.is_empty());

        set.add_expression("A AND B")?;
        set.add_expression("A OR B")?;
        assert_eq!(set.add_expression("A AND B")?.expression(), "A AND B");
        assert!(!set.add(BooleanFunction::new("A OR B")?));
        assert_eq!(set.len(), 2);

        assert!(set.add_expression("A AND").is_err());
        assert_eq!(set.len(), 2);

        let order: Vec<&str> = set.iter().map(|f| f.expression()).collect();
        assert_eq!(order, vec!["A AND B", "A OR B"]);

        assert!(set.get("A OR B").is_some());
        assert!(set.get("B OR A").is_none());

        let removed = set.remove("A AND B");
        assert_eq!(removed.map(|f| f.to_string()), Some("A AND B".to_string()));
        assert!(set.remove("A AND B").is_none());
        assert_eq!(set.len(), 1);
        Ok(())
    }

    #[test]
    fn export() -> Result<(), BoolFnError> {
        let mut set = FunctionSet::default();
        set.add_expression("NOT A")?;
        set.add_expression("A XOR B")?;

        let records = set.records()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].zhegalkin, "A + B");

        let value: serde_json::Value = serde_json::from_str(&set.to_json()?)?;
        assert_eq!(value[0]["expression"], "NOT A");
        assert_eq!(value[1]["properties"]["is_linear"], true);
        assert_eq!(value[1]["truth_table"][3]["output"], 0);
        Ok(())
    }
}
