//! Manipulate lists of implicants.

use crate::*;

use itertools::Itertools;
use std::iter::FromIterator;
use std::slice::Iter;
use std::str::FromStr;
use std::vec::IntoIter;

static PATTERN_SEPARATORS: [char; 3] = [',', ';', '\n'];

/// A sum of products given as a list of [implicants](Implicant).
///
/// A list of implicants covers the union of the minterms of its members. Minimization
/// produces lists where every member is prime, without duplicates and in a stable order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Implicants {
    patterns: Vec<Implicant>,
}

impl Implicants {
    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.patterns.iter()
    }

    /// Get the number of implicants in this list
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return whether there are no implicant (the sum is always false)
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn push(&mut self, implicant: Implicant) {
        self.patterns.push(implicant);
    }

    /// Test if at least one implicant contains the minterm
    pub fn covers(&self, minterm: usize) -> bool {
        self.patterns.iter().any(|p| p.covers(minterm))
    }

    /// Render the list as a sum of products, each position being named after a variable.
    ///
    /// Literals are written ```A``` or ```NOT A```. Products with several literals are parenthesized
    /// and joined with ```AND```, products are joined with ```OR```. A product without literals
    /// is written ```1``` and an empty list is ```0```.
    ///
    /// The list of variables must be at least as long as the width of each implicant.
    pub fn to_sum_of_products(&self, variables: &[String]) -> String {
        if self.is_empty() {
            return String::from("0");
        }
        self.patterns
            .iter()
            .map(|p| product_string(p, variables))
            .join(" OR ")
    }
}

fn product_string(implicant: &Implicant, variables: &[String]) -> String {
    debug_assert!(
        implicant.width() <= variables.len(),
        "implicant of width {} with {} variables",
        implicant.width(),
        variables.len()
    );
    let literals: Vec<String> = implicant
        .literals()
        .map(|(p, v)| {
            let name = &variables[p];
            if v {
                name.to_string()
            } else {
                format!("NOT {}", name)
            }
        })
        .collect();

    match literals.len() {
        0 => String::from("1"),
        1 => literals.join(""),
        _ => format!("({})", literals.join(" AND ")),
    }
}

impl FromIterator<Implicant> for Implicants {
    fn from_iter<I: IntoIterator<Item = Implicant>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Implicants {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl IntoIterator for Implicants {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

impl FromStr for Implicants {
    type Err = BoolFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(&PATTERN_SEPARATORS[..])
            .filter(|elt| !elt.trim().is_empty())
            .map(|elt| elt.parse())
            .collect()
    }
}

impl fmt::Display for Implicants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.patterns.iter().join(";"))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn names(vars: &[&str]) -> Vec<String> {
        vars.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parsing() -> Result<(), BoolFnError> {
        let implicants: Implicants = "0-10;0-11;1-11".parse()?;
        assert_eq!(implicants.len(), 3);
        assert_eq!(implicants.to_string(), "0-10;0-11;1-11");

        let implicants = "--01-1\n1-0101\n".parse::<Implicants>()?;
        assert_eq!(implicants.len(), 2);

        assert!("".parse::<Implicants>()?.is_empty());
        assert!("01;2-".parse::<Implicants>().is_err());
        Ok(())
    }

    #[test]
    fn coverage() -> Result<(), BoolFnError> {
        let implicants: Implicants = "11-;0-0".parse()?;
        let covered: Vec<usize> = (0..8).filter(|m| implicants.covers(*m)).collect();
        assert_eq!(covered, vec![0, 2, 6, 7]);
        Ok(())
    }

    #[test]
    fn sum_of_products() -> Result<(), BoolFnError> {
        let vars = names(&["A", "B", "C"]);
        let implicants: Implicants = "11-;0-0;--1".parse()?;
        assert_eq!(
            implicants.to_sum_of_products(&vars),
            "(A AND B) OR (NOT A AND NOT C) OR C"
        );

        let implicants: Implicants = "0--".parse()?;
        assert_eq!(implicants.to_sum_of_products(&vars), "NOT A");

        let implicants: Implicants = "---".parse()?;
        assert_eq!(implicants.to_sum_of_products(&vars), "1");

        assert_eq!(Implicants::default().to_sum_of_products(&vars), "0");
        Ok(())
    }

    #[test]
    #[should_panic]
    fn sum_of_products_missing_variable() {
        let implicants: Implicants = "1-0".parse().unwrap();
        implicants.to_sum_of_products(&names(&["A", "B"]));
    }
}
