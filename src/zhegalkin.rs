//! Zhegalkin polynomials: XOR-sums of conjunctions over GF(2).

use bit_set::BitSet;
use itertools::Itertools;
use std::fmt;
use std::ops::{Add, Mul};

/// A polynomial over GF(2) given by its set of monomials.
///
/// Each monomial is a bitmask over an ordered list of variables: bit ```i``` is set if the
/// ```i```-th variable appears in the product. The empty monomial (mask 0) is the constant 1,
/// and the empty polynomial is the constant 0.
///
/// Addition is the symmetric difference of the monomial sets (XOR), multiplication
/// distributes over all pairs of monomials, a product of monomials being the union of
/// their variables. Pairs producing the same monomial cancel out.
///
/// The set is indexed by monomial mask, so variable indices must stay below the width of
/// ```usize```. Memory grows with the largest mask: about 2^n bits for n variables.
#[derive(Clone, Default, Debug)]
pub struct Polynomial {
    monomials: BitSet,
}

/// Display wrapper naming the variables of a polynomial
pub struct NamedPolynomial<'a> {
    polynomial: &'a Polynomial,
    variables: &'a [String],
}

impl Polynomial {
    /// The constant 0
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant 1
    pub fn one() -> Self {
        Self::from_monomials([0])
    }

    /// The polynomial of a single variable, identified by its index (below ```usize::BITS```)
    pub fn variable(idx: usize) -> Self {
        debug_assert!(idx < usize::BITS as usize, "variable index {} out of range", idx);
        Self::from_monomials([1 << idx])
    }

    /// Build a polynomial by adding monomials: duplicated monomials cancel out
    pub fn from_monomials(monomials: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::zero();
        for m in monomials {
            result.toggle(m);
        }
        result
    }

    fn toggle(&mut self, monomial: usize) {
        if !self.monomials.insert(monomial) {
            self.monomials.remove(monomial);
        }
    }

    /// Iterate over monomial masks in increasing order
    pub fn monomials(&self) -> impl Iterator<Item = usize> + '_ {
        self.monomials.iter()
    }

    /// Number of monomials
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Return whether this is the zero polynomial
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Largest number of variables in a monomial
    pub fn degree(&self) -> usize {
        self.monomials()
            .map(|m| m.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    /// A polynomial is linear (affine) if no monomial involves more than one variable
    pub fn is_linear(&self) -> bool {
        self.degree() <= 1
    }

    /// Evaluate the polynomial, ```values[i]``` giving the value of the ```i```-th variable
    pub fn eval(&self, values: &[bool]) -> bool {
        let assigned = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .fold(0usize, |mask, (i, _)| mask | (1 << i));
        // Parity of the satisfied monomials
        self.monomials()
            .filter(|m| m & !assigned == 0)
            .fold(false, |parity, _| !parity)
    }

    /// Associate variable names to this polynomial for display
    pub fn named<'a>(&'a self, variables: &'a [String]) -> NamedPolynomial<'a> {
        NamedPolynomial {
            polynomial: self,
            variables,
        }
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.monomials().eq(other.monomials())
    }
}

impl Eq for Polynomial {}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: &Polynomial) -> Self::Output {
        self.monomials.symmetric_difference_with(&rhs.monomials);
        self
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        let mut result = Polynomial::zero();
        for m1 in self.monomials() {
            for m2 in rhs.monomials() {
                result.toggle(m1 | m2);
            }
        }
        result
    }
}

impl NamedPolynomial<'_> {
    fn monomial_name(&self, monomial: usize) -> String {
        if monomial == 0 {
            return String::from("1");
        }
        self.variables
            .iter()
            .enumerate()
            .filter(|(i, _)| monomial & (1 << i) != 0)
            .map(|(_, name)| name)
            .join("*")
    }
}

/// Monomials joined with ```+```, variables of each monomial joined with ```*```.
impl fmt::Display for NamedPolynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.polynomial.is_empty() {
            return write!(f, "0");
        }
        let terms = self
            .polynomial
            .monomials()
            .map(|m| self.monomial_name(m))
            .join(" + ");
        write!(f, "{}", terms)
    }
}
