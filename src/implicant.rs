use crate::truth_table::bit_at;
use crate::BoolFnError;

use bit_set::BitSet;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A product term over a fixed number of ordered positions.
///
/// Each position is either fixed to 1, fixed to 0 or free. It is represented as a pair of
/// bit-sets storing the positive and negative positions, other positions are implicitly free.
/// Position 0 corresponds to the most significant bit of a minterm, in the same way as
/// the first column of a truth table.
///
/// An implicant can be parsed from strings over ```{0,1,-}``` where ```-``` denotes a free position.
/// To make the strings easier to read, spaces and single quotes are ignored.
///
/// # Operations on implicants
///
/// * Test the inclusion of a minterm
/// * Merge two implicants differing in a single fixed position (the step of the Quine-McCluskey method)
#[derive(Clone, Default, Debug)]
pub struct Implicant {
    width: usize,
    positive: BitSet,
    negative: BitSet,
}

impl Implicant {
    /// Create an implicant restricted to a single minterm
    pub fn from_minterm(minterm: usize, width: usize) -> Self {
        let mut result = Self::free(width);
        for position in 0..width {
            result.set(position, bit_at(minterm, width, position));
        }
        result
    }

    /// Create an implicant where all positions are free
    pub fn free(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Fix a position to a specific value
    pub fn set(&mut self, position: usize, value: bool) {
        if value {
            self.negative.remove(position);
            self.positive.insert(position);
        } else {
            self.positive.remove(position);
            self.negative.insert(position);
        }
    }

    /// Number of positions
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of positions fixed to 1
    pub fn ones(&self) -> usize {
        self.positive.len()
    }

    /// Test if no position is fixed
    pub fn is_free(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// The value of a position, or None if it is free
    pub fn value_at(&self, position: usize) -> Option<bool> {
        if self.positive.contains(position) {
            Some(true)
        } else if self.negative.contains(position) {
            Some(false)
        } else {
            None
        }
    }

    /// Iterate over the fixed positions and their value
    pub fn literals(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.width).filter_map(move |p| self.value_at(p).map(|v| (p, v)))
    }

    /// Check if a minterm is contained in this implicant
    pub fn covers(&self, minterm: usize) -> bool {
        self.literals()
            .all(|(p, v)| bit_at(minterm, self.width, p) == v)
    }

    /// Merge two implicants with the same free positions and a single conflict.
    ///
    /// The conflicting position becomes free, each of the two implicants covers half of the result.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.width != other.width || !self.same_fixed_positions(other) {
            return None;
        }

        let mut conflicts = self
            .positive
            .intersection(&other.negative)
            .chain(self.negative.intersection(&other.positive));
        let position = conflicts.next()?;
        if conflicts.next().is_some() {
            return None;
        }

        let mut result = self.clone();
        result.positive.remove(position);
        result.negative.remove(position);
        Some(result)
    }

    fn same_fixed_positions(&self, other: &Self) -> bool {
        let mut fixed = self.positive.clone();
        fixed.union_with(&self.negative);
        let mut other_fixed = other.positive.clone();
        other_fixed.union_with(&other.negative);
        fixed.iter().eq(other_fixed.iter())
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.width).map(move |p| match self.value_at(p) {
            Some(true) => '1',
            Some(false) => '0',
            None => '-',
        })
    }
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for Implicant {}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl FromStr for Implicant {
    type Err = BoolFnError;

    fn from_str(descr: &str) -> Result<Implicant, BoolFnError> {
        let mut values = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => (), // skip spacing and ' for formatting
                '-' => values.push(None),
                '0' => values.push(Some(false)),
                '1' => values.push(Some(true)),
                _ => return Err(BoolFnError::InvalidExpression(descr.to_string())),
            };
        }
        let mut result = Implicant::free(values.len());
        for (position, value) in values.into_iter().enumerate() {
            if let Some(v) = value {
                result.set(position, v);
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.chars().collect();
        write!(f, "{}", &s)
    }
}
