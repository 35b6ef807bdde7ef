//! Truth tables listing all assignments of an ordered list of variables.

use std::slice::Iter;

/// A row of a truth table: the value of each variable and the output of the function
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TruthRow {
    pub inputs: Vec<bool>,
    pub output: bool,
}

/// All ```2^n``` rows of a function over ```n``` ordered variables.
///
/// Rows follow the binary counting order: the first variable is the most significant bit,
/// the index of a row is thus the integer encoding of its inputs.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TruthTable {
    width: usize,
    rows: Vec<TruthRow>,
}

/// Decode the value of a variable in a row index
pub(crate) fn bit_at(index: usize, width: usize, position: usize) -> bool {
    (index >> (width - 1 - position)) & 1 == 1
}

impl TruthTable {
    /// Fill a table by computing the output of each assignment.
    pub fn try_from_fn<E, F>(width: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(&[bool]) -> Result<bool, E>,
    {
        let mut rows = Vec::with_capacity(1 << width);
        for index in 0..(1usize << width) {
            let inputs: Vec<bool> = (0..width).map(|p| bit_at(index, width, p)).collect();
            let output = f(&inputs)?;
            rows.push(TruthRow { inputs, output });
        }
        Ok(Self { width, rows })
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, TruthRow> {
        self.rows.iter()
    }

    /// Output of the row with the given index
    pub fn output(&self, index: usize) -> Option<bool> {
        self.rows.get(index).map(|r| r.output)
    }

    /// Indices of the rows evaluating to true
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.output)
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthRow;
    type IntoIter = Iter<'a, TruthRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
