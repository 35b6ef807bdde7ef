//! Two-level minimization with the Quine-McCluskey method.

use crate::cover::minimum_cover;
use crate::primes::prime_implicants;
use crate::*;

use log::debug;
use std::collections::BTreeSet;

/// Configure and run the Quine-McCluskey minimization.
///
/// Don't-care terms can be used to merge implicants but do not need to be covered.
/// Terms which do not fit in the configured width are ignored.
///
/// ```
/// use boolfn::QuineMcCluskey;
///
/// let cover = QuineMcCluskey::new(4)
///     .with_dont_cares([0, 15])
///     .minimize(&[6, 7]);
/// assert_eq!(cover.to_string(), "011-");
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuineMcCluskey {
    width: usize,
    dont_cares: BTreeSet<usize>,
}

impl QuineMcCluskey {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            dont_cares: BTreeSet::new(),
        }
    }

    pub fn with_dont_cares(mut self, dont_cares: impl IntoIterator<Item = usize>) -> Self {
        self.dont_cares.extend(dont_cares);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn in_range(&self, term: usize) -> bool {
        self.width >= usize::BITS as usize || term >> self.width == 0
    }

    /// Compute a minimum list of prime implicants covering the minterms
    pub fn minimize(&self, minterms: &[usize]) -> Implicants {
        let required: BTreeSet<usize> = minterms
            .iter()
            .copied()
            .filter(|m| self.in_range(*m))
            .collect();
        let all: BTreeSet<usize> = required
            .iter()
            .chain(self.dont_cares.iter().filter(|m| self.in_range(**m)))
            .copied()
            .collect();
        debug!(
            "minimize {} minterms and {} don't-cares over {} variables",
            required.len(),
            all.len() - required.len(),
            self.width
        );

        let primes = prime_implicants(&all, self.width);
        minimum_cover(&primes, &required).into_iter().collect()
    }
}

/// Minimize a function given by its minterms and optional don't-care terms
pub fn quine_mccluskey(minterms: &[usize], width: usize, dont_cares: &[usize]) -> Implicants {
    QuineMcCluskey::new(width)
        .with_dont_cares(dont_cares.iter().copied())
        .minimize(minterms)
}
