use crate::*;

use bit_set::BitSet;
use log::{debug, trace};
use std::collections::BTreeSet;

/// Select a subset of prime implicants covering all minterms.
///
/// Essential implicants (the only one covering some minterm) are always selected. The minterms
/// left uncovered are then handled by an exhaustive search for the smallest set of additional
/// implicants. Among several covers of the same size, the first one found in the
/// enumeration order is kept.
pub(crate) fn minimum_cover(primes: &BTreeSet<Implicant>, minterms: &BTreeSet<usize>) -> Vec<Implicant> {
    let primes: Vec<&Implicant> = primes.iter().collect();
    let minterms: Vec<usize> = minterms.iter().copied().collect();

    // coverage[i] contains the indices of the minterms covered by the i-th prime
    let coverage: Vec<BitSet> = primes
        .iter()
        .map(|p| {
            minterms
                .iter()
                .enumerate()
                .filter(|(_, m)| p.covers(**m))
                .map(|(j, _)| j)
                .collect()
        })
        .collect();

    let mut essentials = BTreeSet::new();
    for j in 0..minterms.len() {
        let mut covering = coverage.iter().enumerate().filter(|(_, c)| c.contains(j));
        if let (Some((i, _)), None) = (covering.next(), covering.next()) {
            essentials.insert(i);
        }
    }

    let mut uncovered: BitSet = (0..minterms.len()).collect();
    for i in &essentials {
        uncovered.difference_with(&coverage[*i]);
    }
    debug!(
        "{} primes, {} essentials, {} minterms left",
        primes.len(),
        essentials.len(),
        uncovered.len()
    );

    let mut selected = essentials.clone();
    if !uncovered.is_empty() {
        let remaining: Vec<usize> = (0..primes.len()).filter(|i| !essentials.contains(i)).collect();
        let mut search = CoverSearch {
            coverage: &coverage,
            target: uncovered,
            best: None,
        };
        search.backtrack(&mut vec![], &remaining);
        match search.best {
            Some(solution) => selected.extend(solution),
            None => selected.extend(remaining),
        }
    }

    selected.into_iter().map(|i| primes[i].clone()).collect()
}

struct CoverSearch<'a> {
    coverage: &'a [BitSet],
    target: BitSet,
    best: Option<Vec<usize>>,
}

impl CoverSearch<'_> {
    fn covers_target(&self, chosen: &[usize]) -> bool {
        let mut covered = BitSet::new();
        for i in chosen {
            covered.union_with(&self.coverage[*i]);
        }
        self.target.is_subset(&covered)
    }

    /// Include or exclude the first candidate, then recurse on the others
    fn backtrack(&mut self, chosen: &mut Vec<usize>, candidates: &[usize]) {
        if let Some(best) = &self.best {
            if chosen.len() >= best.len() {
                return;
            }
        }

        if self.covers_target(chosen) {
            trace!("cover of size {}", chosen.len());
            self.best = Some(chosen.clone());
            return;
        }

        if let Some((next, others)) = candidates.split_first() {
            chosen.push(*next);
            self.backtrack(chosen, others);
            chosen.pop();
            self.backtrack(chosen, others);
        }
    }
}
