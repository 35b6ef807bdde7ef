use crate::*;

use itertools::Itertools;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Compute all prime implicants covering a set of minterms.
///
/// Starting from single minterms, implicants are grouped by their number of positions
/// fixed to 1. Each round merges the members of adjacent groups. The implicants which took
/// part in no merge are prime, the merged ones feed the next round until nothing merges.
pub(crate) fn prime_implicants(minterms: &BTreeSet<usize>, width: usize) -> BTreeSet<Implicant> {
    let mut terms: BTreeSet<Implicant> = minterms
        .iter()
        .map(|m| Implicant::from_minterm(*m, width))
        .collect();
    let mut primes = BTreeSet::new();

    let mut round = 0;
    while !terms.is_empty() {
        round += 1;
        let merged = merge_round(&terms, &mut primes);
        debug!(
            "round {}: {} terms, {} merged, {} primes",
            round,
            terms.len(),
            merged.len(),
            primes.len()
        );
        terms = merged;
    }

    primes
}

/// Merge adjacent groups once, moving the terms without any merge into the primes
fn merge_round(terms: &BTreeSet<Implicant>, primes: &mut BTreeSet<Implicant>) -> BTreeSet<Implicant> {
    let groups = group_by_ones(terms);
    let mut checked: BTreeSet<&Implicant> = BTreeSet::new();
    let mut merged = BTreeSet::new();

    for ((_, lower), (_, upper)) in groups.iter().tuple_windows() {
        for &p in lower.iter() {
            for &t in upper.iter() {
                if let Some(m) = p.merge(t) {
                    checked.insert(p);
                    checked.insert(t);
                    merged.insert(m);
                }
            }
        }
    }

    for p in terms {
        if !checked.contains(p) {
            primes.insert(p.clone());
        }
    }
    merged
}

fn group_by_ones(terms: &BTreeSet<Implicant>) -> BTreeMap<usize, Vec<&Implicant>> {
    let mut groups: BTreeMap<usize, Vec<&Implicant>> = BTreeMap::new();
    for t in terms {
        groups.entry(t.ones()).or_default().push(t);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn primes_of(minterms: &[usize], width: usize) -> Vec<String> {
        let minterms = minterms.iter().copied().collect();
        prime_implicants(&minterms, width)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn single_round() {
        assert_eq!(primes_of(&[6, 7], 3), vec!["11-"]);
        assert_eq!(primes_of(&[1, 2], 2), vec!["01", "10"]);
    }

    #[test]
    fn full_cube() {
        assert_eq!(primes_of(&[0, 1, 2, 3, 4, 5, 6, 7], 3), vec!["---"]);
        assert_eq!(primes_of(&[0], 0), vec![""]);
    }

    #[test]
    fn overlapping_primes() {
        // m(0,1,2,5,6,7) has six primes of two minterms each
        assert_eq!(
            primes_of(&[0, 1, 2, 5, 6, 7], 3),
            vec!["-01", "-10", "0-0", "00-", "1-1", "11-"]
        );
    }

    #[test]
    fn classic_example() {
        // m(4,8,10,11,12,15) with d(9,14)
        let primes = primes_of(&[4, 8, 9, 10, 11, 12, 14, 15], 4);
        assert_eq!(primes, vec!["-100", "1--0", "1-1-", "10--"]);
    }

    #[test]
    fn empty() {
        assert!(primes_of(&[], 3).is_empty());
    }
}
