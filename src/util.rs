use std::collections::BTreeMap;

use itertools::Itertools;
use num::{BigUint, One};

use crate::value::Face;

pub type Weight = u64;
pub type Count = usize;
pub type CountMap<K> = BTreeMap<K, Count>;
pub type Entry<'a, K> = std::collections::btree_map::Entry<'a, K, Count>;

#[inline]
pub fn count_map<K>() -> CountMap<K> {
    CountMap::new()
}

#[inline]
pub(crate) fn increment<K: Ord>(map: &mut CountMap<K>, key: K) {
    match map.entry(key) {
        Entry::Vacant(e) => {
            e.insert(1);
        }
        Entry::Occupied(mut e) => {
            *e.get_mut() += 1;
        }
    }
}

/// Rearranges `values` into the next lexicographically greater permutation.
/// Returns `false` (leaving `values` sorted ascending) once the last one is passed.
pub fn next_permutation<T: Ord>(values: &mut [T]) -> bool {
    if values.len() < 2 {
        return false;
    }
    let Some(i) = (0..values.len() - 1).rev().find(|&i| values[i] < values[i + 1]) else {
        values.reverse();
        return false;
    };
    // a successor exists strictly right of i because values[i] < values[i + 1]
    let j = (i + 1..values.len())
        .rev()
        .find(|&j| values[i] < values[j])
        .unwrap_or(i + 1);
    values.swap(i, j);
    values[i + 1..].reverse();
    true
}

/// Every distinct ordering of `values`, each once, in lexicographic order.
pub fn distinct_permutations<T: Face>(values: &[T]) -> Vec<Vec<T>> {
    let mut current = values.iter().cloned().sorted().collect_vec();
    let mut result = vec![current.clone()];
    while next_permutation(&mut current) {
        result.push(current.clone());
    }
    result
}

/// Number of distinct orderings of a multiset: `n! / (m_1! * m_2! * ...)`.
pub fn distinct_orderings<T: Face>(values: &[T]) -> BigUint {
    let numerator = factorial(values.len());
    values
        .iter()
        .sorted()
        .dedup_with_count()
        .fold(numerator, |acc, (m, _)| acc / factorial(m))
}

fn factorial(n: usize) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, x| acc * BigUint::from(x))
}
