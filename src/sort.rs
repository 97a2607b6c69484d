use std::fmt;
use crate::insertion::insertion_sort;
use crate::merge::merge_sort;

pub type SortFn = fn(&[u64]) -> Vec<u64>;

/// A named sorting function taking part in a benchmark run.
#[derive(Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub sort: SortFn,
}

impl Algorithm {
    pub const fn new(name: &'static str, sort: SortFn) -> Algorithm {
        Algorithm { name, sort }
    }

    pub fn run(&self, arr: &[u64]) -> Vec<u64> {
        (self.sort)(arr)
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm").field("name", &self.name).finish()
    }
}

/// Reference algorithm: the standard library's stable sort on a copy.
pub fn std_sort(arr: &[u64]) -> Vec<u64> {
    let mut out = arr.to_vec();
    out.sort();
    out
}

/// The three algorithms compared by a default run, in reporting order.
pub fn default_algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::new("Insertion Sort", insertion_sort),
        Algorithm::new("Merge Sort", merge_sort),
        Algorithm::new("Std Sort", std_sort),
    ]
}

pub fn is_sorted(arr: &[u64]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn test_default_algorithms() {
        let names: Vec<&str> = default_algorithms().iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Insertion Sort", "Merge Sort", "Std Sort"]);
    }

    #[test]
    fn test_all_agree() {
        let mut vec: Vec<u64> = (1..=64).rev().collect();
        vec.shuffle(&mut StdRng::seed_from_u64(12345));
        for algorithm in default_algorithms() {
            let sorted = algorithm.run(&vec);
            assert!(is_sorted(&sorted), "{} did not sort", algorithm.name);
            assert_eq!(sorted, (1..=64).collect::<Vec<u64>>());
        }
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
