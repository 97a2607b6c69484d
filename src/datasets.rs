use std::fmt;
use log::debug;
use rand::Rng;
use rand_distr::Uniform;
use crate::config::{DUPLICATED_MAX, RANDOM_MAX};

/// Statistical structure of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    Random,
    Sorted,
    ReverseSorted,
    Duplicated,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Random, Shape::Sorted, Shape::ReverseSorted, Shape::Duplicated];

    pub fn label(&self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Sorted => "sorted",
            Shape::ReverseSorted => "reverse_sorted",
            Shape::Duplicated => "duplicated",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One input per shape, all of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub random: Vec<u64>,
    pub sorted: Vec<u64>,
    pub reverse_sorted: Vec<u64>,
    pub duplicated: Vec<u64>,
}

impl Datasets {
    pub fn get(&self, shape: Shape) -> &[u64] {
        match shape {
            Shape::Random => &self.random,
            Shape::Sorted => &self.sorted,
            Shape::ReverseSorted => &self.reverse_sorted,
            Shape::Duplicated => &self.duplicated,
        }
    }

    /// Iterates in `Shape::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Shape, &[u64])> + '_ {
        Shape::ALL.into_iter().map(move |shape| (shape, self.get(shape)))
    }

    pub fn len(&self) -> usize {
        self.random.len()
    }

    pub fn is_empty(&self) -> bool {
        self.random.is_empty()
    }
}

/// `sorted` and `reverse_sorted` are derived from `random`; `duplicated` is an
/// independent draw from a much smaller range.
pub fn generate_datasets<R: Rng>(size: usize, rng: &mut R) -> Datasets {
    let random = generate_in_range(rng, size, RANDOM_MAX);
    let mut sorted = random.clone();
    sorted.sort();
    let mut reverse_sorted = sorted.clone();
    reverse_sorted.reverse();
    let duplicated = generate_in_range(rng, size, DUPLICATED_MAX);

    debug!("Generated datasets of size {}", size);
    Datasets {
        random,
        sorted,
        reverse_sorted,
        duplicated,
    }
}

// uniform in [0, max]
fn generate_in_range<R: Rng>(rng: &mut R, length: usize, max: u64) -> Vec<u64> {
    let dist = Uniform::new_inclusive(0, max);
    (0..length)
        .map(|_| rng.sample(&dist))
        .collect()
}
