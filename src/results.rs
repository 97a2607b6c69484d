use std::collections::BTreeMap;
use crate::datasets::Shape;

/// Mean seconds per invocation, keyed by size and then by shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResults {
    pub name: String,
    pub sizes: BTreeMap<usize, BTreeMap<Shape, f64>>,
}

/// algorithm -> size -> shape -> mean seconds.
///
/// Algorithms keep the order they were registered in, `sizes()` keeps the
/// order sizes were first recorded in and shapes follow `Shape::ALL`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    algorithms: Vec<AlgorithmResults>,
    size_order: Vec<usize>,
}

impl ResultTable {
    pub fn new<'a, I>(names: I) -> ResultTable
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = ResultTable::default();
        for name in names {
            table.entry(name);
        }
        table
    }

    fn entry(&mut self, name: &str) -> &mut AlgorithmResults {
        let idx = match self.algorithms.iter().position(|a| a.name == name) {
            Some(idx) => idx,
            None => {
                self.algorithms.push(AlgorithmResults {
                    name: name.to_string(),
                    sizes: BTreeMap::new(),
                });
                self.algorithms.len() - 1
            }
        };
        &mut self.algorithms[idx]
    }

    /// Returns the previously stored value if the cell was already filled.
    pub fn record(&mut self, algorithm: &str, size: usize, shape: Shape, secs: f64) -> Option<f64> {
        if !self.size_order.contains(&size) {
            self.size_order.push(size);
        }
        self.entry(algorithm)
            .sizes
            .entry(size)
            .or_default()
            .insert(shape, secs)
    }

    pub fn get(&self, algorithm: &str, size: usize, shape: Shape) -> Option<f64> {
        self.algorithm(algorithm)?.sizes.get(&size)?.get(&shape).copied()
    }

    pub fn algorithm(&self, name: &str) -> Option<&AlgorithmResults> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &AlgorithmResults> {
        self.algorithms.iter()
    }

    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.name.as_str()).collect()
    }

    /// Every size measured by at least one algorithm, in the order they were
    /// first recorded. `run_benchmarks` records them in requested order.
    pub fn sizes(&self) -> Vec<usize> {
        self.size_order.clone()
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, usize, Shape, f64)> {
        self.algorithms.iter().flat_map(|a| {
            a.sizes.iter().flat_map(move |(&size, shapes)| {
                shapes.iter().map(move |(&shape, &secs)| (a.name.as_str(), size, shape, secs))
            })
        })
    }

    /// Number of recorded durations.
    pub fn len(&self) -> usize {
        self.cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (size, seconds) points of one algorithm on one shape, in `sizes()` order.
    pub fn series(&self, algorithm: &str, shape: Shape) -> Vec<(usize, f64)> {
        self.size_order
            .iter()
            .filter_map(|&size| self.get(algorithm, size, shape).map(|secs| (size, secs)))
            .collect()
    }

    /// Fastest algorithm for one cell column. Ties go to the earlier algorithm.
    pub fn fastest(&self, size: usize, shape: Shape) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for a in &self.algorithms {
            if let Some(secs) = self.get(&a.name, size, shape) {
                if best.map_or(true, |(_, b)| secs < b) {
                    best = Some((a.name.as_str(), secs));
                }
            }
        }
        best
    }
}
