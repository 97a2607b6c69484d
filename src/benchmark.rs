use log::{info, warn};
use rand::Rng;
use crate::datasets::{generate_datasets, Shape};
use crate::results::ResultTable;
use crate::sort::Algorithm;
use crate::timing::measure_time;

/// Progress line printed for every measured cell.
pub fn progress_line(algorithm: &str, size: usize, shape: Shape, secs: f64) -> String {
    format!("{}, Size: {}, Dataset: {}, Time: {:.6} seconds", algorithm, size, shape, secs)
}

/// Runs every algorithm against every shape of every requested size.
///
/// A bundle of datasets is generated per size and dropped once all algorithms
/// were timed against it. Sizes requested twice are only measured once, and so
/// is a name shared by several algorithms (the first one registered is kept).
pub fn run_benchmarks<R: Rng>(
    sizes: &[usize],
    algorithms: &[Algorithm],
    repeats: usize,
    rng: &mut R,
) -> ResultTable {
    let algorithms = unique_by_name(algorithms);
    let mut results = ResultTable::new(algorithms.iter().map(|a| a.name));
    if sizes.is_empty() {
        warn!("No sizes requested, returning an empty result table");
    }

    let mut seen: Vec<usize> = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if seen.contains(&size) {
            warn!("Size {} requested more than once, skipping", size);
            continue;
        }
        seen.push(size);

        info!("Generating datasets of size {}", size);
        let datasets = generate_datasets(size, rng);
        for (shape, data) in datasets.iter() {
            for algorithm in &algorithms {
                let secs = measure_time(algorithm, data, repeats);
                if let Some(previous) = results.record(algorithm.name, size, shape, secs) {
                    warn!("{} overwrote {:.6} for size {} on {}", algorithm.name, previous, size, shape);
                }
                println!("{}", progress_line(algorithm.name, size, shape, secs));
            }
        }
    }
    results
}

fn unique_by_name(algorithms: &[Algorithm]) -> Vec<Algorithm> {
    let mut unique: Vec<Algorithm> = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        if unique.iter().any(|a| a.name == algorithm.name) {
            warn!("Algorithm name {} registered more than once, skipping", algorithm.name);
            continue;
        }
        unique.push(*algorithm);
    }
    unique
}
