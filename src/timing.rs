use std::hint::black_box;
use std::time::{Duration, Instant};
use log::{debug, warn};
use crate::sort::Algorithm;

/// Summary of the per-invocation durations of one measurement cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub repeats: usize,
}

impl Measurement {
    pub fn from_samples(samples: &[Duration]) -> Option<Measurement> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let mean = samples.iter().sum::<Duration>() / samples.len() as u32;
        Some(Measurement {
            mean,
            min,
            max,
            repeats: samples.len(),
        })
    }

    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }
}

/// Times `repeats` separate invocations of `algorithm` on `data`.
///
/// Algorithms only borrow their input, so every invocation sees the same
/// pristine data. Panics inside the algorithm are not caught.
pub fn measure_samples(algorithm: &Algorithm, data: &[u64], repeats: usize) -> Vec<Duration> {
    let mut samples: Vec<Duration> = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        let start = Instant::now();
        let sorted = algorithm.run(black_box(data));
        let duration = start.elapsed();
        black_box(sorted);
        samples.push(duration);
    }
    samples
}

/// `None` when `repeats` is zero.
pub fn measure(algorithm: &Algorithm, data: &[u64], repeats: usize) -> Option<Measurement> {
    let samples = measure_samples(algorithm, data, repeats);
    let measurement = Measurement::from_samples(&samples);
    if let Some(m) = &measurement {
        debug!(
            "{} on {} elements: Avg {:?}, Min: {:?}, Max: {:?}",
            algorithm.name,
            data.len(),
            m.mean,
            m.min,
            m.max
        );
    }
    measurement
}

/// Mean seconds per invocation over `repeats` runs. Zero repeats yield `0.0`.
pub fn measure_time(algorithm: &Algorithm, data: &[u64], repeats: usize) -> f64 {
    match measure(algorithm, data, repeats) {
        Some(measurement) => measurement.mean_secs(),
        None => {
            warn!("Zero repeats requested for {}, recording 0.0", algorithm.name);
            0.0
        }
    }
}
