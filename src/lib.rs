pub mod benchmark;
pub mod config;
pub mod datasets;
pub mod insertion;
pub mod merge;
pub mod report;
pub mod results;
pub mod sort;
pub mod timing;

pub use benchmark::{progress_line, run_benchmarks};
pub use config::{BenchConfig, ConfigError, DEFAULT_REPEATS, DUPLICATED_MAX, RANDOM_MAX};
pub use datasets::{generate_datasets, Datasets, Shape};
pub use insertion::{insertion_sort, insertion_sort_by_key};
pub use merge::{merge_sort, merge_sort_by_key};
pub use report::{save_results, write_report};
pub use results::{AlgorithmResults, ResultTable};
pub use sort::{default_algorithms, is_sorted, std_sort, Algorithm};
pub use timing::{measure, measure_samples, measure_time, Measurement};
