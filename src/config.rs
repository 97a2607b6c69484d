use thiserror::Error;

pub const DEFAULT_REPEATS: usize = 10;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_SIZES: [usize; 4] = [100, 1000, 5000, 10000];
pub const DEFAULT_REPORT_PATH: &str = "sorting_results.txt";

// inclusive upper bounds of the generated values
pub const RANDOM_MAX: u64 = 10000;
pub const DUPLICATED_MAX: u64 = 100;

const _: () = {
    assert!(DEFAULT_REPEATS > 0, "DEFAULT_REPEATS must be positive");
    assert!(DUPLICATED_MAX < RANDOM_MAX, "DUPLICATED_MAX must be smaller than RANDOM_MAX");
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid size list '{0}', expected format [123, 234, 345]")]
    InvalidSizes(String),

    #[error("invalid value for {field}: '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub repeats: usize,
    pub seed: u64,
    pub report_path: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            report_path: DEFAULT_REPORT_PATH.to_string(),
        }
    }
}

impl BenchConfig {
    /// Positional arguments: `<sizes?> <repeats?> <seed?> <report path?>`.
    /// The program name must already be stripped.
    pub fn from_args<I>(args: I) -> Result<BenchConfig, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config = BenchConfig::default();

        if let Some(arg) = args.next() {
            config.sizes = parse_sizes(&arg)?;
        }
        if let Some(arg) = args.next() {
            config.repeats = parse_number("repeats", &arg)?;
        }
        if let Some(arg) = args.next() {
            config.seed = parse_number("seed", &arg)?;
        }
        if let Some(arg) = args.next() {
            config.report_path = arg;
        }
        Ok(config)
    }
}

/// Accepts `[100, 1000]` as well as `100,1000`. `[]` is a valid, empty list.
pub fn parse_sizes(input: &str) -> Result<Vec<usize>, ConfigError> {
    let trimmed = input.trim().trim_matches(|c| c == '[' || c == ']');
    if trimmed.trim().is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|s| s.trim().parse::<usize>().map_err(|_| ConfigError::InvalidSizes(input.to_string())))
        .collect()
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
