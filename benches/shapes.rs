use std::env;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortbench::config::parse_sizes;
use sortbench::{default_algorithms, generate_datasets, measure, Shape};

pub fn main() {
    let mut args = env::args();
    args.next();

    let sizes = match args.next() {
        Some(arg) => parse_sizes(&arg).unwrap(),
        None => panic!("Expected <array> argument in format [123, 234, 345, 456]"),
    };

    let iterations = match args.next() {
        Some(arg) => arg.parse::<usize>().unwrap(),
        None => {
            panic!("Usage: cargo bench --bench shapes <sizes> <iterations> <seed?>");
        }
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap(),
        None => {
            eprintln!("No seed specified. Using 12345");
            12345
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let algorithms = default_algorithms();
    for size in sizes {
        let datasets = generate_datasets(size, &mut rng);
        println!("Size {}:", size);
        for shape in Shape::ALL {
            println!("\t{}:", shape);
            for algorithm in &algorithms {
                match measure(algorithm, datasets.get(shape), iterations) {
                    Some(m) => println!("\t\t{}: Avg {:?}, Min: {:?}, Max: {:?}", algorithm.name, m.mean, m.min, m.max),
                    None => println!("\t\t{}: no iterations", algorithm.name),
                }
            }
        }
        println!();
    }
}
