#[cfg(test)]
mod benchmark {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use sortbench::{default_algorithms, generate_datasets, is_sorted, measure_time, run_benchmarks, Algorithm, Shape, insertion_sort, merge_sort};

    #[test]
    fn datasets_shapes() {
        let datasets = generate_datasets(333, &mut StdRng::seed_from_u64(12345));
        for shape in Shape::ALL {
            assert_eq!(datasets.get(shape).len(), 333);
        }
        assert!(is_sorted(&datasets.sorted));
        assert!(datasets.reverse_sorted.iter().rev().eq(datasets.sorted.iter()));

        let mut random = datasets.random.clone();
        random.sort();
        assert_eq!(random, datasets.sorted);
    }

    #[test]
    fn single_size_matrix() {
        let mut rng = StdRng::seed_from_u64(12345);
        let results = run_benchmarks(&[5], &default_algorithms(), 10, &mut rng);

        assert_eq!(results.algorithm_names().len(), 3);
        assert_eq!(results.sizes(), vec![5]);
        assert_eq!(results.len(), 12);
        for algorithm in default_algorithms() {
            for shape in Shape::ALL {
                let secs = results.get(algorithm.name, 5, shape).expect("missing cell");
                assert!(secs >= 0.0);
            }
        }
    }

    #[test]
    fn timing_is_stable_on_trivial_input() {
        let algorithm = Algorithm::new("Merge Sort", merge_sort);
        let data = [3, 1, 2];
        for repeats in [10, 50, 100] {
            let secs = measure_time(&algorithm, &data, repeats);
            assert!(secs >= 0.0);
            assert!(secs < 0.01, "{} repeats took {} seconds on average", repeats, secs);
        }
    }

    #[test]
    fn mean_does_not_drift_with_repeats() {
        let datasets = generate_datasets(1000, &mut StdRng::seed_from_u64(12345));
        let data = datasets.get(Shape::ReverseSorted);
        let algorithm = Algorithm::new("Merge Sort", merge_sort);

        // warm up
        measure_time(&algorithm, data, 10);
        let few = measure_time(&algorithm, data, 10);
        let many = measure_time(&algorithm, data, 100);
        println!("10 repeats: {few:.6}, 100 repeats: {many:.6}");
        assert!(few > 0.0 && many > 0.0);
        let ratio = if few > many { few / many } else { many / few };
        assert!(ratio < 5.0, "means differ by {:.2}x: {} vs {}", ratio, few, many);
    }

    #[test]
    fn quadratic_separation_on_reverse_sorted() {
        let datasets = generate_datasets(1000, &mut StdRng::seed_from_u64(12345));
        let data = datasets.get(Shape::ReverseSorted);

        let insertion = measure_time(&Algorithm::new("Insertion Sort", insertion_sort), data, 10);
        let merge = measure_time(&Algorithm::new("Merge Sort", merge_sort), data, 10);
        println!("insertion: {insertion:.6}, merge: {merge:.6}");
        assert!(insertion > merge * 5.0, "insertion {} vs merge {}", insertion, merge);
    }
}
