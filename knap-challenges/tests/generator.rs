use knap_challenges::generator::{generate_problem, seed_from_u64, GeneratorConfig, Range};
use knap_challenges::KnapsackError;

fn config() -> GeneratorConfig {
    GeneratorConfig {
        capacity: 100,
        num_items: 40,
        weights: "5-20".parse().unwrap(),
        benefits: Range::new(1, 50).unwrap(),
    }
}

#[test]
fn test_range_from_str() {
    assert_eq!("3-9".parse::<Range>(), Ok(Range { low: 3, high: 9 }));
    assert_eq!(" 4 - 4 ".parse::<Range>(), Ok(Range { low: 4, high: 4 }));
    for bad in ["", "7", "a-b", "9-3", "-1-5"] {
        assert!(
            matches!(
                bad.parse::<Range>(),
                Err(KnapsackError::InvalidConfiguration { .. })
            ),
            "{} should not parse",
            bad
        );
    }
}

#[test]
fn test_generate_problem_within_ranges() {
    let problem = generate_problem(&config(), &seed_from_u64(7)).unwrap();
    assert_eq!(problem.capacity(), 100);
    assert_eq!(problem.num_items(), 40);
    for item in problem.items() {
        assert!((5..20).contains(&item.weight));
        assert!((1..50).contains(&item.benefit));
    }
}

#[test]
fn test_generate_problem_is_deterministic() {
    let seed = seed_from_u64(42);
    assert_eq!(
        generate_problem(&config(), &seed).unwrap(),
        generate_problem(&config(), &seed).unwrap()
    );
    assert_ne!(
        generate_problem(&config(), &seed).unwrap(),
        generate_problem(&config(), &seed_from_u64(43)).unwrap()
    );
}

#[test]
fn test_generate_problem_constant_range() {
    let config = GeneratorConfig {
        capacity: 3,
        num_items: 5,
        weights: Range::new(2, 2).unwrap(),
        benefits: Range::new(0, 0).unwrap(),
    };
    let problem = generate_problem(&config, &[0; 32]).unwrap();
    assert!(problem.items().iter().all(|item| item.weight == 2 && item.benefit == 0));
}
