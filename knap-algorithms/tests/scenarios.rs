use knap_algorithms::{exhaustive, tabulation, Algorithm};
use knap_challenges::{Item, KnapsackError, Problem, Solution};
use std::collections::BTreeSet;

fn problem(capacity: i64, items: &[(i64, i64)]) -> Problem {
    let weights: Vec<i64> = items.iter().map(|&(w, _)| w).collect();
    let benefits: Vec<i64> = items.iter().map(|&(_, b)| b).collect();
    Problem::from_parts(capacity, &weights, &benefits).unwrap()
}

fn assert_all_solve(problem: &Problem, value: u64, items: &[usize]) {
    for algorithm in Algorithm::ALL {
        let solution = algorithm.solve(problem).unwrap();
        assert_eq!(
            solution,
            Solution {
                value,
                items: items.iter().copied().collect::<BTreeSet<_>>()
            },
            "{} disagrees",
            algorithm
        );
        assert_eq!(problem.verify_solution(&solution), Ok(()));
    }
}

#[test]
fn test_four_item_example() {
    let p = problem(10, &[(5, 10), (4, 40), (6, 30), (3, 50)]);
    assert_all_solve(&p, 90, &[2, 4]);
}

#[test]
fn test_three_item_example() {
    let p = problem(50, &[(10, 60), (20, 100), (30, 120)]);
    assert_all_solve(&p, 220, &[2, 3]);
}

#[test]
fn test_zero_capacity() {
    let p = problem(0, &[(1, 1), (2, 2)]);
    assert_all_solve(&p, 0, &[]);
}

#[test]
fn test_no_items() {
    assert_all_solve(&problem(100, &[]), 0, &[]);
    assert_all_solve(&problem(0, &[]), 0, &[]);
}

#[test]
fn test_single_item() {
    assert_all_solve(&problem(5, &[(5, 7)]), 7, &[1]);
    assert_all_solve(&problem(4, &[(5, 7)]), 0, &[]);
}

#[test]
fn test_zero_weight_item_is_always_included() {
    assert_all_solve(&problem(5, &[(0, 10), (5, 10)]), 20, &[1, 2]);
    assert_all_solve(&problem(0, &[(1, 1), (0, 5)]), 5, &[2]);
    assert_all_solve(&problem(3, &[(2, 4), (0, 1), (2, 5)]), 6, &[2, 3]);
}

#[test]
fn test_ties_prefer_the_later_item() {
    assert_all_solve(&problem(1, &[(1, 1), (1, 1)]), 1, &[2]);
    assert_all_solve(&problem(4, &[(2, 3), (2, 3), (2, 3)]), 6, &[2, 3]);
    // {1} and {2, 3} both reach 6
    assert_all_solve(&problem(4, &[(4, 6), (2, 3), (2, 3)]), 6, &[2, 3]);
    assert_all_solve(&problem(4, &[(2, 3), (2, 3), (4, 6)]), 6, &[3]);
}

#[test]
fn test_reconstruction_reaches_first_item() {
    assert_all_solve(&problem(10, &[(5, 10), (5, 10)]), 20, &[1, 2]);
    assert_all_solve(&problem(6, &[(6, 9), (1, 1), (2, 2)]), 9, &[1]);
    assert_all_solve(&problem(6, &[(7, 9), (1, 1), (2, 2)]), 3, &[2, 3]);
}

#[test]
fn test_tabulation_table() {
    let items = [Item::new(5, 10), Item::new(4, 40), Item::new(6, 30), Item::new(3, 50)];
    let table = tabulation::build_table(10, &items).unwrap();
    assert_eq!(table.rows(), 5);
    assert_eq!(table.columns(), 11);
    let row = |i: usize| (0..11).map(|w| table[(i, w)]).collect::<Vec<_>>();
    assert_eq!(row(0), vec![0; 11]);
    assert_eq!(row(1), vec![0, 0, 0, 0, 0, 10, 10, 10, 10, 10, 10]);
    assert_eq!(row(2), vec![0, 0, 0, 0, 40, 40, 40, 40, 40, 50, 50]);
    assert_eq!(row(3), vec![0, 0, 0, 0, 40, 40, 40, 40, 40, 50, 70]);
    assert_eq!(row(4), vec![0, 0, 0, 50, 50, 50, 50, 90, 90, 90, 90]);
    assert_eq!(
        tabulation::reconstruct(&table, &items).positions(),
        vec![2, 4]
    );
}

#[test]
fn test_large_capacity_is_reported() {
    let p = problem(1 << 40, &[(3, 4), (5, 6)]);
    for algorithm in [Algorithm::BottomUp, Algorithm::TopDown] {
        assert!(matches!(
            algorithm.solve(&p),
            Err(KnapsackError::ResourceExhaustion { .. })
        ));
    }
    // no table involved
    assert_eq!(exhaustive::solve(&p).unwrap().positions(), vec![1, 2]);
}

#[test]
fn test_exhaustive_solve_from() {
    let items = [Item::new(5, 10), Item::new(4, 40), Item::new(6, 30), Item::new(3, 50)];
    assert_eq!(exhaustive::solve_from(10, &items, 4).value, 90);
    assert_eq!(exhaustive::solve_from(10, &items, 3).positions(), vec![2, 3]);
    assert_eq!(exhaustive::solve_from(10, &items, 0), Solution::new());
}

#[test]
fn test_algorithm_names() {
    assert_eq!(
        Algorithm::ALL.map(|a| a.name()),
        ["brute_force", "bottom_up", "top_down"]
    );
    assert_eq!(Algorithm::BottomUp.to_string(), "Bottom up");
}
