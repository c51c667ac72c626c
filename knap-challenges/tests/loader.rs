use knap_challenges::loader::{load_problem, parse_problem};
use knap_challenges::{Item, KnapsackError};
use std::fs;

#[test]
fn test_parse_problem() {
    let problem = parse_problem("50\n10,60\n20, 100\n 30 ,120\n").unwrap();
    assert_eq!(problem.capacity(), 50);
    assert_eq!(
        problem.items(),
        &[Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)]
    );
}

#[test]
fn test_parse_problem_skips_blank_lines() {
    let problem = parse_problem("\n7\n\n1,2\r\n\n3,4\n\n").unwrap();
    assert_eq!(problem.capacity(), 7);
    assert_eq!(problem.items(), &[Item::new(1, 2), Item::new(3, 4)]);
}

#[test]
fn test_parse_problem_without_items() {
    let problem = parse_problem("12").unwrap();
    assert_eq!(problem.capacity(), 12);
    assert_eq!(problem.num_items(), 0);
}

#[test]
fn test_parse_problem_errors() {
    assert_eq!(
        parse_problem(""),
        Err(KnapsackError::invalid_problem(
            "input is empty, expected a capacity"
        ))
    );
    assert_eq!(
        parse_problem("10\n1,2\n3;4\n"),
        Err(KnapsackError::invalid_problem(
            "line 3: expected 'weight,benefit', got '3;4'"
        ))
    );
    assert!(matches!(
        parse_problem("ten\n1,2\n"),
        Err(KnapsackError::InvalidProblem { .. })
    ));
    assert!(matches!(
        parse_problem("10\n1,x\n"),
        Err(KnapsackError::InvalidProblem { .. })
    ));
    assert_eq!(
        parse_problem("10\n-1,2\n"),
        Err(KnapsackError::invalid_problem(
            "item 1 has negative weight -1"
        ))
    );
    assert!(matches!(
        parse_problem("-10\n1,2\n"),
        Err(KnapsackError::InvalidProblem { .. })
    ));
}

#[test]
fn test_load_problem() {
    let path = std::env::temp_dir().join(format!("knap-loader-{}.txt", std::process::id()));
    fs::write(&path, "10\n5,10\n4,40\n6,30\n3,50\n").unwrap();
    let problem = load_problem(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(problem.capacity(), 10);
    assert_eq!(problem.num_items(), 4);

    assert!(matches!(
        load_problem(&path),
        Err(KnapsackError::InvalidProblem { .. })
    ));
}

#[test]
fn test_format_problem() {
    let problem = parse_problem("50\n10,60\n20,100\n30,120\n").unwrap();
    let text = knap_challenges::loader::format_problem(&problem);
    assert_eq!(text, "50\n10,60\n20,100\n30,120\n");
    assert_eq!(parse_problem(&text).unwrap(), problem);
}
