mod render;
use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knap_benchmarker::{run, BenchConfig, BenchOutcome, Selector};
use knap_challenges::{
    generator::{generate_problem, seed_from_u64, GeneratorConfig, Range},
    loader::{format_problem, load_problem},
    KnapsackError, Problem,
};
use knap_utils::{compress_obj, format_duration, jsonify_pretty};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--output [OUTPUT_FILE] "If set, the report will be saved to this file path (default json)")
            .value_parser(clap::value_parser!(PathBuf)),
    )
    .arg(
        arg!(--compress [COMPRESS] "If output file is set, the report will be compressed as zlib")
            .action(ArgAction::SetTrue),
    )
}

fn random_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(<CAPACITY> "Max weight of the knapsack")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true),
    )
    .arg(arg!(<N> "Number of items").value_parser(clap::value_parser!(usize)))
    .arg(
        arg!(<WEIGHTS> "Range of generated weights as 'low-high'")
            .value_parser(clap::value_parser!(String)),
    )
    .arg(
        arg!(<BENEFITS> "Range of generated benefits as 'low-high'")
            .value_parser(clap::value_parser!(String)),
    )
}

fn cli() -> Command {
    let algorithm = || {
        arg!(<ALGORITHM> "1 = brute_force, 2 = bottom_up, 3 = top_down, 4 = all")
            .value_parser(clap::value_parser!(String))
    };
    let iterations = || {
        arg!(<ITERATIONS> "Number of times the algorithm should be run")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true)
    };
    let seed = || {
        arg!(--seed [SEED] "Seed for the random generator. Defaults to the current time")
            .value_parser(clap::value_parser!(u64))
    };

    Command::new("knap-runtime")
        .about("Solves and benchmarks 0/1 knapsack problems")
        .arg_required_else_help(true)
        .subcommand(output_args(
            Command::new("solve_file")
                .about("Solves a problem read from a text file")
                .arg(algorithm())
                .arg(
                    arg!(<FILE> "Text file: capacity on the first line, then one 'weight,benefit' per line")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(iterations()),
        ))
        .subcommand(output_args(
            random_args(
                Command::new("solve_random")
                    .about("Solves a randomly generated problem")
                    .arg(algorithm()),
            )
            .arg(iterations())
            .arg(seed()),
        ))
        .subcommand(
            random_args(
                Command::new("generate").about("Writes a randomly generated problem as text"),
            )
            .arg(seed())
            .arg(
                arg!(--output [OUTPUT_FILE] "If set, the problem will be saved to this file path")
                    .value_parser(clap::value_parser!(PathBuf)),
            ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve_file", sub_m)) => solve_file(sub_m),
        Some(("solve_random", sub_m)) => solve_random(sub_m),
        Some(("generate", sub_m)) => generate(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve_file(sub_m: &ArgMatches) -> Result<()> {
    let config = bench_config(sub_m)?;
    let path = required::<PathBuf>(sub_m, "FILE")?;
    let problem = load_problem(&path)?;
    solve(&config, &problem, sub_m)
}

fn solve_random(sub_m: &ArgMatches) -> Result<()> {
    let config = bench_config(sub_m)?;
    let (problem, seed) = random_problem(sub_m)?;
    println!("seed = {}", seed);
    solve(&config, &problem, sub_m)
}

fn generate(sub_m: &ArgMatches) -> Result<()> {
    let (problem, seed) = random_problem(sub_m)?;
    let text = format_problem(&problem);
    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, text)?;
            println!("problem generated with seed {} written to: {:?}", seed, path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn bench_config(sub_m: &ArgMatches) -> Result<BenchConfig> {
    let selector: Selector = required::<String>(sub_m, "ALGORITHM")?.parse()?;
    let iterations = required::<i64>(sub_m, "ITERATIONS")?;
    Ok(BenchConfig::new(selector, iterations)?)
}

fn random_problem(sub_m: &ArgMatches) -> Result<(Problem, u64)> {
    let capacity = required::<i64>(sub_m, "CAPACITY")?;
    let capacity = u64::try_from(capacity).map_err(|_| {
        KnapsackError::invalid_problem(format!(
            "capacity must be non-negative, got {}",
            capacity
        ))
    })?;
    let config = GeneratorConfig {
        capacity,
        num_items: required::<usize>(sub_m, "N")?,
        weights: required::<String>(sub_m, "WEIGHTS")?.parse::<Range>()?,
        benefits: required::<String>(sub_m, "BENEFITS")?.parse::<Range>()?,
    };
    let seed = match sub_m.get_one::<u64>("seed") {
        Some(seed) => *seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    Ok((generate_problem(&config, &seed_from_u64(seed))?, seed))
}

fn required<T: Clone + Send + Sync + 'static>(sub_m: &ArgMatches, id: &str) -> Result<T> {
    sub_m
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn solve(config: &BenchConfig, problem: &Problem, sub_m: &ArgMatches) -> Result<()> {
    println!(
        "cap = {} n = {} iterations = {} algorithm = {}",
        problem.capacity(),
        problem.num_items(),
        config.iterations,
        config.selector
    );
    let outcome = run(config, problem)?;

    for report in outcome.reports() {
        println!(
            "{}: value = {}, items = {:?}, average runtime = {}",
            report.algorithm.label(),
            report.solution.value,
            report.solution.positions(),
            format_duration(report.average())
        );
    }
    if let BenchOutcome::Comparison(comparison) = &outcome {
        println!();
        print!("{}", render::table(comparison));
        println!();
        print!("{}", render::bar_chart(&comparison.summary(), render::BAR_WIDTH));
        if !comparison.agree() {
            return Err(anyhow!("Algorithms disagree on the optimal value"));
        }
    }

    if let Some(path) = sub_m.get_one::<PathBuf>("output") {
        if sub_m.get_flag("compress") {
            fs::write(path, compress_obj(&outcome)?)?;
        } else {
            fs::write(path, jsonify_pretty(&outcome)?)?;
        }
        println!("report written to: {:?}", path);
    }
    Ok(())
}
