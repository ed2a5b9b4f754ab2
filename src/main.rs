use std::{path::PathBuf, process::ExitCode, sync::Arc};

use airland::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    problem::LandingProblem,
    rng::RandomNumberGenerator,
    Result, ResultExt,
};
use clap::Parser;
use tracing::error;

/// Schedule aircraft landings on a single runway with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem file in the OR-Library airland layout.
    file: PathBuf,

    /// Generation cap.
    #[arg(short, long, default_value_t = 1000)]
    generations: usize,

    /// Population size.
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log every generation.
    #[arg(short, long)]
    verbose: bool,
}

fn ordinal(value: i64) -> &'static str {
    match (value.rem_euclid(100), value.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

fn run(args: Args) -> Result<()> {
    let problem = LandingProblem::from_path(&args.file)
        .context(format!("loading {}", args.file.display()))?;
    let problem = Arc::new(problem);

    let options = EvolutionOptions::builder()
        .num_generations(args.generations)
        .population_size(args.population)
        .log_level(if args.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Minimal
        })
        .build();
    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let launcher = EvolutionLauncher::for_problem(Arc::clone(&problem));
    let result = launcher.evolve(&options, &mut rng)?;

    println!(
        "======== FINAL WINNER AFTER {} GENERATIONS ({:?}) ========",
        result.generations, result.termination
    );
    println!("Landing schedule:");
    for (id, time) in result.pheno.landing_times(&problem) {
        println!("Aircraft {} lands at the {}{} time unit.", id, time, ordinal(time));
    }
    println!("DNA of solution:\n{}", result.pheno.dna());
    println!("Penalty incurred: {}", result.score);
    println!("Execution time: {:.3} seconds", result.elapsed.as_secs_f64());

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
