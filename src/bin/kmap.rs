#[macro_use]
extern crate tracing;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use kmap_solver::{solve_batch, utils, Config, Cube, Problem, Solution, TermType, TruthTable};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    time::Instant,
};

#[derive(Debug, Parser)]
#[clap(about = "Minimize a boolean function of 2 to 5 variables")]
struct Args {
    /// Number of variables (2 to 5)
    #[clap(short, long, default_value_t = 4)]
    num_vars: u32,

    /// Whether the terms are minterms or maxterms
    #[clap(short, long, value_enum, default_value = "min")]
    mode: Mode,

    /// Required terms, separated by commas or spaces
    #[clap(short, long, default_value = "")]
    terms: String,

    /// Don't-care terms, separated by commas or spaces
    #[clap(short, long, default_value = "")]
    dont_cares: String,

    /// JSON file with one problem or an array of problems; overrides the term flags
    #[clap(short, long, value_parser, conflicts_with_all = &["terms", "dont_cares"])]
    config: Option<PathBuf>,

    /// Write the solutions as JSON
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Check every solution against its truth table
    #[clap(long)]
    verify: bool,

    /// Number of threads
    #[clap(long)]
    num_threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Minterms, sum of products
    #[clap(alias("sop"))]
    Min,
    /// Maxterms, product of sums
    #[clap(alias("pos"))]
    Max,
}

impl From<Mode> for TermType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Min => TermType::SumOfProducts,
            Mode::Max => TermType::ProductOfSums,
        }
    }
}

fn load_configs(args: &Args) -> Result<Vec<Config>> {
    match &args.config {
        Some(path) => {
            info!("load problems from {}...", path.display());
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Config::load_batch(BufReader::new(file))?)
        }
        None => Ok(vec![Config::new(
            args.num_vars,
            args.mode.into(),
            args.terms.as_str(),
            args.dont_cares.as_str(),
        )]),
    }
}

fn print_solution(solution: &Solution) {
    println!("{solution}");
    for (i, (group, term)) in solution.groups.iter().zip(&solution.terms).enumerate() {
        let kind = if i < solution.essentials {
            "essential"
        } else {
            "selected"
        };
        println!(
            "  group {}: {}-cell {} {} [{}] -> {}",
            i + 1,
            group.len(),
            kind,
            group,
            Cube::of(group, solution.num_vars).pattern(solution.num_vars),
            term
        );
    }
}

fn verify(problem: &Problem, solution: &Solution) -> Result<()> {
    let mismatches = TruthTable::new(problem).check(solution);
    if !mismatches.is_empty() {
        let rows = mismatches
            .iter()
            .map(|&t| format!("{} ({})", t, problem.num_vars.binary(t)))
            .collect::<Vec<_>>();
        bail!("{} disagrees with the truth table at {}", solution, rows.join(", "));
    }
    debug!("{} verified", solution);
    Ok(())
}

fn main() -> Result<()> {
    utils::init_tracing_subscriber("info")?;
    let args = Args::parse();
    debug!("args: {:#?}", args);
    utils::setup_rayon(args.num_threads)?;

    let problems = load_configs(&args)?
        .iter()
        .enumerate()
        .map(|(i, config)| {
            config
                .validate()
                .with_context(|| format!("invalid problem #{}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let begin = Instant::now();
    let solutions = solve_batch(&problems)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    info!("solved {} problems in {:?}", solutions.len(), begin.elapsed());

    for (problem, solution) in problems.iter().zip(&solutions) {
        print_solution(solution);
        if args.verify {
            verify(problem, solution)?;
        }
    }

    if let Some(output) = &args.output {
        let out = BufWriter::new(File::create(output)?);
        serde_json::to_writer_pretty(out, &solutions)?;
        info!("wrote {}", output.display());
    }

    Ok(())
}
