use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use alncheck::driver::AlignerCommand;
use alncheck::runner::{run_iteration, IterationOutcome, RunConfig, RunTally};

#[derive(Parser, Debug)]
#[command(author, version, about = "Randomized black-box checks for a pairwise contig aligner", long_about = None)]
struct Args {
    /// Number of randomized iterations to run
    #[arg(short, long, default_value = "50")]
    number: usize,

    /// Path to the aligner executable under test
    #[arg(short, long, default_value = "./aligner")]
    aligner: PathBuf,

    /// Master seed; defaults to a fresh random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for per-iteration FASTA and report files
    #[arg(long, default_value = "test")]
    work_dir: PathBuf,

    /// Stop at the first failing or inconclusive iteration
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let master_seed = args.seed.unwrap_or_else(rand::random);
    println!("Master seed: {master_seed}");
    let mut seed_stream = StdRng::seed_from_u64(master_seed);

    let config = RunConfig {
        aligner: AlignerCommand::new(&args.aligner),
        work_dir: args.work_dir,
    };

    let mut tally = RunTally::default();
    for i in 1..=args.number {
        // Every iteration gets its own printed seed so it can be replayed.
        let iteration_seed: u64 = seed_stream.gen();
        let mut rng = StdRng::seed_from_u64(iteration_seed);

        println!("\nTest {i} (seed {iteration_seed}):");
        let outcome = run_iteration(&mut rng, &config);
        match &outcome {
            IterationOutcome::Completed(verdict) => {
                let tag = verdict.kind.report_tag();
                println!("Expected {tag} locations: {:?}", verdict.expected);
                println!("Actual {tag} locations:   {:?}", verdict.actual);
                println!("{}", if verdict.passed { "PASS" } else { "FAIL" });
            }
            IterationOutcome::Inconclusive(err) => {
                eprintln!("INCONCLUSIVE: {err}");
            }
        }
        tally.record(&outcome);

        if args.fail_fast && !tally.all_passed() {
            break;
        }
    }

    println!(
        "\n{} passed, {} failed, {} inconclusive",
        tally.passed, tally.failed, tally.inconclusive
    );
    if tally.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
