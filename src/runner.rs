//! The command line front-end: builds an instance, solves it and prints the schedule in the
//! console format of the timetabling office.
use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::extraction::extract;
use crate::extraction::AssignmentReport;
use crate::model::Dimensions;
use crate::model::TimetableInstance;
use crate::model::TimetableModel;
use crate::options::BoundStrategy;
use crate::options::SearchStrategy;
use crate::options::SolverOptions;
use crate::results::SolveOutcome;
use crate::results::TerminalState;
use crate::statistics::configure;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::termination::Combinator;
use crate::termination::NodeBudget;
use crate::termination::OsSignal;
use crate::termination::TimeBudget;

#[derive(Debug, clap::Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Action,

    /// The number of seconds the solver is allowed to run.
    #[arg(short = 'T', long = "time-out", global = true)]
    pub time_out: Option<u64>,

    /// The number of search nodes each worker is allowed to visit.
    #[arg(short = 'N', long = "node-limit", global = true)]
    pub node_limit: Option<u64>,

    /// The number of threads searching in parallel.
    #[arg(short = 'W', long = "workers", global = true, default_value = "1")]
    pub workers: NonZeroUsize,

    /// The search strategy to use.
    #[arg(short = 'S', long = "search", value_enum, global = true, default_value_t)]
    pub search_strategy: SearchStrategy,

    /// The upper bound used to prune the search.
    #[arg(short = 'B', long = "bound", value_enum, global = true, default_value_t)]
    pub bound: BoundStrategy,

    /// Whether to log the statistics of the solver.
    #[arg(long = "statistics", global = true)]
    pub log_statistics: bool,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Action {
    /// Solve the sample week: five professors and subjects over five days of four slots in
    /// three halls.
    Sample,

    /// Solve an instance with randomly drawn preferences.
    Random {
        #[arg(long, default_value_t = 5)]
        professors: usize,
        #[arg(long, default_value_t = 5)]
        subjects: usize,
        #[arg(long, default_value_t = 5)]
        days: usize,
        #[arg(long, default_value_t = 4)]
        slots: usize,
        #[arg(long, default_value_t = 3)]
        halls: usize,

        /// The seed of the preference generator.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// The probability that a professor prefers a given slot.
        #[arg(long, default_value_t = 0.3)]
        density: f64,
    },
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    configure(args.log_statistics, "%% ", None);

    let instance = match args.command {
        Action::Sample => TimetableInstance::sample(),
        Action::Random {
            professors,
            subjects,
            days,
            slots,
            halls,
            seed,
            density,
        } => {
            let dimensions = Dimensions::new(professors, subjects, days, slots, halls)
                .context("Invalid timetable dimensions")?;
            TimetableInstance::random(dimensions, density, seed)
                .context("Failed to generate the preferences")?
        }
    };

    let options = SolverOptions {
        search_strategy: args.search_strategy,
        bound: args.bound,
        num_workers: args.workers,
    };

    let termination = Combinator::new(
        OsSignal::install().context("Failed to install the SIGINT handler")?,
        Combinator::new(
            args.time_out
                .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds))),
            args.node_limit.map(NodeBudget::new),
        ),
    );

    let model = TimetableModel::new(instance);
    let outcome = crate::solve(&model, &options, termination);

    match extract(&outcome, &model) {
        Ok(report) => print_schedule(&report, model.instance().dimensions()),
        Err(error) => println!("No optimal solution found! ({error})"),
    }

    print_statistics(&outcome);

    Ok(())
}

fn print_schedule(report: &AssignmentReport, dimensions: &Dimensions) {
    match report.state() {
        TerminalState::Optimal => println!("Optimal Schedule:"),
        _ => println!("Best Schedule Found (optimality not proven):"),
    }

    for day in 0..dimensions.days() {
        println!("Day {day}:");
        for duty in report.day_schedule(day) {
            println!(
                "  - Prof {} teaches Subject {} in Hall {} at Slot {}.",
                duty.professor, duty.subject, duty.hall, duty.slot
            );
        }
        println!();
    }

    println!("Preference satisfaction: {}", report.objective_value());
}

fn print_statistics(outcome: &SolveOutcome) {
    let statistics = &outcome.statistics;

    println!("\nSolver Statistics:");
    println!("  - Conflicts: {}", statistics.conflicts);
    println!("  - Branches: {}", statistics.branches);
    println!("  - Wall time: {}s", statistics.elapsed.as_secs_f64());

    log_statistic("state", outcome.state);
    if let Some(objective_value) = outcome.objective_value() {
        log_statistic("objective", objective_value);
    }
    log_statistic("numberOfNodes", statistics.nodes);
    log_statistic("numberOfDecisions", statistics.branches);
    log_statistic("numberOfConflicts", statistics.conflicts);
    log_statistic("numberOfPrunedNodes", statistics.pruned);
    log_statistic("numberOfImprovingSolutions", statistics.solutions);
    log_statistic("numberOfPropagations", statistics.propagations);
    log_statistic("budgetExhausted", statistics.budget_exhausted);
    log_statistic_postfix();
}
