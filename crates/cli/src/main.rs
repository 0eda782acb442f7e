#![warn(clippy::pedantic)]

mod logger;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use wellfit_domain::{InvalidParameter, PlanError, PlanRequest, Planner, WeeklyPlan};
use wellfit_storage::JsonCatalog;

#[derive(Parser, Debug)]
#[command(
    name = "wellfit",
    about = "Generate a weekly workout plan from an exercise catalog"
)]
struct Args {
    /// Fitness goal: fat_loss, muscle_gain or endurance
    #[arg(long, default_value = "muscle_gain")]
    goal: String,

    /// Experience level: beginner or intermediate
    #[arg(long, default_value = "beginner")]
    level: String,

    /// Workout days per week (3-6)
    #[arg(long, default_value_t = 4)]
    days: u32,

    /// Minutes available per session (20-120)
    #[arg(long, default_value_t = 60)]
    minutes: u32,

    /// JSON file containing the exercise catalog
    #[arg(long, env = "WELLFIT_CATALOG")]
    catalog: PathBuf,

    /// Seed for reproducible exercise selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(&args)?;

    let request = parse_request(&args)?;
    info!(
        "generating {} plan for {} level, {} days per week, {} minutes per session",
        request.fitness_goal,
        request.experience_level,
        request.days_per_week,
        request.session_minutes
    );

    let plan = create_plan(&args, request)
        .with_context(|| format!("failed to create plan from {}", args.catalog.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{plan}");
    }

    Ok(())
}

fn init_logger(args: &Args) -> anyhow::Result<()> {
    logger::init(args.log_level()).context("failed to initialize logger")
}

fn parse_request(args: &Args) -> Result<PlanRequest, InvalidParameter> {
    PlanRequest::parse(&args.goal, &args.level, args.days, args.minutes)
        .inspect_err(|err| warn!("failed to create plan: {err}"))
}

fn create_plan(args: &Args, request: PlanRequest) -> Result<WeeklyPlan, PlanError> {
    let planner = Planner::new(JsonCatalog::new(&args.catalog));
    match args.seed {
        Some(seed) => planner.create_plan(request, &mut StdRng::seed_from_u64(seed)),
        None => planner.create_plan(request, &mut rand::thread_rng()),
    }
}
