use clap::Parser;
use kart_simulator::controller::KartController;
use kart_simulator::scenario::{self, ScenarioConfig};
use kart_simulator::simulation::Simulation;
use kart_tools::RaceConfig;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[clap(about = "Drive a kart around its waypoints through random obstacle fields")]
struct Arguments {
    #[clap(short = 'n', long, value_parser, default_value_t = scenario::DEFAULT_TICKS)]
    ticks: u32,

    /// Defaults to the current time.
    #[clap(short, long, value_parser)]
    seed: Option<u32>,

    #[clap(long, value_parser, default_value_t = 1000)]
    width: u32,

    #[clap(long, value_parser, default_value_t = 1000)]
    height: u32,

    #[clap(short, long, value_parser, default_value_t = 5)]
    obstacles: usize,

    #[clap(short, long, value_parser, default_value_t = 0.05)]
    boost_probability: f64,

    /// JSON file with "track" and "tunables".
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("race=info,kart_simulator=info"),
    )
    .init();

    let args = Arguments::parse();

    let kart = match &args.config {
        Some(path) => RaceConfig::load(path)?.controller(),
        None => KartController::default(),
    };
    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as u32,
    };
    let config = ScenarioConfig {
        ticks: args.ticks,
        width: args.width,
        height: args.height,
        obstacles: args.obstacles,
        boost_probability: args.boost_probability,
    };

    let mut sim = Simulation::new(kart, config, seed)?;
    sim.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    }
    Ok(())
}
