use clap::Parser;
use habitat_sim::config::Config;
use habitat_sim::creature::species::Species;
use habitat_sim::simulation::SimulationState;
use habitat_sim::stats::WorldSnapshot;
use tokio::time::{interval, Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "habitat-sim")]
#[command(about = "Predator/prey habitat simulation", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Write a JSON snapshot of the world here on exit
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Run ticks back to back instead of pacing them at ticks_per_second
    #[arg(long)]
    unpaced: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = if std::path::Path::new(&args.config).exists() {
        log::info!("Loading config from: {}", args.config);
        Config::load_from_file(&args.config)?
    } else {
        log::info!("Config file not found, using defaults and saving to: {}", args.config);
        let config = Config::default();
        config.save_to_file(&args.config)?;
        config
    };

    log::info!("Initializing simulation with seed {}...", config.simulation.seed);
    let mut state = SimulationState::new(&config)?;

    run_simulation(&mut state, &config, &args).await;

    if let Some(path) = &args.snapshot {
        WorldSnapshot::capture(&state).save_to_file(path)?;
        log::info!("Snapshot written to {}", path);
    }

    Ok(())
}

async fn run_simulation(state: &mut SimulationState, config: &Config, args: &Args) {
    let tick_duration = Duration::from_micros((1_000_000 / config.simulation.ticks_per_second).max(1));
    let mut tick_interval = interval(tick_duration);

    let mut last_log = Instant::now();
    let log_interval = Duration::from_secs(config.simulation.log_interval_seconds);

    loop {
        if !args.unpaced {
            tick_interval.tick().await;
        }

        state.tick(config, config.simulation.dt);

        if let Some(limit) = args.ticks {
            if state.tick >= limit {
                log_metrics(state);
                log::info!("Reached tick limit {}", limit);
                break;
            }
        }

        if state.population() == 0 {
            log_metrics(state);
            log::warn!("All creatures have died! Simulation ended.");
            break;
        }

        if last_log.elapsed() >= log_interval {
            log_metrics(state);
            last_log = Instant::now();
        }
    }
}

fn log_metrics(state: &SimulationState) {
    let metrics = state.metrics();
    log::info!(
        "Tick: {} | Time: {:.1} | Population: {} ({} rabbits, {} foxes) | Avg Hunger: {:.2} | Avg Thirst: {:.2} | Max Gen: {} | Plants: {} | Births: {} | Deaths: {}",
        metrics.tick,
        metrics.time,
        metrics.population,
        metrics.count_of(Species::Rabbit),
        metrics.count_of(Species::Fox),
        metrics.avg_hunger,
        metrics.avg_thirst,
        metrics.max_generation,
        metrics.plant_count,
        metrics.total_births,
        metrics.deaths.total()
    );
}
