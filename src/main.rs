use anyhow::{Context, Result};
use filter::{BeliefState, Report};

mod config;
mod corridor;
mod filter;
#[cfg(test)]
mod version;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::debug!(
        "kalman1d {} (major {}, minor {}, patch {})",
        env!("KALMAN1D_VERSION"),
        env!("KALMAN1D_VERSION_MAJOR"),
        env!("KALMAN1D_VERSION_MINOR"),
        env!("KALMAN1D_VERSION_PATCH")
    );

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => panic!("Unable to load config: {:#}", err),
    };

    log::debug!("Using {:#?}", config);

    if let Err(err) = run(&config, &mut filter::stdout::Stdout::new()) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(config: &config::app::Config, report: &mut dyn Report) -> Result<()> {
    run_kalman(&config.kalman, report)?;

    if let Some(corridor) = &config.corridor {
        for step in run_corridor(corridor)? {
            println!("{}", step);
        }
    }

    Ok(())
}

fn run_kalman(config: &config::app::Kalman, report: &mut dyn Report) -> Result<BeliefState> {
    let mut belief = BeliefState::try_new(
        config.prior_mean,
        config.prior_variance,
        config.measurement_mean,
        config.measurement_variance,
    )
    .context("Unable to construct belief state")?
    .with_mode(config.mode);

    for (i, measurement) in config.updates.iter().enumerate() {
        belief
            .update(measurement.mean, measurement.variance, report)
            .with_context(|| format!("Update #{} failed", i + 1))?;
    }

    Ok(belief)
}

fn run_corridor(config: &config::app::Corridor) -> Result<Vec<corridor::Step>> {
    log::debug!("Simulating {} steps in corridor {}", config.steps, config.corridor);

    let filter =
        corridor::HistogramFilter::new(config.corridor.clone(), config.sensor, config.motion);
    let mut simulation = corridor::Simulation::seeded(filter, config.seed);
    log::info!("Robot starts at cell {}", simulation.location());

    simulation
        .run(config.steps)
        .context("Corridor simulation failed")
}
