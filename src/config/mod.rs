use crate::corridor::{MotionModel, SensorModel};
use crate::filter;
use anyhow::{Context, Result};
use std::fs;

pub mod app;
pub mod file;

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub fn load() -> Result<app::Config> {
    let file_config = match xdg::BaseDirectories::with_prefix("kalman1d")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config.toml"))
    {
        Some(path) => {
            log::debug!("Reading config from {}", path.display());
            fs::read_to_string(&path)
                .with_context(|| format!("Unable to read {}", path.display()))?
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    parse(&file_config)
}

pub fn parse(content: &str) -> Result<app::Config> {
    let cfg: file::Config = toml::from_str(content)?;

    Ok(app::Config {
        kalman: app::Kalman {
            prior_mean: cfg.kalman.prior_mean,
            prior_variance: cfg.kalman.prior_variance,
            measurement_mean: cfg.kalman.measurement_mean,
            measurement_variance: cfg.kalman.measurement_variance,
            mode: match cfg.kalman.mode {
                file::UpdateMode::Corrected => filter::UpdateMode::Corrected,
                file::UpdateMode::Literal => filter::UpdateMode::Literal,
            },
            updates: cfg
                .kalman
                .updates
                .into_iter()
                .map(|(mean, variance)| app::Measurement { mean, variance })
                .collect(),
        },

        corridor: cfg
            .corridor
            .map(|c| -> Result<app::Corridor> {
                Ok(app::Corridor {
                    corridor: c.cells.parse().context("Invalid corridor cells")?,
                    sensor: SensorModel::new(c.sense_wall_by_wall, c.sense_door_by_door)
                        .context("Invalid corridor sensor model")?,
                    motion: MotionModel::new(c.move_success_by_wall, c.move_success_by_door)
                        .context("Invalid corridor motion model")?,
                    steps: c.steps,
                    seed: c.seed,
                })
            })
            .transpose()?,
    })
}
