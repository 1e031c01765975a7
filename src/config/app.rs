use crate::corridor::{self, MotionModel, SensorModel};
use crate::filter::UpdateMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mean: f64,
    pub variance: f64,
}

#[derive(Debug, Clone)]
pub struct Kalman {
    pub prior_mean: f64,
    pub prior_variance: f64,
    pub measurement_mean: f64,
    pub measurement_variance: f64,
    pub mode: UpdateMode,
    pub updates: Vec<Measurement>,
}

#[derive(Debug, Clone)]
pub struct Corridor {
    pub corridor: corridor::Corridor,
    pub sensor: SensorModel,
    pub motion: MotionModel,
    pub steps: usize,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub struct Config {
    pub kalman: Kalman,
    pub corridor: Option<Corridor>,
}
