use serde::Deserialize;

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    #[default]
    Corrected,
    Literal,
}

#[derive(Deserialize, Debug)]
pub struct Kalman {
    pub prior_mean: f64,
    pub prior_variance: f64,
    pub measurement_mean: f64,
    pub measurement_variance: f64,
    #[serde(default)]
    pub mode: UpdateMode,
    #[serde(default)]
    pub updates: Vec<(f64, f64)>,
}

#[derive(Deserialize, Debug)]
pub struct Corridor {
    pub cells: String,
    pub steps: usize,
    pub seed: Option<u64>,
    pub sense_wall_by_wall: f64,
    pub sense_door_by_door: f64,
    pub move_success_by_wall: f64,
    pub move_success_by_door: f64,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub kalman: Kalman,
    pub corridor: Option<Corridor>,
}
