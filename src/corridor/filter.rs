use super::{Cell, Corridor, CorridorError, MotionModel, SensorModel};

/// Discrete Bayes filter over the cells of a corridor.
#[derive(Debug, Clone)]
pub struct HistogramFilter {
    corridor: Corridor,
    sensor: SensorModel,
    motion: MotionModel,
    beliefs: Vec<f64>,
    beliefs_bar: Vec<f64>,
}

impl HistogramFilter {
    pub fn new(corridor: Corridor, sensor: SensorModel, motion: MotionModel) -> Self {
        let len = corridor.len();
        Self {
            corridor,
            sensor,
            motion,
            beliefs: vec![1.0 / len as f64; len],
            beliefs_bar: vec![0.0; len],
        }
    }

    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    pub fn sensor(&self) -> &SensorModel {
        &self.sensor
    }

    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    pub fn beliefs(&self) -> &[f64] {
        &self.beliefs
    }

    /// Belief after the most recent measurement, before prediction.
    pub fn measured(&self) -> &[f64] {
        &self.beliefs_bar
    }

    pub fn measure(&mut self, sensed: Cell) -> Result<(), CorridorError> {
        for (i, bar) in self.beliefs_bar.iter_mut().enumerate() {
            *bar = self.sensor.likelihood(self.corridor.cell(i), sensed) * self.beliefs[i];
        }

        normalize(&mut self.beliefs_bar).ok_or(CorridorError::DegenerateBelief(sensed))
    }

    /// Moves the measured belief one cell forward through the motion model.
    pub fn predict(&mut self) {
        for i in 0..self.beliefs.len() {
            let prev = self.corridor.prev(i);
            let moved_in = self.beliefs_bar[prev] * self.motion.success(self.corridor.cell(prev));
            let stayed = self.beliefs_bar[i] * (1.0 - self.motion.success(self.corridor.cell(i)));
            self.beliefs[i] = moved_in + stayed;
        }
    }

    /// Adopts the measured belief as-is, without moving it.
    pub fn settle(&mut self) {
        self.beliefs.copy_from_slice(&self.beliefs_bar);
    }
}

fn normalize(values: &mut [f64]) -> Option<()> {
    let sum: f64 = values.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return None;
    }
    values.iter_mut().for_each(|v| *v /= sum);
    Some(())
}
