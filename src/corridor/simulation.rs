use super::{Cell, CorridorError, HistogramFilter};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Outcome of one simulated step.
#[derive(Debug, PartialEq, Clone)]
pub struct Step {
    pub index: usize,
    pub location: usize,
    pub beliefs: Vec<f64>,
    pub sensed: Cell,
    pub moved: bool,
    pub sensed_correctly: bool,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {} {} {}",
            self.index,
            self.location,
            self.beliefs.iter().map(|b| format!("  {b}")).join(""),
            self.sensed,
            self.moved,
            self.sensed_correctly
        )
    }
}

/// Drives a robot through the corridor and tracks it with a histogram filter.
pub struct Simulation<R: Rng> {
    filter: HistogramFilter,
    rng: R,
    location: usize,
}

impl Simulation<StdRng> {
    pub fn seeded(filter: HistogramFilter, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(filter, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(filter: HistogramFilter, mut rng: R) -> Self {
        let location = rng.gen_range(0..filter.corridor().len());
        Self {
            filter,
            rng,
            location,
        }
    }

    pub fn location(&self) -> usize {
        self.location
    }

    /// Moves the robot, senses, and runs the filter. The final step skips prediction so the
    /// reported beliefs match the last measurement.
    pub fn step(&mut self, index: usize, last: bool) -> Result<Step, CorridorError> {
        let corridor = self.filter.corridor();

        let moved = self
            .filter
            .motion()
            .attempt(corridor.cell(self.location), &mut self.rng);
        if moved {
            self.location = corridor.next(self.location);
        }

        let actual = corridor.cell(self.location);
        let sensed = self.filter.sensor().sense(actual, &mut self.rng);

        self.filter.measure(sensed)?;
        log::trace!("Measured beliefs: {:?}", self.filter.measured());
        if last {
            self.filter.settle();
        } else {
            self.filter.predict();
        }

        log::trace!(
            "Step {index}: at {} ({actual}), sensed {sensed}, moved: {moved}",
            self.location
        );

        Ok(Step {
            index,
            location: self.location,
            beliefs: self.filter.beliefs().to_vec(),
            sensed,
            moved,
            sensed_correctly: sensed == actual,
        })
    }

    pub fn run(&mut self, steps: usize) -> Result<Vec<Step>, CorridorError> {
        (0..steps)
            .map(|index| self.step(index, index + 1 == steps))
            .collect()
    }
}
