use super::{check_probability, Cell, CorridorError};
use rand::Rng;

/// Probability of sensing the true type of the cell the robot stands in.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SensorModel {
    wall_by_wall: f64,
    door_by_door: f64,
}

impl SensorModel {
    pub fn new(wall_by_wall: f64, door_by_door: f64) -> Result<Self, CorridorError> {
        Ok(Self {
            wall_by_wall: check_probability("sense_wall_by_wall", wall_by_wall)?,
            door_by_door: check_probability("sense_door_by_door", door_by_door)?,
        })
    }

    fn correct(&self, cell: Cell) -> f64 {
        match cell {
            Cell::Wall => self.wall_by_wall,
            Cell::Door => self.door_by_door,
        }
    }

    /// p(sensed | cell)
    pub fn likelihood(&self, cell: Cell, sensed: Cell) -> f64 {
        if cell == sensed {
            self.correct(cell)
        } else {
            1.0 - self.correct(cell)
        }
    }

    pub fn sense<R: Rng>(&self, cell: Cell, rng: &mut R) -> Cell {
        if rng.gen::<f64>() < self.correct(cell) {
            cell
        } else {
            match cell {
                Cell::Wall => Cell::Door,
                Cell::Door => Cell::Wall,
            }
        }
    }
}

/// Probability that a single forward step succeeds, depending on the cell it starts from.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MotionModel {
    success_by_wall: f64,
    success_by_door: f64,
}

impl MotionModel {
    pub fn new(success_by_wall: f64, success_by_door: f64) -> Result<Self, CorridorError> {
        Ok(Self {
            success_by_wall: check_probability("move_success_by_wall", success_by_wall)?,
            success_by_door: check_probability("move_success_by_door", success_by_door)?,
        })
    }

    pub fn success(&self, from: Cell) -> f64 {
        match from {
            Cell::Wall => self.success_by_wall,
            Cell::Door => self.success_by_door,
        }
    }

    pub fn attempt<R: Rng>(&self, from: Cell, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.success(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_likelihood() -> Result<(), CorridorError> {
        let sensor = SensorModel::new(0.75, 0.5)?;

        assert_eq!(0.75, sensor.likelihood(Cell::Wall, Cell::Wall));
        assert_eq!(0.25, sensor.likelihood(Cell::Wall, Cell::Door));
        assert_eq!(0.5, sensor.likelihood(Cell::Door, Cell::Door));
        assert_eq!(0.5, sensor.likelihood(Cell::Door, Cell::Wall));

        Ok(())
    }

    #[test]
    fn test_perfect_sensor_never_lies() -> Result<(), CorridorError> {
        let sensor = SensorModel::new(1.0, 1.0)?;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(Cell::Wall, sensor.sense(Cell::Wall, &mut rng));
            assert_eq!(Cell::Door, sensor.sense(Cell::Door, &mut rng));
        }

        Ok(())
    }

    #[test]
    fn test_inverted_sensor_always_lies() -> Result<(), CorridorError> {
        let sensor = SensorModel::new(0.0, 0.0)?;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(Cell::Door, sensor.sense(Cell::Wall, &mut rng));
            assert_eq!(Cell::Wall, sensor.sense(Cell::Door, &mut rng));
        }

        Ok(())
    }

    #[test]
    fn test_motion_attempt_follows_success_probability() -> Result<(), CorridorError> {
        let motion = MotionModel::new(1.0, 0.0)?;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert!(motion.attempt(Cell::Wall, &mut rng));
            assert!(!motion.attempt(Cell::Door, &mut rng));
        }

        Ok(())
    }

    #[test]
    fn test_models_reject_invalid_probabilities() {
        assert_eq!(
            Err(CorridorError::InvalidProbability {
                name: "sense_door_by_door",
                value: 1.5
            }),
            SensorModel::new(0.9, 1.5)
        );
        assert_eq!(
            Err(CorridorError::InvalidProbability {
                name: "move_success_by_wall",
                value: -0.1
            }),
            MotionModel::new(-0.1, 0.9)
        );
    }
}
