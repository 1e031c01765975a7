use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod filter;
pub mod model;
pub mod simulation;

pub use filter::HistogramFilter;
pub use model::{MotionModel, SensorModel};
pub use simulation::{Simulation, Step};

#[derive(Debug, Error, PartialEq)]
pub enum CorridorError {
    #[error("corridor has no cells")]
    Empty,

    #[error("invalid corridor cell '{0}', expected 'W' or 'D'")]
    InvalidCell(char),

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("belief vanished after measuring {0}, sensor model rules out every cell")]
    DegenerateBelief(Cell),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    Wall,
    Door,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Wall => write!(f, "wall"),
            Cell::Door => write!(f, "door"),
        }
    }
}

/// A cyclic corridor: moving forward from the last cell lands on the first one.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Corridor {
    cells: Vec<Cell>,
}

impl Corridor {
    pub fn new(cells: Vec<Cell>) -> Result<Self, CorridorError> {
        if cells.is_empty() {
            return Err(CorridorError::Empty);
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index % self.cells.len()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.cells.len()
    }

    pub fn prev(&self, index: usize) -> usize {
        if index == 0 {
            self.cells.len() - 1
        } else {
            index - 1
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            match cell {
                Cell::Wall => write!(f, "W")?,
                Cell::Door => write!(f, "D")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Corridor {
    type Err = CorridorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'W' => Ok(Cell::Wall),
                'D' => Ok(Cell::Door),
                _ => Err(CorridorError::InvalidCell(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cells)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<f64, CorridorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CorridorError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Door, Wall};

    #[test]
    fn test_parse_corridor() -> Result<(), CorridorError> {
        let corridor: Corridor = "WWd W\nD".parse()?;

        assert_eq!(&[Wall, Wall, Door, Wall, Door], corridor.cells());

        Ok(())
    }

    #[test]
    fn test_display_round_trips_cells() -> Result<(), CorridorError> {
        let corridor: Corridor = "wwD d".parse()?;

        assert_eq!("WWDD", corridor.to_string());

        Ok(())
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        assert_eq!(
            Err(CorridorError::InvalidCell('x')),
            "WWxD".parse::<Corridor>()
        );
    }

    #[test]
    fn test_parse_rejects_empty_corridor() {
        assert_eq!(Err(CorridorError::Empty), " \t".parse::<Corridor>());
    }

    #[test]
    fn test_neighbours_wrap_around() -> Result<(), CorridorError> {
        let corridor: Corridor = "WDW".parse()?;

        assert_eq!(1, corridor.next(0));
        assert_eq!(0, corridor.next(2));
        assert_eq!(2, corridor.prev(0));
        assert_eq!(1, corridor.prev(2));

        Ok(())
    }

    #[test]
    fn test_check_probability() {
        assert_eq!(Ok(0.0), check_probability("p", 0.0));
        assert_eq!(Ok(1.0), check_probability("p", 1.0));
        assert!(check_probability("p", 1.01).is_err());
        assert!(check_probability("p", -0.01).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }
}
