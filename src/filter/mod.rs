pub mod belief;
pub mod error;
pub mod stdout;

pub use belief::{BeliefState, UpdateMode};
pub use error::FilterError;

/// Receives the predicted belief once per update.
#[cfg_attr(test, mockall::automock)]
pub trait Report {
    fn report(&mut self, mean: f64, variance: f64) -> Result<(), FilterError>;
}
