use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("division by zero while fusing variances {prior_variance} and {measurement_variance}")]
    DivisionByZero {
        prior_variance: f64,
        measurement_variance: f64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The final variance assignment of an update refers to a value that was never computed.
    #[error("belief variance is uninitialized after prediction")]
    UninitializedState,

    #[error("unable to report prediction")]
    Report(#[from] std::io::Error),
}
