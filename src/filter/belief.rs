use super::{FilterError, Report};

// Measurement fused into the belief on every update, regardless of what the caller passes in.
const FUSION_MEASUREMENT_MEAN: f64 = 0.8;
const FUSION_MEASUREMENT_VARIANCE: f64 = 0.1;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Gaussian {
    pub mean: f64,
    pub variance: f64,
}

impl Gaussian {
    pub fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }
}

/// How the last step of `BeliefState::update` assigns the variance.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum UpdateMode {
    /// Keep the predicted variance, giving a working filter.
    #[default]
    Corrected,
    /// Fail after reporting, leaving the fused (not predicted) belief in place.
    Literal,
}

#[derive(Debug, Clone)]
pub struct BeliefState {
    pub mean: f64,
    pub variance: f64,
    pub measurement_mean: f64,
    pub measurement_variance: f64,
    mode: UpdateMode,
}

impl BeliefState {
    pub fn new(
        prior_mean: f64,
        prior_variance: f64,
        measurement_mean: f64,
        measurement_variance: f64,
    ) -> Self {
        Self {
            mean: prior_mean,
            variance: prior_variance,
            measurement_mean,
            measurement_variance,
            mode: UpdateMode::default(),
        }
    }

    /// Same as `new`, but rejects NaN values and negative variances.
    pub fn try_new(
        prior_mean: f64,
        prior_variance: f64,
        measurement_mean: f64,
        measurement_variance: f64,
    ) -> Result<Self, FilterError> {
        let values = [
            ("prior_mean", prior_mean),
            ("prior_variance", prior_variance),
            ("measurement_mean", measurement_mean),
            ("measurement_variance", measurement_variance),
        ];

        if let Some((name, _)) = values.iter().find(|(_, v)| v.is_nan()) {
            return Err(FilterError::InvalidArgument(format!("{name} is NaN")));
        }

        for (name, variance) in [values[1], values[3]] {
            if variance < 0.0 {
                return Err(FilterError::InvalidArgument(format!(
                    "{name} must be non-negative, got {variance}"
                )));
            }
        }

        Ok(Self::new(
            prior_mean,
            prior_variance,
            measurement_mean,
            measurement_variance,
        ))
    }

    pub fn with_mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fuses the belief with a fixed measurement, predicts through the stored motion pair and
    /// reports the prediction.
    ///
    /// `measurement_mean` and `measurement_variance` are accepted but never read: the fusion
    /// step always uses `(0.8, 0.1)` and the prediction step uses the pair given at
    /// construction.
    pub fn update(
        &mut self,
        measurement_mean: f64,
        measurement_variance: f64,
        report: &mut dyn Report,
    ) -> Result<(), FilterError> {
        log::trace!(
            "Ignoring update input ({measurement_mean}, {measurement_variance}) in favour of ({}, {})",
            FUSION_MEASUREMENT_MEAN,
            FUSION_MEASUREMENT_VARIANCE
        );

        let fused = fuse(
            self.mean,
            self.variance,
            FUSION_MEASUREMENT_MEAN,
            FUSION_MEASUREMENT_VARIANCE,
        )?;
        self.mean = fused.mean;
        self.variance = fused.variance;

        let predicted = predict(
            self.mean,
            self.variance,
            self.measurement_mean,
            self.measurement_variance,
        );

        log::trace!(
            "Fused ({}, {}), predicted ({}, {})",
            self.mean,
            self.variance,
            predicted.mean,
            predicted.variance
        );

        report.report(predicted.mean, predicted.variance)?;

        match self.mode {
            UpdateMode::Corrected => self.variance = predicted.variance,
            UpdateMode::Literal => return Err(FilterError::UninitializedState),
        }
        self.mean = predicted.mean;

        Ok(())
    }
}

/// Variance-weighted average of two means; the one with the smaller variance dominates.
pub fn fuse_mean(
    prior_mean: f64,
    prior_variance: f64,
    measurement_mean: f64,
    measurement_variance: f64,
) -> Result<f64, FilterError> {
    let denominator = prior_variance + measurement_variance;
    if denominator == 0.0 {
        return Err(FilterError::DivisionByZero {
            prior_variance,
            measurement_variance,
        });
    }

    Ok((prior_variance * measurement_mean + prior_mean * measurement_variance) / denominator)
}

/// Combines the squared variances harmonically: `1 / (1/a² + 1/b²)`.
///
/// This is the identity for combining standard deviations, applied here to variances. It only
/// agrees with the usual variance fusion when both inputs are 1.
pub fn fuse_variance(prior_variance: f64, measurement_variance: f64) -> Result<f64, FilterError> {
    if prior_variance == 0.0 || measurement_variance == 0.0 {
        return Err(FilterError::DivisionByZero {
            prior_variance,
            measurement_variance,
        });
    }

    Ok(1.0 / (1.0 / prior_variance.powi(2) + 1.0 / measurement_variance.powi(2)))
}

pub fn fuse(
    prior_mean: f64,
    prior_variance: f64,
    measurement_mean: f64,
    measurement_variance: f64,
) -> Result<Gaussian, FilterError> {
    Ok(Gaussian::new(
        fuse_mean(
            prior_mean,
            prior_variance,
            measurement_mean,
            measurement_variance,
        )?,
        fuse_variance(prior_variance, measurement_variance)?,
    ))
}

/// Additive motion model. The variance grows by the prior *mean*; `measurement_variance` is
/// not used.
pub fn predict(
    prior_mean: f64,
    prior_variance: f64,
    measurement_mean: f64,
    _measurement_variance: f64,
) -> Gaussian {
    Gaussian::new(prior_mean + measurement_mean, prior_variance + prior_mean)
}
