use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Normal, Uniform};
use serde::{Serialize, Deserialize};

use crate::error::{QrlError, Result};

/// Weight initialization strategies
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum WeightInit {
    /// Default linear-layer scheme: uniform in `±1/sqrt(fan_in)`
    #[default]
    FanInUniform,

    /// Xavier/Glorot uniform initialization
    XavierUniform,

    /// Xavier/Glorot normal initialization
    XavierNormal,

    /// All zeros
    Zeros,
}

impl WeightInit {
    /// Initialize a `(fan_in, fan_out)` weight matrix, drawing from `rng`.
    pub fn initialize_weights<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<f32>> {
        let (fan_in, fan_out) = shape;

        match self {
            WeightInit::FanInUniform => {
                let bound = fan_in_bound(fan_in)?;
                Ok(Array2::random_using(shape, Uniform::new_inclusive(-bound, bound), rng))
            }

            WeightInit::XavierUniform => {
                let limit = (6.0 / checked_fan_sum(fan_in, fan_out)? as f32).sqrt();
                Ok(Array2::random_using(shape, Uniform::new_inclusive(-limit, limit), rng))
            }

            WeightInit::XavierNormal => {
                let std = (2.0 / checked_fan_sum(fan_in, fan_out)? as f32).sqrt();
                let normal = Normal::new(0.0, std)
                    .map_err(|e| QrlError::NumericalError(e.to_string()))?;
                Ok(Array2::random_using(shape, normal, rng))
            }

            WeightInit::Zeros => Ok(Array2::zeros(shape)),
        }
    }

    /// Initialize the bias vector of a layer with `fan_in` inputs.
    ///
    /// Every non-zero scheme only shapes the weights; biases keep the
    /// fan-in uniform default.
    pub fn initialize_biases<R: Rng + ?Sized>(
        &self,
        fan_in: usize,
        size: usize,
        rng: &mut R,
    ) -> Result<Array1<f32>> {
        match self {
            WeightInit::Zeros => Ok(Array1::zeros(size)),
            WeightInit::FanInUniform | WeightInit::XavierUniform | WeightInit::XavierNormal => {
                let bound = fan_in_bound(fan_in)?;
                Ok(Array1::random_using(size, Uniform::new_inclusive(-bound, bound), rng))
            }
        }
    }
}

fn fan_in_bound(fan_in: usize) -> Result<f32> {
    if fan_in == 0 {
        return Err(QrlError::invalid_parameter("fan_in", "must be greater than 0"));
    }
    Ok(1.0 / (fan_in as f32).sqrt())
}

fn checked_fan_sum(fan_in: usize, fan_out: usize) -> Result<usize> {
    match fan_in + fan_out {
        0 => Err(QrlError::invalid_parameter("fan_in + fan_out", "must be greater than 0")),
        sum => Ok(sum),
    }
}
