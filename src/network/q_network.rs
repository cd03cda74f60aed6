use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use super::{build_trunk, check_state_width, forward_layers, ValueNetwork};
use crate::activations::Activation;
use crate::error::{QrlError, Result};
use crate::layers::DenseLayer;

/// Plain feed-forward Q-network.
///
/// Layers run `state_size -> fc_units[0] -> ... -> fc_units[n-1] -> action_size`
/// with ReLU after every layer except the last, whose output is left raw.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QNetwork {
    layers: Vec<DenseLayer>,
    state_size: usize,
    action_size: usize,
}

impl QNetwork {
    /// Create a plain Q-network whose parameters are drawn from a `StdRng`
    /// seeded with `seed`.
    pub fn new(state_size: usize, action_size: usize, seed: u64, fc_units: &[usize]) -> Result<Self> {
        if action_size == 0 {
            return Err(QrlError::invalid_parameter("action_size", "must be greater than 0"));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut layers = build_trunk(state_size, fc_units, &mut rng)?;
        let last_width = layers.last().map(DenseLayer::output_size).unwrap_or(state_size);
        layers.push(DenseLayer::new(last_width, action_size, Activation::Linear, &mut rng)?);

        let network = QNetwork {
            layers,
            state_size,
            action_size,
        };
        log::debug!(
            "built plain Q-network {} -> {:?} -> {} ({} parameters, seed {})",
            state_size,
            fc_units,
            action_size,
            network.parameter_count(),
            seed
        );
        Ok(network)
    }

    /// All layers in evaluation order; the last one is the linear output layer.
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }
}

impl ValueNetwork for QNetwork {
    fn forward_batch(&self, states: ArrayView2<f32>) -> Result<Array2<f32>> {
        check_state_width(&states, self.state_size)?;
        Ok(forward_layers(&self.layers, states))
    }

    fn state_size(&self) -> usize {
        self.state_size
    }

    fn action_size(&self) -> usize {
        self.action_size
    }

    fn parameter_count(&self) -> usize {
        self.layers.iter().map(DenseLayer::parameter_count).sum()
    }
}
