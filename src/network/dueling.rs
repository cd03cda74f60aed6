use ndarray::{Array2, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use super::{build_trunk, check_state_width, forward_layers, ValueNetwork};
use crate::activations::Activation;
use crate::error::{QrlError, Result};
use crate::layers::{DenseLayer, WeightInit};

/// Width of the hidden layer inside both dueling heads.
pub const HEAD_HIDDEN_UNITS: usize = 32;

/// Dueling Q-network.
///
/// A shared trunk (ReLU after every layer, including the last) feeds two heads:
///
/// - value head: `trunk_out -> 32 (ReLU) -> 1`, the state value `V`
/// - advantage head: `trunk_out -> 32 (ReLU) -> action_size`, the advantages `A`
///
/// and the output is `Q = V + (A - mean(A))` with the mean taken over actions
/// per sample, so the advantage term always averages to zero.
///
/// Only the first layer of each head uses Xavier-normal weights; the trunk and
/// the heads' output layers keep the default fan-in uniform scheme.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DuelingQNetwork {
    trunk: Vec<DenseLayer>,
    value_head: Vec<DenseLayer>,
    advantage_head: Vec<DenseLayer>,
    state_size: usize,
    action_size: usize,
}

impl DuelingQNetwork {
    /// Create a dueling Q-network whose parameters are drawn from a `StdRng`
    /// seeded with `seed`, in order: trunk, value head, advantage head.
    pub fn new(state_size: usize, action_size: usize, seed: u64, fc_units: &[usize]) -> Result<Self> {
        if action_size == 0 {
            return Err(QrlError::invalid_parameter("action_size", "must be greater than 0"));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let trunk = build_trunk(state_size, fc_units, &mut rng)?;
        let trunk_out = trunk.last().map(DenseLayer::output_size).unwrap_or(state_size);

        let value_head = build_head(trunk_out, 1, &mut rng)?;
        let advantage_head = build_head(trunk_out, action_size, &mut rng)?;

        let network = DuelingQNetwork {
            trunk,
            value_head,
            advantage_head,
            state_size,
            action_size,
        };
        log::debug!(
            "built dueling Q-network {} -> {:?} -> (1 | {}) ({} parameters, seed {})",
            state_size,
            fc_units,
            action_size,
            network.parameter_count(),
            seed
        );
        Ok(network)
    }

    /// State values `(batch, 1)` and raw, uncentered advantages `(batch, action_size)`.
    pub fn value_and_advantage(&self, states: ArrayView2<f32>) -> Result<(Array2<f32>, Array2<f32>)> {
        check_state_width(&states, self.state_size)?;
        let features = forward_layers(&self.trunk, states);
        let values = forward_layers(&self.value_head, features.view());
        let advantages = forward_layers(&self.advantage_head, features.view());
        Ok((values, advantages))
    }

    pub fn trunk(&self) -> &[DenseLayer] {
        &self.trunk
    }

    pub fn value_head(&self) -> &[DenseLayer] {
        &self.value_head
    }

    pub fn advantage_head(&self) -> &[DenseLayer] {
        &self.advantage_head
    }
}

impl ValueNetwork for DuelingQNetwork {
    fn forward_batch(&self, states: ArrayView2<f32>) -> Result<Array2<f32>> {
        let (values, advantages) = self.value_and_advantage(states)?;
        let mean_advantage = advantages
            .mean_axis(Axis(1))
            .ok_or_else(|| QrlError::NumericalError("advantage head has no outputs".to_string()))?
            .insert_axis(Axis(1));
        Ok(advantages - &mean_advantage + &values)
    }

    fn state_size(&self) -> usize {
        self.state_size
    }

    fn action_size(&self) -> usize {
        self.action_size
    }

    fn parameter_count(&self) -> usize {
        self.trunk
            .iter()
            .chain(&self.value_head)
            .chain(&self.advantage_head)
            .map(DenseLayer::parameter_count)
            .sum()
    }
}

fn build_head(input_size: usize, output_size: usize, rng: &mut StdRng) -> Result<Vec<DenseLayer>> {
    Ok(vec![
        DenseLayer::new_with_init(
            input_size,
            HEAD_HIDDEN_UNITS,
            Activation::Relu,
            WeightInit::XavierNormal,
            rng,
        )?,
        DenseLayer::new(HEAD_HIDDEN_UNITS, output_size, Activation::Linear, rng)?,
    ])
}
