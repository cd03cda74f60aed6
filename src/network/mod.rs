//! # Q-Network Module
//!
//! Function approximators mapping a state vector to one value estimate per
//! discrete action.
//!
//! - [`QNetwork`]: plain feed-forward stack, ReLU between layers and a raw
//!   linear output layer.
//! - [`DuelingQNetwork`]: a ReLU trunk feeding a scalar value head and a
//!   per-action advantage head, recombined as `Q = V + (A - mean(A))`.
//! - [`FunctionApproximator`]: either of the above, chosen at runtime from a
//!   [`QNetworkConfig`](crate::config::QNetworkConfig).
//!
//! Layers are built once at construction from a seeded `StdRng` and never
//! resized afterwards. Forward passes take `&self`, so a network can be shared
//! between threads as long as nobody mutates its parameters concurrently.
//!
//! ## Example
//!
//! ```rust
//! use qrl_navigation::network::{DuelingQNetwork, ValueNetwork};
//! use ndarray::array;
//!
//! let network = DuelingQNetwork::new(4, 2, 0, &[64, 64]).unwrap();
//! let q_values = network.forward(array![0.1, -0.2, 0.3, -0.1].view()).unwrap();
//! assert_eq!(q_values.len(), 2);
//! ```

mod dueling;
mod q_network;

pub use dueling::{DuelingQNetwork, HEAD_HIDDEN_UNITS};
pub use q_network::QNetwork;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activations::Activation;
use crate::config::{Architecture, QNetworkConfig};
use crate::error::{QrlError, Result};
use crate::layers::DenseLayer;

/// Hidden widths used when none are configured.
pub const DEFAULT_FC_UNITS: [usize; 2] = [64, 64];

/// Common interface of every state -> action-values approximator.
pub trait ValueNetwork: Send + Sync {
    /// Per-action value estimates for a `(batch, state_size)` matrix of states.
    fn forward_batch(&self, states: ArrayView2<f32>) -> Result<Array2<f32>>;

    fn state_size(&self) -> usize;

    fn action_size(&self) -> usize;

    /// Number of trainable scalars across all layers.
    fn parameter_count(&self) -> usize;

    /// Per-action value estimates for a single state.
    fn forward(&self, state: ArrayView1<f32>) -> Result<Array1<f32>> {
        let states = state.insert_axis(Axis(0));
        let q_values = self.forward_batch(states)?;
        Ok(q_values.index_axis_move(Axis(0), 0))
    }

    /// Index of the highest value estimate; the lowest index wins ties.
    fn greedy_action(&self, state: ArrayView1<f32>) -> Result<usize> {
        let q_values = self.forward(state)?;
        let mut best = 0;
        for (action, &value) in q_values.iter().enumerate() {
            if value > q_values[best] {
                best = action;
            }
        }
        Ok(best)
    }
}

/// A plain or dueling Q-network selected at runtime.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum FunctionApproximator {
    Plain(QNetwork),
    Dueling(DuelingQNetwork),
}

impl FunctionApproximator {
    /// Build the network described by `config`, validating it first.
    pub fn from_config(config: &QNetworkConfig) -> Result<Self> {
        config.validate()?;
        let network = match config.architecture {
            Architecture::Plain => FunctionApproximator::Plain(QNetwork::new(
                config.state_size,
                config.action_size,
                config.seed,
                &config.fc_units,
            )?),
            Architecture::Dueling => FunctionApproximator::Dueling(DuelingQNetwork::new(
                config.state_size,
                config.action_size,
                config.seed,
                &config.fc_units,
            )?),
        };
        Ok(network)
    }

    pub fn architecture(&self) -> Architecture {
        match self {
            FunctionApproximator::Plain(_) => Architecture::Plain,
            FunctionApproximator::Dueling(_) => Architecture::Dueling,
        }
    }
}

impl ValueNetwork for FunctionApproximator {
    fn forward_batch(&self, states: ArrayView2<f32>) -> Result<Array2<f32>> {
        match self {
            FunctionApproximator::Plain(network) => network.forward_batch(states),
            FunctionApproximator::Dueling(network) => network.forward_batch(states),
        }
    }

    fn state_size(&self) -> usize {
        match self {
            FunctionApproximator::Plain(network) => network.state_size(),
            FunctionApproximator::Dueling(network) => network.state_size(),
        }
    }

    fn action_size(&self) -> usize {
        match self {
            FunctionApproximator::Plain(network) => network.action_size(),
            FunctionApproximator::Dueling(network) => network.action_size(),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            FunctionApproximator::Plain(network) => network.parameter_count(),
            FunctionApproximator::Dueling(network) => network.parameter_count(),
        }
    }
}

/// Reject hidden-width lists that cannot describe a network.
pub(crate) fn validate_fc_units(fc_units: &[usize]) -> Result<()> {
    if fc_units.is_empty() {
        return Err(QrlError::invalid_parameter(
            "fc_units",
            "must contain at least one hidden layer width",
        ));
    }
    if let Some(position) = fc_units.iter().position(|&units| units == 0) {
        return Err(QrlError::invalid_parameter(
            "fc_units".to_string(),
            format!("width at position {} must be greater than 0", position),
        ));
    }
    Ok(())
}

/// Build `state_size -> fc_units[0] -> ... -> fc_units[n-1]`, every layer ReLU.
pub(crate) fn build_trunk<R: Rng + ?Sized>(
    state_size: usize,
    fc_units: &[usize],
    rng: &mut R,
) -> Result<Vec<DenseLayer>> {
    validate_fc_units(fc_units)?;
    let mut widths = Vec::with_capacity(fc_units.len() + 1);
    widths.push(state_size);
    widths.extend_from_slice(fc_units);

    widths
        .windows(2)
        .map(|window| DenseLayer::new(window[0], window[1], Activation::Relu, rng))
        .collect()
}

/// Run `inputs` through `layers` in order.
pub(crate) fn forward_layers(layers: &[DenseLayer], inputs: ArrayView2<f32>) -> Array2<f32> {
    let mut current = inputs.to_owned();
    for layer in layers {
        current = layer.forward_batch(current.view());
    }
    current
}

pub(crate) fn check_state_width(states: &ArrayView2<f32>, state_size: usize) -> Result<()> {
    if states.ncols() != state_size {
        return Err(QrlError::dimension_mismatch(
            format!("{} state features", state_size),
            format!("{} state features", states.ncols()),
        ));
    }
    Ok(())
}
