//! # qrl-navigation - Q-Networks and Experience Replay
//!
//! The two building blocks of a value-based reinforcement-learning agent:
//!
//! - **Function approximators** mapping a state vector to one value estimate
//!   per discrete action, as a plain feed-forward network or a dueling
//!   network (`Q = V + (A - mean(A))`).
//! - **A replay buffer** holding a fixed number of transitions, evicting the
//!   oldest first and sampling uniformly without replacement.
//!
//! The two are independent. A training loop (not part of this crate) samples
//! batches from the buffer and feeds their states through a network.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrl_navigation::builders::{QNetworkBuilder, ReplayBufferBuilder};
//! use qrl_navigation::network::ValueNetwork;
//! use ndarray::Array1;
//!
//! let network = QNetworkBuilder::new()
//!     .state_size(37)
//!     .action_size(4)
//!     .seed(0)
//!     .dueling()
//!     .build()
//!     .unwrap();
//!
//! let mut buffer = ReplayBufferBuilder::new()
//!     .action_size(4)
//!     .buffer_size(10_000)
//!     .batch_size(64)
//!     .build()
//!     .unwrap();
//!
//! let state = Array1::zeros(37);
//! let action = network.greedy_action(state.view()).unwrap();
//! buffer.add(state.clone(), action, 0.0, state, false);
//!
//! if buffer.is_ready_to_sample() {
//!     let batch = buffer.sample().unwrap();
//!     let q_next = network.forward_batch(batch.next_states.view()).unwrap();
//!     assert_eq!(q_next.ncols(), 4);
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions applied after each layer
//! - [`builders`] - Builder patterns for networks and buffers
//! - [`config`] - Serializable construction-time configuration
//! - [`error`] - Error types and result handling
//! - [`layers`] - Dense layers and weight initialization
//! - [`network`] - Plain and dueling Q-networks
//! - [`replay_buffer`] - Experience replay

pub mod activations;
pub mod builders;
pub mod config;
pub mod error;
pub mod layers;
pub mod network;
pub mod replay_buffer;

pub use config::{Architecture, Device, QNetworkConfig, ReplayBufferConfig};
pub use error::{QrlError, Result};
pub use network::{DuelingQNetwork, FunctionApproximator, QNetwork, ValueNetwork};
pub use replay_buffer::{Experience, ExperienceBatch, ReplayBuffer};
