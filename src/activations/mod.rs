//! # Activation Functions Module
//!
//! Activations applied after each dense layer of a Q-network.
//!
//! - **ReLU** (Rectified Linear Unit): `max(0, x)`, used after every hidden layer
//! - **Linear**: Identity function, used on raw value outputs
//!
//! ## Usage Example
//!
//! ```rust
//! use qrl_navigation::activations::Activation;
//! use ndarray::array;
//!
//! let mut data = array![1.0, -0.5, 0.0, 2.0];
//! Activation::Relu.apply(&mut data);
//! assert_eq!(data, array![1.0, 0.0, 0.0, 2.0]);
//! ```

pub mod functions;

pub use functions::Activation;
