//! Serializable construction-time configuration.
//!
//! Both configs deserialize from JSON with the documented defaults filled in
//! for missing fields:
//!
//! ```rust
//! use qrl_navigation::config::{Architecture, QNetworkConfig};
//!
//! let config = QNetworkConfig::from_json_str(
//!     r#"{ "state_size": 37, "action_size": 4, "architecture": "dueling" }"#,
//! ).unwrap();
//! assert_eq!(config.fc_units, vec![64, 64]);
//! assert_eq!(config.architecture, Architecture::Dueling);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::{QrlError, Result};
use crate::network::{validate_fc_units, FunctionApproximator, DEFAULT_FC_UNITS};
use crate::replay_buffer::ReplayBuffer;

pub const DEFAULT_BUFFER_SIZE: usize = 100_000;
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Which Q-network variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[default]
    Plain,
    Dueling,
}

/// Placement target for sampled batches. Only host memory is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Device {
    #[default]
    Cpu,
}

impl FromStr for Device {
    type Err = QrlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            other => Err(QrlError::invalid_parameter(
                "device".to_string(),
                format!("unsupported device '{}', only \"cpu\" is available", other),
            )),
        }
    }
}

impl TryFrom<String> for Device {
    type Error = QrlError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
        }
    }
}

fn default_fc_units() -> Vec<usize> {
    DEFAULT_FC_UNITS.to_vec()
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

/// Configuration of a plain or dueling Q-network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QNetworkConfig {
    pub state_size: usize,
    pub action_size: usize,
    /// Seed for parameter initialization
    #[serde(default)]
    pub seed: u64,
    /// Hidden layer widths, in order
    #[serde(default = "default_fc_units")]
    pub fc_units: Vec<usize>,
    #[serde(default)]
    pub architecture: Architecture,
}

impl QNetworkConfig {
    pub fn new(state_size: usize, action_size: usize, seed: u64) -> Self {
        QNetworkConfig {
            state_size,
            action_size,
            seed,
            fc_units: default_fc_units(),
            architecture: Architecture::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.state_size == 0 {
            return Err(QrlError::invalid_parameter("state_size", "must be greater than 0"));
        }
        if self.action_size == 0 {
            return Err(QrlError::invalid_parameter("action_size", "must be greater than 0"));
        }
        validate_fc_units(&self.fc_units)
    }

    pub fn build(&self) -> Result<FunctionApproximator> {
        FunctionApproximator::from_config(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Configuration of a uniform replay buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayBufferConfig {
    pub action_size: usize,
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Seed for the buffer's private sampling generator
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub device: Device,
}

impl ReplayBufferConfig {
    pub fn new(action_size: usize) -> Self {
        ReplayBufferConfig {
            action_size,
            buffer_size: DEFAULT_BUFFER_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: 0,
            device: Device::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(QrlError::invalid_parameter("buffer_size", "must be greater than 0"));
        }
        if self.batch_size == 0 {
            return Err(QrlError::invalid_parameter("batch_size", "must be greater than 0"));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<ReplayBuffer> {
        ReplayBuffer::from_config(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_network_config_defaults() {
        let config = QNetworkConfig::from_json_str(r#"{ "state_size": 8, "action_size": 4 }"#).unwrap();
        assert_eq!(config.seed, 0);
        assert_eq!(config.fc_units, vec![64, 64]);
        assert_eq!(config.architecture, Architecture::Plain);
    }

    #[test]
    fn test_network_config_rejects_bad_fc_units() {
        let empty = QNetworkConfig::from_json_str(r#"{ "state_size": 8, "action_size": 4, "fc_units": [] }"#);
        assert!(matches!(empty, Err(QrlError::InvalidParameter { .. })));

        let zero = QNetworkConfig::from_json_str(r#"{ "state_size": 8, "action_size": 4, "fc_units": [16, 0] }"#);
        assert!(matches!(zero, Err(QrlError::InvalidParameter { .. })));

        let fractional = QNetworkConfig::from_json_str(r#"{ "state_size": 8, "action_size": 4, "fc_units": [16.5] }"#);
        assert!(matches!(fractional, Err(QrlError::SerializationError(_))));

        let scalar = QNetworkConfig::from_json_str(r#"{ "state_size": 8, "action_size": 4, "fc_units": 16 }"#);
        assert!(matches!(scalar, Err(QrlError::SerializationError(_))));
    }

    #[test]
    fn test_replay_config_defaults() {
        let config = ReplayBufferConfig::from_json_str(r#"{ "action_size": 4 }"#).unwrap();
        assert_eq!(config.buffer_size, 100_000);
        assert_eq!(config.batch_size, 64);
        assert_eq!(config.seed, 0);
        assert_eq!(config.device, Device::Cpu);
    }

    #[test]
    fn test_replay_config_rejects_unknown_device() {
        let result = ReplayBufferConfig::from_json_str(r#"{ "action_size": 4, "device": "cuda:0" }"#);
        assert!(result.is_err());
        assert!("cuda".parse::<Device>().is_err());
        assert_eq!("CPU".parse::<Device>().unwrap(), Device::Cpu);
    }

    #[test]
    fn test_device_parsed_the_same_from_json_and_str() {
        for name in ["cpu", "CPU", " Cpu "] {
            let json = format!(r#"{{ "action_size": 4, "device": "{}" }}"#, name);
            let config = ReplayBufferConfig::from_json_str(&json).unwrap();
            assert_eq!(config.device, name.parse::<Device>().unwrap());
        }

        let json = ReplayBufferConfig::from_json_str(r#"{ "action_size": 4, "device": "GPU" }"#);
        assert!(matches!(json, Err(QrlError::SerializationError(_))));
        assert!("GPU".parse::<Device>().is_err());

        let serialized = serde_json::to_string(&ReplayBufferConfig::new(4)).unwrap();
        assert!(serialized.contains(r#""device":"cpu""#));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "state_size": 37, "action_size": 4, "seed": 7, "fc_units": [128, 64, 32], "architecture": "dueling" }}"#
        )
        .unwrap();

        let config = QNetworkConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.fc_units, vec![128, 64, 32]);

        let network = config.build().unwrap();
        assert_eq!(network.architecture(), Architecture::Dueling);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReplayBufferConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(QrlError::IoError(_))));
    }
}
