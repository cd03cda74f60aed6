use crate::config::{Architecture, QNetworkConfig};
use crate::error::{Result, QrlError};
use crate::network::{DuelingQNetwork, FunctionApproximator, QNetwork};

/// Builder for constructing Q-networks with a fluent API
pub struct QNetworkBuilder {
    state_size: Option<usize>,
    action_size: Option<usize>,
    seed: u64,
    fc_units: Option<Vec<usize>>,
    architecture: Architecture,
}

impl QNetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        QNetworkBuilder {
            state_size: None,
            action_size: None,
            seed: 0,
            fc_units: None,
            architecture: Architecture::Plain,
        }
    }

    pub fn state_size(mut self, state_size: usize) -> Self {
        self.state_size = Some(state_size);
        self
    }

    pub fn action_size(mut self, action_size: usize) -> Self {
        self.action_size = Some(action_size);
        self
    }

    /// Seed for parameter initialization
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Hidden layer widths, in order
    pub fn fc_units(mut self, fc_units: &[usize]) -> Self {
        self.fc_units = Some(fc_units.to_vec());
        self
    }

    /// Build the dueling variant instead of the plain one
    pub fn dueling(mut self) -> Self {
        self.architecture = Architecture::Dueling;
        self
    }

    /// Build the plain variant (the default)
    pub fn plain(mut self) -> Self {
        self.architecture = Architecture::Plain;
        self
    }

    /// Assemble and validate the configuration without building a network
    pub fn config(self) -> Result<QNetworkConfig> {
        let state_size = self.state_size.ok_or_else(|| QrlError::InvalidParameter {
            name: "state_size".to_string(),
            reason: "State size not specified".to_string(),
        })?;
        let action_size = self.action_size.ok_or_else(|| QrlError::InvalidParameter {
            name: "action_size".to_string(),
            reason: "Action size not specified".to_string(),
        })?;

        let mut config = QNetworkConfig::new(state_size, action_size, self.seed);
        if let Some(fc_units) = self.fc_units {
            config.fc_units = fc_units;
        }
        config.architecture = self.architecture;
        config.validate()?;
        Ok(config)
    }

    /// Build whichever variant was selected
    pub fn build(self) -> Result<FunctionApproximator> {
        FunctionApproximator::from_config(&self.config()?)
    }

    /// Build a plain network regardless of the selected variant
    pub fn build_plain(self) -> Result<QNetwork> {
        let config = self.config()?;
        QNetwork::new(config.state_size, config.action_size, config.seed, &config.fc_units)
    }

    /// Build a dueling network regardless of the selected variant
    pub fn build_dueling(self) -> Result<DuelingQNetwork> {
        let config = self.config()?;
        DuelingQNetwork::new(config.state_size, config.action_size, config.seed, &config.fc_units)
    }
}

impl Default for QNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
