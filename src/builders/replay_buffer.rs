use crate::config::{Device, ReplayBufferConfig};
use crate::error::{Result, QrlError};
use crate::replay_buffer::ReplayBuffer;

/// Builder for ReplayBuffer
pub struct ReplayBufferBuilder {
    action_size: Option<usize>,
    config: ReplayBufferConfig,
    device: Option<String>,
}

impl ReplayBufferBuilder {
    /// Create a new replay buffer builder with the default sizes
    pub fn new() -> Self {
        ReplayBufferBuilder {
            action_size: None,
            config: ReplayBufferConfig::new(0),
            device: None,
        }
    }

    pub fn action_size(mut self, action_size: usize) -> Self {
        self.action_size = Some(action_size);
        self
    }

    /// Set the capacity
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.buffer_size = buffer_size;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Seed for the sampling generator
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Placement target, parsed when the buffer is built
    pub fn device(mut self, device: &str) -> Self {
        self.device = Some(device.to_string());
        self
    }

    /// Build the replay buffer
    pub fn build(self) -> Result<ReplayBuffer> {
        let action_size = self.action_size.ok_or_else(|| QrlError::InvalidParameter {
            name: "action_size".to_string(),
            reason: "Action size not specified".to_string(),
        })?;

        let mut config = self.config;
        config.action_size = action_size;
        if let Some(device) = self.device {
            config.device = device.parse::<Device>()?;
        }
        ReplayBuffer::from_config(&config)
    }
}

impl Default for ReplayBufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
