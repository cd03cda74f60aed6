//! # Experience Replay
//!
//! A fixed-capacity ring of transitions with uniform sampling without
//! replacement. Once the ring is full, every insertion overwrites the oldest
//! transition. The buffer owns its own seeded `StdRng`, so two buffers built
//! with the same seed and fed the same transitions draw identical batches.
//!
//! ```rust
//! use qrl_navigation::replay_buffer::ReplayBuffer;
//! use ndarray::array;
//!
//! let mut buffer = ReplayBuffer::new(2, 1000, 2, 0).unwrap();
//! for step in 0..3 {
//!     let state = array![step as f32, 0.0];
//!     let next_state = array![step as f32 + 1.0, 0.0];
//!     buffer.add(state, step % 2, 1.0, next_state, false);
//! }
//! assert!(buffer.is_ready_to_sample());
//! let batch = buffer.sample().unwrap();
//! assert_eq!(batch.states.dim(), (2, 2));
//! ```

use ndarray::{stack, Array1, Array2, ArrayView1, Axis};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::config::{Device, ReplayBufferConfig};
use crate::error::{QrlError, Result};

/// One observed transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: Array1<f32>,
    pub action: usize,
    pub reward: f32,
    pub next_state: Array1<f32>,
    pub done: bool,
}

/// Column-wise view of a sampled batch, rows aligned by draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceBatch {
    /// `(batch, state_size)`
    pub states: Array2<f32>,
    pub actions: Array1<usize>,
    pub rewards: Array1<f32>,
    /// `(batch, state_size)`
    pub next_states: Array2<f32>,
    /// `1.0` for terminal transitions, `0.0` otherwise
    pub dones: Array1<f32>,
}

impl ExperienceBatch {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Fixed-size buffer of transitions with uniform random replay.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    storage: Vec<Experience>,
    /// Slot overwritten by the next insertion once `storage` is full; also
    /// the position of the oldest entry.
    head: usize,
    capacity: usize,
    batch_size: usize,
    action_size: usize,
    device: Device,
    rng: StdRng,
}

impl ReplayBuffer {
    /// Create a buffer holding at most `buffer_size` transitions and
    /// sampling `batch_size` of them at a time.
    pub fn new(action_size: usize, buffer_size: usize, batch_size: usize, seed: u64) -> Result<Self> {
        let mut config = ReplayBufferConfig::new(action_size);
        config.buffer_size = buffer_size;
        config.batch_size = batch_size;
        config.seed = seed;
        Self::from_config(&config)
    }

    pub fn from_config(config: &ReplayBufferConfig) -> Result<Self> {
        config.validate()?;
        if config.batch_size >= config.buffer_size {
            log::warn!(
                "replay buffer batch_size {} is not below buffer_size {}; it will never be ready to sample",
                config.batch_size,
                config.buffer_size
            );
        }
        log::debug!(
            "created replay buffer: capacity {}, batch size {}, seed {}, device {}",
            config.buffer_size,
            config.batch_size,
            config.seed,
            config.device
        );
        Ok(ReplayBuffer {
            storage: Vec::with_capacity(config.buffer_size),
            head: 0,
            capacity: config.buffer_size,
            batch_size: config.batch_size,
            action_size: config.action_size,
            device: config.device,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Store a transition, evicting the oldest one when the buffer is full.
    pub fn add(
        &mut self,
        state: Array1<f32>,
        action: usize,
        reward: f32,
        next_state: Array1<f32>,
        done: bool,
    ) {
        let experience = Experience {
            state,
            action,
            reward,
            next_state,
            done,
        };
        if self.storage.len() < self.capacity {
            self.storage.push(experience);
        } else {
            self.storage[self.head] = experience;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Draw `batch_size` distinct transitions uniformly at random.
    ///
    /// Callers are expected to gate this on [`is_ready_to_sample`](Self::is_ready_to_sample);
    /// asking for more transitions than are stored is an error.
    pub fn sample(&mut self) -> Result<ExperienceBatch> {
        let available = self.storage.len();
        if self.batch_size > available {
            return Err(QrlError::InsufficientExperiences {
                requested: self.batch_size,
                available,
            });
        }

        let drawn = index::sample(&mut self.rng, available, self.batch_size);
        let experiences: Vec<&Experience> = drawn.iter().map(|i| &self.storage[i]).collect();
        log::trace!("sampled {} of {} stored transitions", drawn.len(), available);

        let states: Vec<ArrayView1<f32>> = experiences.iter().map(|e| e.state.view()).collect();
        let next_states: Vec<ArrayView1<f32>> = experiences.iter().map(|e| e.next_state.view()).collect();

        Ok(ExperienceBatch {
            states: stack(Axis(0), &states)?,
            actions: experiences.iter().map(|e| e.action).collect(),
            rewards: experiences.iter().map(|e| e.reward).collect(),
            next_states: stack(Axis(0), &next_states)?,
            dones: experiences.iter().map(|e| if e.done { 1.0 } else { 0.0 }).collect(),
        })
    }

    /// True once the buffer holds strictly more than `batch_size` transitions.
    pub fn is_ready_to_sample(&self) -> bool {
        self.storage.len() > self.batch_size
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn action_size(&self) -> usize {
        self.action_size
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// Stored transitions from oldest to newest. Sampling never reorders them.
    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        let (newer, older) = self.storage.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}
