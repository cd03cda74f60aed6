#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use qrl_navigation::network::{DuelingQNetwork, QNetwork, ValueNetwork};
    use qrl_navigation::replay_buffer::ReplayBuffer;
    use ndarray::{Array1, Array2};
    use std::collections::HashSet;

    // Strategy for generating valid hidden widths
    fn fc_units_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..=48, 1..=4)
    }

    // Strategy for generating a batch of bounded states
    fn states_strategy(batch: usize, state_size: usize) -> impl Strategy<Value = Array2<f32>> {
        prop::collection::vec(-10.0f32..10.0, batch * state_size)
            .prop_map(move |v| Array2::from_shape_vec((batch, state_size), v).unwrap())
    }

    proptest! {
        #[test]
        fn test_forward_output_has_action_size(
            fc_units in fc_units_strategy(),
            state_size in 1usize..=12,
            action_size in 1usize..=8,
            seed in any::<u64>(),
        ) {
            let plain = QNetwork::new(state_size, action_size, seed, &fc_units).unwrap();
            let dueling = DuelingQNetwork::new(state_size, action_size, seed, &fc_units).unwrap();
            let state = Array1::<f32>::ones(state_size);

            prop_assert_eq!(plain.forward(state.view()).unwrap().len(), action_size);
            prop_assert_eq!(dueling.forward(state.view()).unwrap().len(), action_size);
        }

        #[test]
        fn test_dueling_centering(
            states in states_strategy(4, 6),
            action_size in 1usize..=9,
            seed in 0u64..1000,
        ) {
            let network = DuelingQNetwork::new(6, action_size, seed, &[24, 12]).unwrap();
            let q_values = network.forward_batch(states.view()).unwrap();
            let (values, _) = network.value_and_advantage(states.view()).unwrap();

            for row in 0..4 {
                let v = values[[row, 0]];
                let mean_offset: f32 = q_values.row(row).iter().map(|&q| q - v).sum::<f32>() / action_size as f32;
                let scale = 1.0 + q_values.row(row).iter().fold(v.abs(), |m, &q| m.max(q.abs()));
                prop_assert!(mean_offset.abs() <= 1e-5 * scale, "mean(Q - V) = {}", mean_offset);
            }
        }

        #[test]
        fn test_same_seed_same_network(seed in any::<u64>(), fc_units in fc_units_strategy()) {
            prop_assert_eq!(
                QNetwork::new(5, 3, seed, &fc_units).unwrap(),
                QNetwork::new(5, 3, seed, &fc_units).unwrap()
            );
            prop_assert_eq!(
                DuelingQNetwork::new(5, 3, seed, &fc_units).unwrap(),
                DuelingQNetwork::new(5, 3, seed, &fc_units).unwrap()
            );
        }

        #[test]
        fn test_buffer_len_bounded_and_fifo(
            buffer_size in 1usize..=40,
            inserts in 0usize..=120,
        ) {
            let mut buffer = ReplayBuffer::new(2, buffer_size, 1, 0).unwrap();
            for tag in 0..inserts {
                buffer.add(Array1::from_elem(1, tag as f32), 0, tag as f32, Array1::zeros(1), false);
                prop_assert!(buffer.len() <= buffer_size);
            }
            prop_assert_eq!(buffer.len(), inserts.min(buffer_size));

            // Everything still stored is among the newest `buffer_size` inserts
            if inserts > buffer_size {
                let oldest_kept = inserts - buffer_size;
                let mut drawn = 0;
                while drawn < 3 * buffer_size {
                    let batch = buffer.sample().unwrap();
                    for &tag in batch.rewards.iter() {
                        prop_assert!(tag as usize >= oldest_kept);
                    }
                    drawn += batch.len();
                }
            }
        }

        #[test]
        fn test_ready_iff_len_exceeds_batch(
            batch_size in 1usize..=32,
            inserts in 0usize..=64,
        ) {
            let mut buffer = ReplayBuffer::new(2, 1000, batch_size, 0).unwrap();
            for tag in 0..inserts {
                buffer.add(Array1::zeros(1), 0, tag as f32, Array1::zeros(1), false);
            }
            prop_assert_eq!(buffer.is_ready_to_sample(), inserts > batch_size);
        }

        #[test]
        fn test_sample_distinct(
            batch_size in 1usize..=16,
            extra in 1usize..=40,
            seed in any::<u64>(),
        ) {
            let mut buffer = ReplayBuffer::new(2, 64, batch_size, seed).unwrap();
            for tag in 0..batch_size + extra {
                buffer.add(Array1::zeros(1), 0, tag as f32, Array1::zeros(1), tag % 2 == 0);
            }
            prop_assert!(buffer.is_ready_to_sample());

            let batch = buffer.sample().unwrap();
            prop_assert_eq!(batch.len(), batch_size);
            let tags: HashSet<u32> = batch.rewards.iter().map(|&r| r as u32).collect();
            prop_assert_eq!(tags.len(), batch_size);
            for &done in batch.dones.iter() {
                prop_assert!(done == 0.0 || done == 1.0);
            }
        }
    }
}
