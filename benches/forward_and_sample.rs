//! Throughput of the two hot paths of a training step: a batched forward
//! pass and drawing a replay batch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::{Array1, Array2};
use qrl_navigation::network::{DuelingQNetwork, QNetwork, ValueNetwork};
use qrl_navigation::replay_buffer::ReplayBuffer;

const STATE_SIZE: usize = 37;
const ACTION_SIZE: usize = 4;
const BATCH_SIZE: usize = 64;

fn bench_forward(c: &mut Criterion) {
    let plain = QNetwork::new(STATE_SIZE, ACTION_SIZE, 0, &[64, 64]).unwrap();
    let dueling = DuelingQNetwork::new(STATE_SIZE, ACTION_SIZE, 0, &[64, 64]).unwrap();
    let states = Array2::<f32>::from_shape_fn((BATCH_SIZE, STATE_SIZE), |(i, j)| {
        ((i * STATE_SIZE + j) as f32 * 0.01).sin()
    });

    c.bench_function("plain forward_batch 64x37", |b| {
        b.iter(|| plain.forward_batch(black_box(states.view())).unwrap())
    });
    c.bench_function("dueling forward_batch 64x37", |b| {
        b.iter(|| dueling.forward_batch(black_box(states.view())).unwrap())
    });
}

fn bench_sample(c: &mut Criterion) {
    let mut buffer = ReplayBuffer::new(ACTION_SIZE, 100_000, BATCH_SIZE, 0).unwrap();
    for step in 0..100_000 {
        let state = Array1::from_elem(STATE_SIZE, step as f32);
        buffer.add(state.clone(), step % ACTION_SIZE, 0.0, state, step % 300 == 0);
    }

    c.bench_function("sample 64 of 100k", |b| b.iter(|| buffer.sample().unwrap()));
}

criterion_group!(benches, bench_forward, bench_sample);
criterion_main!(benches);
