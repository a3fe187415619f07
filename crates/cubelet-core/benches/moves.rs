//! Benchmarks for move application and progress detectors.
//!
//! These are the operations external search and training loops call on every
//! step, so they are measured in isolation.
//!
//! # Benchmarks
//!
//! - **`apply_move`**: Applies one named move (by action index) to a scrambled
//!   state, for one face turn of each modifier and one rotation.
//! - **`apply_sequence`**: Applies a fixed 20-move algorithm from solved.
//! - **`detectors`**: Evaluates `is_solved`, `cross_count`, `f2l_slots_solved`
//!   and `eo_solved` on a scrambled state.
//! - **`parse_algorithm`**: Parses extended notation with wide and slice turns.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench moves
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use cubelet_core::{CubeState, Move, parse_algorithm};

const SCRAMBLE: &str = "D2 B2 L2 U' F2 U' R2 D F2 L2 U R' F' L' B D' R' B' D R2";
const EXTENDED: &str = "(r U R' U') M2 | (U R U' r') // comment\nS E' f2 Rw'";

fn scrambled() -> CubeState {
    let mut state = CubeState::SOLVED;
    for mv in parse_algorithm(SCRAMBLE).unwrap() {
        state.apply(mv);
    }
    state
}

fn bench_apply_move(c: &mut Criterion) {
    let state = scrambled();
    for name in ["R", "R'", "R2", "y"] {
        let mv: Move = name.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("apply_move", name), &mv, |b, &mv| {
            b.iter_batched(
                || hint::black_box(state),
                |mut state| {
                    state.apply(mv);
                    state
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_apply_sequence(c: &mut Criterion) {
    let moves = parse_algorithm(SCRAMBLE).unwrap();
    c.bench_function("apply_sequence", |b| {
        b.iter(|| {
            let mut state = CubeState::SOLVED;
            for &mv in hint::black_box(&moves) {
                state.apply(mv);
            }
            state
        });
    });
}

fn bench_detectors(c: &mut Criterion) {
    let state = scrambled();
    c.bench_function("detectors", |b| {
        b.iter(|| {
            let state = hint::black_box(&state);
            (
                state.is_solved(),
                state.cross_count(),
                state.f2l_slots_solved(),
                state.eo_solved(),
            )
        });
    });
}

fn bench_parse_algorithm(c: &mut Criterion) {
    c.bench_function("parse_algorithm", |b| {
        b.iter(|| parse_algorithm(hint::black_box(EXTENDED)).unwrap());
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_apply_move,
        bench_apply_sequence,
        bench_detectors,
        bench_parse_algorithm
);
criterion_main!(benches);
