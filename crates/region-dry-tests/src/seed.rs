// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic proptest runners.
//!
//! To explore a different seed locally, either set `PROPTEST_SEED` for the
//! `proptest!` macro tests or edit [`SEED_BYTES`] for runner-based tests.

use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

/// Seed shared by every pinned runner. `TestRng::from_seed` expects 32 bytes.
pub const SEED_BYTES: [u8; 32] = [
    0x52, 0x45, 0x47, 0x49, 0x4f, 0x4e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
];

/// Runner with proptest's default case count on the pinned seed.
pub fn pinned_runner() -> TestRunner {
    runner_with(PropConfig::default())
}

/// Runner with `cases` cases on the pinned seed.
pub fn pinned_runner_with_cases(cases: u32) -> TestRunner {
    runner_with(PropConfig::with_cases(cases))
}

fn runner_with(config: PropConfig) -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(config, rng)
}
