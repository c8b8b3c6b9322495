//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use s2bridge::{Ability, Buff, StaticCatalog};
use tracing_subscriber::EnvFilter;

pub const MOVE: u32 = 16;
pub const ATTACK: u32 = 3674;
pub const STIMPACK: u32 = 27;

/// Installs a test-writer subscriber once per test binary.
/// Run with `RUST_LOG=s2bridge=trace` to see decode events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small fake catalog standing in for the engine's data tables.
pub fn catalog() -> StaticCatalog {
    StaticCatalog::new(
        [
            Ability::new(MOVE, "MOVE"),
            Ability::new(ATTACK, "ATTACK"),
        ],
        [Buff::new(STIMPACK, "STIMPACK")],
    )
}

pub fn ability(id: u32) -> Ability {
    match id {
        MOVE => Ability::new(MOVE, "MOVE"),
        ATTACK => Ability::new(ATTACK, "ATTACK"),
        _ => panic!("fixture catalog has no ability {id}"),
    }
}
