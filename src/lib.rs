//! Library entry for Shopsea exposing core logic for integration tests.

pub mod app;

#[cfg(test)]
mod test_utils;

pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
