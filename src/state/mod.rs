//! Application state module.
//!
//! Splits the session state into `types` (wire and UI data types) and
//! `app_state` (the mutable [`AppState`] container plus its transitions),
//! re-exported under `crate::state::*`.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, DEBOUNCE, TOAST_TTL};
pub use types::{CatalogError, FetchEvent, Focus, Product, Rating};
