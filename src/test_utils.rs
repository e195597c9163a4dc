//! Global test utilities for ensuring test isolation.

#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(test)]
/// Global mutex for tests that modify the PATH environment variable.
///
/// Since `std::env::set_var` affects the entire process, all tests that
/// modify PATH must serialize their execution using this mutex to prevent
/// race conditions between parallel tests.
static PATH_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

#[cfg(test)]
/// Acquire the global PATH mutex to safely modify PATH environment variable.
///
/// Output:
/// - `MutexGuard<()>` that must be held while PATH is modified.
///
/// Details:
/// - Automatically recovers from poisoned mutex (from panicked tests).
/// - Hold this guard for the entire duration that PATH is modified.
pub fn lock_path_mutex() -> std::sync::MutexGuard<'static, ()> {
    PATH_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}
