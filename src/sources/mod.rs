//! Remote catalog retrieval split into submodules.

use crate::util::curl_args;
use serde_json::Value;

mod categories;
mod products;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Fetch JSON from a URL using curl and parse into `serde_json::Value`
///
/// Input: `url` HTTP(S) to request
/// Output: `Ok(Value)` on success; `Err` if curl fails or the response is not valid JSON
///
/// Details: Executes curl with appropriate flags and parses the UTF-8 body with `serde_json`.
/// On Windows, uses `-k` flag to skip SSL certificate verification.
fn curl_json(url: &str) -> Result<Value> {
    let args = curl_args(url, &[]);
    let out = std::process::Command::new("curl").args(&args).output()?;
    if !out.status.success() {
        return Err(format!("curl failed: {:?}", out.status).into());
    }
    let body = String::from_utf8(out.stdout)?;
    let v: Value = serde_json::from_str(&body)?;
    Ok(v)
}

pub use categories::fetch_categories;
pub use products::fetch_products;

#[cfg(not(target_os = "windows"))]
#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(not(target_os = "windows"))]
#[cfg(test)]
/// What: Provide a shared mutex to serialize tests that mutate PATH or curl shims.
///
/// Input: None.
/// Output: `&'static Mutex<()>` guard to synchronize tests touching global state.
///
/// Details: Lazily initializes a global `Mutex` via `OnceLock` for cross-test coordination.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(not(target_os = "windows"))]
#[cfg(test)]
/// What: Acquire test mutex lock with automatic poison recovery.
pub(crate) fn lock_test_mutex() -> std::sync::MutexGuard<'static, ()> {
    test_mutex().lock().unwrap_or_else(|e| e.into_inner())
}
