use crate::state::Product;

/// Endpoint returning the full product list as a JSON array.
const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// What: Fetch the full product catalog from the Fake Store API.
///
/// Inputs:
/// - None (issues a single unauthenticated GET in a blocking task).
///
/// Output:
/// - `Ok(Vec<Product>)` in API order on success; `Err` when the request
///   fails, returns a non-2xx status, or the body is not a product array.
///
/// Details:
/// - Runs curl via `spawn_blocking` so the event loop keeps rendering while
///   the request is in flight. The catalog is fetched exactly once per
///   session; callers decide how to surface a failure.
pub async fn fetch_products() -> super::Result<Vec<Product>> {
    let v = tokio::task::spawn_blocking(|| super::curl_json(PRODUCTS_URL)).await??;
    let products: Vec<Product> = serde_json::from_value(v)?;
    Ok(products)
}

#[cfg(not(target_os = "windows"))]
#[cfg(test)]
mod tests {
    #[tokio::test]
    #[allow(clippy::await_holding_lock)]
    /// What: Decode a product array via a shimmed curl, then exercise the error path.
    ///
    /// Inputs:
    /// - Fake `curl` on PATH returning two products (one without a rating)
    ///   on the first call and exiting non-zero on the second.
    ///
    /// Output:
    /// - First call yields both products with the rating defaulted; second
    ///   call yields an error.
    async fn products_decode_on_success_and_error_on_failure() {
        let _guard = crate::sources::lock_test_mutex();
        let _path_guard = crate::test_utils::lock_path_mutex();
        let old_path = std::env::var("PATH").unwrap_or_default();
        let root = tempfile::Builder::new()
            .prefix("shopsea_fake_curl_products_")
            .tempdir()
            .unwrap();
        let bin = root.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let curl = bin.join("curl");
        let script = r##"#!/usr/bin/env bash
set -e
state_dir="${SHOPSEA_FAKE_STATE_DIR:-.}"
if [[ ! -f "$state_dir/shopsea_products_called" ]]; then
  : > "$state_dir/shopsea_products_called"
  echo '[{"id":1,"title":"Backpack","price":109.95,"category":"men'\''s clothing","image":"https://example.invalid/1.png","rating":{"rate":3.9,"count":120}},{"id":2,"title":"Mug","price":4.5,"category":"home","image":""}]'
else
  exit 22
fi
"##;
        std::fs::write(&curl, script.as_bytes()).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perm = std::fs::metadata(&curl).unwrap().permissions();
            perm.set_mode(0o755);
            std::fs::set_permissions(&curl, perm).unwrap();
        }
        let new_path = format!("{}:{}", bin.to_string_lossy(), old_path);
        unsafe {
            std::env::set_var("PATH", &new_path);
            std::env::set_var("SHOPSEA_FAKE_STATE_DIR", bin.to_string_lossy().to_string());
        }

        let products = super::fetch_products().await.expect("first fetch succeeds");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].rating.count, 120);
        assert_eq!(products[1].rating.count, 0, "missing rating defaults");

        let err = super::fetch_products().await;
        assert!(err.is_err());

        unsafe {
            std::env::set_var("PATH", &old_path);
            std::env::remove_var("SHOPSEA_FAKE_STATE_DIR");
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    #[allow(clippy::await_holding_lock)]
    /// What: A body that is valid JSON but not a product array is an error.
    async fn products_reject_malformed_body() {
        let _guard = crate::sources::lock_test_mutex();
        let _path_guard = crate::test_utils::lock_path_mutex();
        let old_path = std::env::var("PATH").unwrap_or_default();
        let root = tempfile::Builder::new()
            .prefix("shopsea_fake_curl_badjson_")
            .tempdir()
            .unwrap();
        let bin = root.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let curl = bin.join("curl");
        std::fs::write(&curl, b"#!/usr/bin/env bash\necho '{\"status\":\"teapot\"}'\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perm = std::fs::metadata(&curl).unwrap().permissions();
            perm.set_mode(0o755);
            std::fs::set_permissions(&curl, perm).unwrap();
        }
        unsafe {
            std::env::set_var("PATH", format!("{}:{}", bin.to_string_lossy(), old_path));
        }

        assert!(super::fetch_products().await.is_err());

        unsafe { std::env::set_var("PATH", &old_path) };
    }
}
