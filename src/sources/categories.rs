/// Endpoint returning the category names as a JSON array of strings.
const CATEGORIES_URL: &str = "https://fakestoreapi.com/products/categories";

/// What: Fetch the category list from the Fake Store API.
///
/// Inputs:
/// - None (single unauthenticated GET in a blocking task).
///
/// Output:
/// - `Ok(Vec<String>)` with the raw category names, in API order, without
///   the "All" sentinel (the controller prepends it); `Err` on any network
///   or decode failure.
///
/// Details:
/// - A failure here is non-fatal for the application: the caller degrades
///   to the sentinel-only selector and keeps browsing products.
pub async fn fetch_categories() -> super::Result<Vec<String>> {
    let v = tokio::task::spawn_blocking(|| super::curl_json(CATEGORIES_URL)).await??;
    let arr = v
        .as_array()
        .ok_or("categories response is not a JSON array")?;
    let mut out = Vec::with_capacity(arr.len());
    for entry in arr {
        match entry.as_str() {
            Some(s) => out.push(s.to_string()),
            None => return Err("categories response contains a non-string entry".into()),
        }
    }
    Ok(out)
}
