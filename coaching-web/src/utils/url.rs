//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL.
///
/// Reads `window.location.search` directly, for use before the router's
/// query map is available.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Look up `key` in a raw query string, with or without the leading `?`.
///
/// A bare key without `=` yields an empty value.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}
