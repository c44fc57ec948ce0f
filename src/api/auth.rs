use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

pub fn authenticated_headers(secret_key: &str) -> HeaderMap {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {secret_key}"))
        .expect("header value is ascii");
    bearer.set_sensitive(true);
    let mut map = HeaderMap::new();
    map.insert(AUTHORIZATION, bearer);
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    map
}
