use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Fixed pool of browser signatures, rotated per request.
/// Best-effort mimicry of a browser client; carries no correctness
/// guarantee and upstream may still reject requests.
pub const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
];

/// Build the header set for one upstream call: a user agent chosen uniformly
/// from the pool, browser-like accept/fetch headers, and the referer/origin
/// pair of the mimicked calling site.
pub fn random_headers(referer: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let user_agent = {
        let mut rng = rand::thread_rng();
        *USER_AGENTS
            .choose(&mut rng)
            .unwrap_or(&USER_AGENTS[0])
    };

    if let Ok(value) = HeaderValue::from_str(user_agent) {
        headers.insert(HeaderName::from_static("user-agent"), value);
    }

    headers.insert(
        HeaderName::from_static("accept"),
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        HeaderName::from_static("accept-language"),
        HeaderValue::from_static("vi-VN,vi;q=0.9,en;q=0.8,ja;q=0.7"),
    );
    // Accept-Encoding is left to the client: setting it by hand would turn
    // off reqwest's automatic decompression of the reply body
    headers.insert(
        HeaderName::from_static("connection"),
        HeaderValue::from_static("keep-alive"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("cross-site"),
    );

    if let Ok(value) = HeaderValue::from_str(referer) {
        headers.insert(HeaderName::from_static("referer"), value);
    }
    if let Ok(value) = HeaderValue::from_str(referer.trim_end_matches('/')) {
        headers.insert(HeaderName::from_static("origin"), value);
    }

    headers
}
