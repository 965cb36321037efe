#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use nse_rs::NseClient;
use std::{env, fs, path::Path};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Reads `tests/fixtures/<endpoint>_<key>.<ext>`, the file a `test-mode` recording writes.
pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn is_recording() -> bool {
    env::var("NSE_RECORD").ok().as_deref() == Some("1")
}

/// Live tests hit the real site; they only run with `NSE_LIVE=1` or while recording.
pub fn live_or_record_enabled() -> bool {
    is_recording() || env::var("NSE_LIVE").ok().as_deref() == Some("1")
}

fn server_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.base_url())).unwrap()
}

/// A client whose site and archive hosts both point at the mock server, with warmup off.
pub fn client_for(server: &MockServer) -> NseClient {
    NseClient::builder()
        .base_url(server_url(server))
        .archives_url(server_url(server))
        .warmup(false)
        .build()
        .unwrap()
}

pub fn mock_json<'a>(server: &'a MockServer, path: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body("");
    })
}
