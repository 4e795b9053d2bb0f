//! Shared mock-backend helpers for the store integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use gridlog_auth::{TokenKind, TokenStore};
use gridlog_client::ApiClient;
use gridlog_config::ApiConfig;

/// Serve each incoming request on its own thread so slow handlers never
/// block the rest of a test.
pub fn spawn_server<H>(handler: H) -> String
where
    H: Fn(tiny_http::Request) + Send + Sync + 'static,
{
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("tcp listener")
        .port();
    let handler = Arc::new(handler);
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let handler = Arc::clone(&handler);
            std::thread::spawn(move || handler(request));
        }
    });
    format!("http://127.0.0.1:{port}")
}

pub fn json_response(status: u16, body: &str) -> tiny_http::Response<Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(body)
        .with_status_code(status)
        .with_header(
            tiny_http::Header::from_bytes("Content-Type", "application/json")
                .expect("valid header"),
        )
}

pub fn read_body(request: &mut tiny_http::Request) -> String {
    let mut body = String::new();
    let _ = std::io::Read::read_to_string(request.as_reader(), &mut body);
    body
}

pub fn client(base: &str, dir: &std::path::Path) -> ApiClient {
    let store = TokenStore::at(dir);
    store.store(TokenKind::Access, "access-token").expect("seed access");
    store
        .store(TokenKind::Refresh, "refresh-token")
        .expect("seed refresh");
    let api = ApiConfig {
        base_url: base.to_string(),
        prefix: "/api/v1".to_string(),
    };
    ApiClient::new(&api, store)
}

/// Client with no stored tokens, for login-flow tests.
pub fn anonymous_client(base: &str, dir: &std::path::Path) -> ApiClient {
    let api = ApiConfig {
        base_url: base.to_string(),
        prefix: "/api/v1".to_string(),
    };
    ApiClient::new(&api, TokenStore::at(dir))
}
