//! In-process stand-in for the schema registry, for tests.
//!
//! Enabled with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! bw-registry = { workspace = true, features = ["testing"] }
//! ```

use std::io::Read;
use std::thread::JoinHandle;
use std::time::Duration;

/// A request as seen by the stub registry.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<tiny_http::Header>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &'static str) -> Option<String> {
        self.headers
            .iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str().to_string())
    }
}

/// Registry stub answering exactly one request with a canned JSON body.
pub struct StubRegistry {
    pub base_url: String,
    handle: JoinHandle<Option<CapturedRequest>>,
}

impl StubRegistry {
    pub fn respond_with(status: u16, body: &'static str) -> Self {
        Self::spawn(status, body, Duration::from_secs(10))
    }

    /// Listen for `window` only, for asserting that nothing was sent.
    pub fn listening_for(window: Duration) -> Self {
        Self::spawn(200, r#"{"success": true}"#, window)
    }

    fn spawn(status: u16, body: &'static str, window: Duration) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("stub registry should bind");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("stub registry has an ip address");

        let handle = std::thread::spawn(move || {
            let mut request = server.recv_timeout(window).ok().flatten()?;

            let mut body_in = String::new();
            request
                .as_reader()
                .read_to_string(&mut body_in)
                .expect("request body should be readable");

            let captured = CapturedRequest {
                method: request.method().to_string(),
                path: request.url().to_string(),
                headers: request.headers().to_vec(),
                body: body_in,
            };

            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("valid header"),
                );
            let _ = request.respond(response);
            Some(captured)
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/"),
            handle,
        }
    }

    /// Wait for the stub to finish and return what it received.
    pub fn captured(self) -> Option<CapturedRequest> {
        self.handle.join().expect("stub registry thread panicked")
    }
}

/// A local address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
